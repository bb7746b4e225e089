//! Stimulus word bank for the Word Association Test.

use rand::seq::SliceRandom;
use rand::Rng;

/// The fixed stimulus set. Order carries no meaning; callers always shuffle.
pub const WORD_BANK: &[&str] = &[
    "Leader", "Team", "Failure", "Success", "Courage", "Fear", "Challenge", "Discipline",
    "Duty", "Help", "Army", "Friend", "Risk", "Mother", "Country", "Work",
    "Goal", "Death", "Enemy", "Attack", "Defeat", "Victory", "Sacrifice", "Honesty",
    "Trust", "Love", "Hate", "Alone", "Dark", "Fight", "Problem", "Responsibility",
    "Cooperation", "Initiative", "Confidence", "Hope", "Peace", "War", "Money", "Power",
    "Time", "Life", "Nature", "Society", "Sports", "Health", "Knowledge", "Education",
    "Weapon", "Blood", "Accident", "Crowd", "Rain", "Night", "Father", "Family",
    "Teacher", "Officer", "Soldier", "Nation", "Flag", "Dream", "Struggle", "Mountain",
];

/// Returns `count` distinct words in random order, capped at the bank size.
pub fn get_test_words(count: usize) -> Vec<&'static str> {
    pick_words(&mut rand::thread_rng(), count)
}

/// Same as [`get_test_words`] with a caller-supplied RNG.
pub fn pick_words<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut words = WORD_BANK.to_vec();
    words.shuffle(rng);
    words.truncate(count.min(WORD_BANK.len()));
    words
}
