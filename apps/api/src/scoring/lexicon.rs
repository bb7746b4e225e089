//! Fixed lexical tables used by the response analyzer.
//!
//! Every entry is matched by plain substring containment against the
//! lowercased response, so entries must stay lowercase.

/// Terms that signal constructive, optimistic thinking.
pub const POSITIVE_INDICATORS: &[&str] = &[
    "success",
    "achieve",
    "inspire",
    "confident",
    "courage",
    "determined",
    "hope",
    "positive",
    "brave",
    "strong",
    "strength",
    "win",
    "victory",
    "progress",
    "improve",
    "growth",
    "opportunity",
    "honest",
    "trust",
    "loyal",
    "dedication",
    "discipline",
    "cooperation",
    "help",
    "support",
    "care",
    "kind",
    "respect",
    "responsible",
    "duty",
    "honour",
    "honor",
    "pride",
    "proud",
    "happy",
    "joy",
    "peace",
    "love",
    "friend",
    "unity",
    "team",
    "together",
    "learn",
    "knowledge",
    "wisdom",
    "smart",
    "creative",
    "innovative",
    "motivate",
    "encourage",
    "energetic",
    "enthusiasm",
    "optimistic",
    "patience",
    "calm",
    "faith",
    "solution",
    "overcome",
    "excel",
    "prosper",
];

/// Terms that signal pessimism, avoidance or hostility.
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "no",
    "not",
    "never",
    "fail",
    "bad",
    "hate",
    "fear",
    "lose",
    "loss",
    "defeat",
    "weak",
    "sad",
    "angry",
    "anger",
    "hopeless",
    "helpless",
    "useless",
    "worthless",
    "impossible",
    "difficult",
    "problem",
    "worry",
    "afraid",
    "cry",
    "die",
    "death",
    "kill",
    "destroy",
    "pain",
    "hurt",
    "lonely",
    "alone",
    "guilt",
    "shame",
    "jealous",
    "cruel",
    "quit",
    "give up",
    "regret",
    "doubt",
];

/// Verbs of initiative and execution.
pub const ACTION_WORDS: &[&str] = &[
    "lead",
    "execute",
    "build",
    "create",
    "organize",
    "plan",
    "act",
    "decide",
    "solve",
    "start",
    "initiate",
    "drive",
    "manage",
    "guide",
    "direct",
    "command",
    "attack",
    "fight",
    "defend",
    "protect",
    "serve",
    "work",
    "train",
    "prepare",
    "complete",
    "perform",
    "develop",
    "implement",
    "coordinate",
    "volunteer",
    "take charge",
    "move",
    "run",
    "push",
    "tackle",
    "conquer",
];

/// Stock phrases that read as rehearsed rather than spontaneous.
pub const CLICHE_PHRASES: &[&str] = &["key to success", "important for", "leads to"];

/// Hand-authored associations for stimulus words whose related responses
/// often avoid repeating the word itself. Keys are lowercase.
const CONCEPT_MAP: &[(&str, &[&str])] = &[
    (
        "leader",
        &["guide", "inspire", "direct", "manage", "team", "follow"],
    ),
    ("team", &["together", "group", "unity", "cooperation", "members"]),
    ("success", &["achieve", "win", "goal", "victory", "effort"]),
    ("failure", &["learn", "lesson", "try", "again", "stepping stone"]),
    ("courage", &["brave", "fear", "bold", "risk", "face"]),
    ("fear", &["courage", "overcome", "face", "brave"]),
    ("challenge", &["opportunity", "overcome", "face", "accept"]),
    ("discipline", &["order", "routine", "punctual", "control"]),
    ("duty", &["responsibility", "serve", "obligation", "nation"]),
    ("help", &["support", "assist", "aid", "needy"]),
];

/// Returns the associated terms for a lowercase stimulus word, if it has any.
pub fn related_terms(word: &str) -> Option<&'static [&'static str]> {
    CONCEPT_MAP
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, terms)| *terms)
}

/// Counts how many distinct entries of `lexicon` occur in `text`.
pub fn count_matches(text: &str, lexicon: &[&str]) -> u32 {
    lexicon.iter().filter(|term| text.contains(*term)).count() as u32
}
