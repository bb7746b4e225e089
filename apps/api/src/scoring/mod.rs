// Word Association Test scoring engine.
// lexicon → analyzer (one response) → aggregator (whole test).
// Everything here except handlers is pure and synchronous.

pub mod aggregator;
pub mod analyzer;
pub mod handlers;
pub mod lexicon;
pub mod word_bank;
