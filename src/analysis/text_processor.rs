//! Text preprocessing and tokenization

use regex::Regex;
use std::collections::HashSet;

pub struct TextProcessor {
    stop_words: HashSet<String>,
    punctuation_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            punctuation_regex: Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"),
        }
    }

    /// Tokenize text into lowercase alphanumeric words: punctuation is
    /// stripped to spaces, then tokens of length <= 2 and stop words are
    /// filtered out. Pure and deterministic.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.punctuation_regex.replace_all(&lowered, " ");

        cleaned
            .split_whitespace()
            .filter(|word| word.len() > 2 && !self.stop_words.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }

    /// Tokens as a set, for membership checks during skill extraction
    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    /// Fixed stop-word set: articles, conjunctions, prepositions, and
    /// auxiliary verbs.
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
            "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
            "do", "does", "did", "will", "would", "should", "could", "may", "might", "must", "can",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}
