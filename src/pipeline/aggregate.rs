//! Aggregator - word frequency table
//!
//! Counting is insertion-ordered: each new word gets the next slot in a
//! `Vec`, and a map only remembers slot positions. A stable sort on count
//! then keeps equal-count words in order of first appearance, independent of
//! hash iteration order.

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::pipeline::normalize::is_word_char;

/// One row of the frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Distinct words with their counts, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// Count tokens; empty tokens are ignored
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for token in tokens {
            let word = token.as_ref();
            if word.is_empty() {
                continue;
            }
            debug_assert!(
                word.chars().all(is_word_char),
                "token {word:?} was not normalized"
            );

            match slots.get(word) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    slots.insert(word.to_string(), entries.len());
                    entries.push(WordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // sort_by_key is stable
        entries.sort_by_key(|e| Reverse(e.count));

        Self { entries }
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for `word`, if present
    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }
}
