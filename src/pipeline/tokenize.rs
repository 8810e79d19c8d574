//! Tokenizer - whitespace splitting of normalized lines

use crate::core::model::Token;

/// Split a normalized line on runs of whitespace
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Flatten normalized lines into a (line index, word) stream
///
/// Lines without words contribute nothing.
pub fn token_stream<S: AsRef<str>>(lines: &[S]) -> Vec<Token<'_>> {
    lines
        .iter()
        .enumerate()
        .flat_map(|(line, text)| tokenize(text.as_ref()).map(move |word| Token { line, word }))
        .collect()
}
