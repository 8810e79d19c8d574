//! Text normalizer
//!
//! Trims, lowercases, and blanks out every character outside a fixed
//! alphabet: ASCII letters and digits, the Spanish accented vowels, `ü`, `ñ`,
//! and whitespace. The accented set is fixed; `à`, `ç` and friends are not
//! letters here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters outside the word alphabet
pub static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-záéíóúüñ0-9\s]").expect("Invalid DISALLOWED_RE regex"));

/// Accented characters accepted in words
pub const ACCENTED_CHARS: [char; 7] = ['á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ'];

/// Normalize one raw line
///
/// Each disallowed character becomes exactly one space; runs are not
/// collapsed. Never fails, and may return an empty or all-space string.
pub fn normalize_line(line: &str) -> String {
    let lowered = line.trim().to_lowercase();
    DISALLOWED_RE.replace_all(&lowered, " ").into_owned()
}

/// Whether `c` may appear inside a word
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ACCENTED_CHARS.contains(&c)
}
