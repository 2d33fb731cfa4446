use crate::error::InvalidInputError;

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();
pub const ALPHABET_SIZE: usize = ALPHABET.len();

/// Slot of `letter` in a node's child array. `letter` must already be normalized.
pub fn get_idx(letter: u8) -> usize {
    (letter - b'a') as usize
}

pub fn letter_at(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Trims, lowercases and validates a word or prefix.
///
/// Fails with [`InvalidInputError::Empty`] when nothing but whitespace was given and
/// with [`InvalidInputError::InvalidCharacter`] for the first character outside `a..=z`.
pub fn normalize(s: &str) -> Result<String, InvalidInputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    let lower = trimmed.to_lowercase();
    match lower.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(c) => Err(InvalidInputError::InvalidCharacter(c)),
        None => Ok(lower),
    }
}

/// Like [`normalize`], for input that may not have been supplied at all.
pub fn normalize_opt(s: Option<&str>) -> Result<String, InvalidInputError> {
    normalize(s.ok_or(InvalidInputError::Missing)?)
}
