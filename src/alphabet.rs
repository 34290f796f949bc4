//! Mapping between uppercase letters and trie edge indexes.
//!
//! Board cells and dictionary words share one alphabet, 'A' through 'Z'. The only wrinkle is the
//! Q-digraph: a `Q` cell on the board spells "QU", so anything that turns cells into words goes
//! through [`spelling`] rather than [`letter_char`].

use smallvec::SmallVec;

use crate::error::BoggleError;
use crate::{Result, ALPHABET_SIZE};

/// An identifier for a letter, based on its offset from 'A'.
pub type LetterId = usize;

pub const Q: LetterId = (b'Q' - b'A') as LetterId;
pub const U: LetterId = (b'U' - b'A') as LetterId;

/// Return the id for an uppercase ASCII letter, or None for anything else.
pub fn letter_id(c: char) -> Option<LetterId> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as LetterId)
    } else {
        None
    }
}

pub fn letter_char(id: LetterId) -> char {
    debug_assert!(id < ALPHABET_SIZE);
    (b'A' + id as u8) as char
}

/// The letters a board cell contributes to a word.
pub fn spelling(id: LetterId) -> &'static str {
    const SPELLINGS: [&str; ALPHABET_SIZE] = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R",
        "S", "T", "U", "V", "W", "X", "Y", "Z",
    ];
    SPELLINGS[id]
}

pub fn spelled_len(id: LetterId) -> usize {
    if id == Q {
        2
    } else {
        1
    }
}

/// Convert a word into letter ids, taking every character literally (no Q expansion).
pub fn encode_word(word: &str) -> Result<SmallVec<[LetterId; 16]>> {
    word.chars()
        .enumerate()
        .map(|(position, letter)| {
            letter_id(letter).ok_or(BoggleError::InvalidLetter { letter, position })
        })
        .collect()
}
