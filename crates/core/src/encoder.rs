//! Building an [`EncodingTable`] from source text.
//!
//! The encoder makes a single left-to-right pass over the input. The first
//! time a character is seen it gets a fresh record slot, so records end up
//! in first-occurrence order; every later sighting appends to that slot's
//! position list, which therefore grows strictly ascending without any
//! post-sort.
//!
//! # Design
//!
//! Membership of previously-seen characters is tracked with a fixed array
//! of 128 slots, one per ASCII value, holding the record index for that
//! character. Every input character is range-checked against the alphabet
//! before the array is touched; characters outside ASCII are rejected with
//! the offending character and its 1-based position. Position lists are
//! sized to actual occurrence counts, never to the full text length.

use crate::error::{EncodeError, Result};
use crate::table::{CharacterRecord, EncodingTable};

/// Number of values in the supported alphabet (7-bit ASCII).
pub const ALPHABET_SIZE: usize = 128;

/// Input validation limits for the encoder.
///
/// Inputs that violate a limit are rejected outright, never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum accepted input length, in characters
    pub max_input_len: usize,
    /// Maximum number of distinct characters the table may hold
    pub max_distinct_symbols: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_len: 1000,
            max_distinct_symbols: ALPHABET_SIZE,
        }
    }
}

/// Encode `source` into its positional index.
///
/// Records appear in first-occurrence order; each holds the ascending
/// 1-based positions of its character plus derived statistics. Empty input
/// yields an empty table.
///
/// # Errors
/// - `EncodeError::InputTooLong` if `source` exceeds `limits.max_input_len`
/// - `EncodeError::UnsupportedCharacter` at the first non-ASCII character
/// - `EncodeError::TooManyDistinctCharacters` if the distinct count would
///   exceed `limits.max_distinct_symbols`
///
/// No partial table is returned on error.
pub fn encode(source: &str, limits: &Limits) -> Result<EncodingTable> {
    let length = source.chars().count();
    if length > limits.max_input_len {
        return Err(EncodeError::InputTooLong {
            length,
            max: limits.max_input_len,
        }
        .into());
    }

    // Record index per ASCII value; None = not seen yet.
    let mut slot_of: [Option<usize>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
    let mut entries: Vec<(char, Vec<usize>)> = Vec::new();

    for (i, character) in source.chars().enumerate() {
        let position = i + 1;
        if !character.is_ascii() {
            return Err(EncodeError::UnsupportedCharacter {
                character,
                position,
            }
            .into());
        }

        match slot_of[character as usize] {
            Some(slot) => entries[slot].1.push(position),
            None => {
                if entries.len() >= limits.max_distinct_symbols {
                    return Err(EncodeError::TooManyDistinctCharacters {
                        count: entries.len() + 1,
                        max: limits.max_distinct_symbols,
                    }
                    .into());
                }
                slot_of[character as usize] = Some(entries.len());
                entries.push((character, vec![position]));
            }
        }
    }

    let records = entries
        .into_iter()
        .map(|(character, positions)| CharacterRecord::new(character, positions))
        .collect();

    Ok(EncodingTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn encode_default(source: &str) -> Result<EncodingTable> {
        encode(source, &Limits::default())
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = encode_default("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = encode_default("banana").unwrap();
        assert_eq!(table.character_set(), "ban");
    }

    #[test]
    fn test_positions_are_one_based_ascending() {
        let table = encode_default("banana").unwrap();
        let a = &table.records()[1];
        assert_eq!(a.character(), 'a');
        assert_eq!(a.positions(), &[2, 4, 6]);
        assert_eq!(a.count(), 3);
        assert_eq!(a.sum_of_positions(), 12);
        assert_eq!(a.product_of_positions(), Some(48));
        assert_eq!(a.max_position(), 6);
    }

    #[test]
    fn test_uniqueness_of_entries() {
        let table = encode_default("mississippi").unwrap();
        let mut seen: Vec<char> = table.records().iter().map(|r| r.character()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), table.len());
    }

    #[test]
    fn test_coverage_of_all_positions() {
        let source = "mississippi";
        let table = encode_default(source).unwrap();
        let mut claimed: Vec<usize> = table
            .records()
            .iter()
            .flat_map(|r| r.positions().iter().copied())
            .collect();
        claimed.sort_unstable();
        let expected: Vec<usize> = (1..=source.len()).collect();
        assert_eq!(claimed, expected);
    }

    #[test]
    fn test_unsupported_character_rejected_with_location() {
        let err = encode_default("abcé").unwrap_err();
        match err {
            Error::Encode(EncodeError::UnsupportedCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, 'é');
                assert_eq!(position, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_input_too_long_rejected() {
        let limits = Limits {
            max_input_len: 4,
            ..Limits::default()
        };
        let err = encode("hello", &limits).unwrap_err();
        assert!(matches!(
            err,
            Error::Encode(EncodeError::InputTooLong { length: 5, max: 4 })
        ));
    }

    #[test]
    fn test_too_many_distinct_rejected() {
        let limits = Limits {
            max_distinct_symbols: 3,
            ..Limits::default()
        };
        // Fourth distinct character trips the limit.
        let err = encode("abcd", &limits).unwrap_err();
        assert!(matches!(
            err,
            Error::Encode(EncodeError::TooManyDistinctCharacters { count: 4, max: 3 })
        ));
        // Repeats of three distinct characters do not.
        assert!(encode("abcabcabc", &limits).is_ok());
    }

    #[test]
    fn test_does_not_mutate_input() {
        let source = String::from("stable");
        let _ = encode_default(&source).unwrap();
        assert_eq!(source, "stable");
    }
}
