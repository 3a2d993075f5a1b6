//! Verification report for one encode/decode cycle.
//!
//! A thin consumer of the encoder/decoder contracts: given the original
//! text, its table, and the decoded text, it gathers the numbers a human
//! wants to see and renders them via `Display`.
//!
//! # A note on the ratio
//!
//! `entry_ratio` compares the table's entry count to the original character
//! count. That is a count-of-entries ratio, not a byte-size comparison:
//! the table itself stores position lists and is typically larger than the
//! input. It is reported as an informational metric only.

use std::fmt;

use crate::table::EncodingTable;

/// Summary of one encode → decode → verify cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    /// Length of the original text, in characters
    pub original_len: usize,
    /// Number of table entries (distinct characters)
    pub table_entries: usize,
    /// Entries divided by original length (0.0 for empty input)
    pub entry_ratio: f64,
    /// Whether decoded text equals the original exactly
    pub round_trip_ok: bool,
    /// The table's characters in first-occurrence order
    pub character_set: String,
    /// The original text
    pub original: String,
    /// The decoded text
    pub decoded: String,
}

/// Compare an original text with its table and decoded counterpart.
///
/// Never fails; a mismatch is reported through `round_trip_ok`.
pub fn verify(original: &str, table: &EncodingTable, decoded: &str) -> VerifyReport {
    let original_len = original.chars().count();
    let table_entries = table.len();
    let entry_ratio = if original_len == 0 {
        0.0
    } else {
        table_entries as f64 / original_len as f64
    };

    VerifyReport {
        original_len,
        table_entries,
        entry_ratio,
        round_trip_ok: original == decoded,
        character_set: table.character_set(),
        original: original.to_string(),
        decoded: decoded.to_string(),
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original text length: {}", self.original_len)?;
        writeln!(f, "Table entries: {}", self.table_entries)?;
        writeln!(
            f,
            "Entry ratio: {:.2}% (entries / characters, not a space saving)",
            self.entry_ratio * 100.0
        )?;
        writeln!(
            f,
            "Successful roundtrip: {}",
            if self.round_trip_ok { "Yes" } else { "No" }
        )?;
        writeln!(f)?;
        writeln!(f, "Original text: {}", self.original)?;
        writeln!(f, "Character set: {}", self.character_set)?;
        write!(f, "Decoded text: {}", self.decoded)
    }
}
