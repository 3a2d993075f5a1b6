//! Reconstructing text from an [`EncodingTable`].
//!
//! Decoding never fails: the table may come from anywhere, not just the
//! encoder, so the decoder makes no coverage assumptions. Slots no record
//! claims keep the filler character, and when two records claim the same
//! slot the record iterated later wins (last-write-wins by table order),
//! a deliberate choice rather than undefined behaviour.

use crate::table::EncodingTable;

/// Character written into output slots no record claims.
pub const FILLER: char = ' ';

/// Decode a table back into text.
///
/// The output length is the largest position any record claims (0 for an
/// empty table). Each record writes its character at every position in its
/// list; everything else stays [`FILLER`].
///
/// For a table produced by [`encode`](crate::encoder::encode) this returns
/// the original source exactly, since every position is claimed by exactly
/// one record.
pub fn decode(table: &EncodingTable) -> String {
    let length = table.max_position();
    let mut output = vec![FILLER; length];

    for record in table {
        for &position in record.positions() {
            // Positions are 1-based and <= max_position by construction.
            output[position - 1] = record.character();
        }
    }

    output.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CharacterRecord, EncodingTable};

    #[test]
    fn test_empty_table_decodes_to_empty_string() {
        assert_eq!(decode(&EncodingTable::default()), "");
    }

    #[test]
    fn test_gap_slots_keep_filler() {
        let table = EncodingTable::new(vec![CharacterRecord::new('A', vec![3])]);
        assert_eq!(decode(&table), "  A");
    }

    #[test]
    fn test_sparse_table() {
        let table = EncodingTable::new(vec![
            CharacterRecord::new('a', vec![1, 5]),
            CharacterRecord::new('b', vec![3]),
        ]);
        assert_eq!(decode(&table), "a b a");
    }

    #[test]
    fn test_overlap_last_record_wins() {
        let table = EncodingTable::new(vec![
            CharacterRecord::new('x', vec![1, 2]),
            CharacterRecord::new('y', vec![2]),
        ]);
        assert_eq!(decode(&table), "xy");
    }
}
