//! The positional index produced by encoding.
//!
//! An [`EncodingTable`] holds one [`CharacterRecord`] per distinct character
//! of the source text, in first-occurrence order. Each record lists every
//! 1-based position where its character occurs, plus derived statistics
//! (count, sum, product, maximum) computed from that list.
//!
//! # Lifecycle
//!
//! A table is built once by the encoder, read by the decoder and the
//! verification report, and dropped. It is never mutated after construction
//! and has no persistent form.

/// Sum of all values in a position list.
pub fn sum_positions(positions: &[usize]) -> u64 {
    positions.iter().map(|&p| p as u64).sum()
}

/// Product of all values in a position list.
///
/// Returns `None` on overflow of `u128`. The product grows factorially with
/// occurrence count, so overflow is a real possibility for long inputs and
/// is reported explicitly rather than wrapped.
pub fn multiply_positions(positions: &[usize]) -> Option<u128> {
    positions
        .iter()
        .try_fold(1u128, |acc, &p| acc.checked_mul(p as u128))
}

/// Maximum value in a position list (0 if empty).
pub fn max_position(positions: &[usize]) -> usize {
    positions.iter().copied().max().unwrap_or(0)
}

/// Per-character entry of an [`EncodingTable`].
///
/// # Invariants
/// - `positions` is strictly increasing and 1-based
/// - derived statistics always match `positions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The character this record indexes
    character: char,
    /// 1-based occurrence positions, ascending
    positions: Vec<usize>,
    /// Sum of all positions
    sum_of_positions: u64,
    /// Product of all positions; `None` means the product overflowed u128
    product_of_positions: Option<u128>,
    /// Largest position (0 only for an empty position list)
    max_position: usize,
}

impl CharacterRecord {
    /// Create a record for `character` occurring at `positions`.
    ///
    /// Positions are sorted, deduplicated, and stripped of the invalid
    /// value 0, so the strictly-increasing 1-based invariant holds by
    /// construction even for hand-built tables. Derived statistics are
    /// computed from the cleaned list.
    pub fn new(character: char, mut positions: Vec<usize>) -> Self {
        positions.retain(|&p| p > 0);
        positions.sort_unstable();
        positions.dedup();

        let sum_of_positions = sum_positions(&positions);
        let product_of_positions = multiply_positions(&positions);
        let max = max_position(&positions);

        Self {
            character,
            positions,
            sum_of_positions,
            product_of_positions,
            max_position: max,
        }
    }

    /// The character this record indexes.
    pub fn character(&self) -> char {
        self.character
    }

    /// The 1-based occurrence positions, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of occurrences.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Sum of all positions.
    pub fn sum_of_positions(&self) -> u64 {
        self.sum_of_positions
    }

    /// Product of all positions, or `None` if it overflowed u128.
    pub fn product_of_positions(&self) -> Option<u128> {
        self.product_of_positions
    }

    /// Largest position claimed by this record.
    pub fn max_position(&self) -> usize {
        self.max_position
    }
}

/// Positional index of one source text.
///
/// Records appear in the order their characters first occur in the source,
/// one record per distinct character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingTable {
    records: Vec<CharacterRecord>,
}

impl EncodingTable {
    /// Build a table from records.
    ///
    /// Record order is preserved; the encoder supplies them in
    /// first-occurrence order.
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    /// All records, in first-occurrence order.
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Number of entries (distinct characters).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest position claimed by any record (0 for an empty table).
    ///
    /// For a table built by the encoder this equals the source length.
    pub fn max_position(&self) -> usize {
        self.records
            .iter()
            .map(CharacterRecord::max_position)
            .max()
            .unwrap_or(0)
    }

    /// The distinct characters concatenated in table order.
    ///
    /// This is the "compressed text" of the reference program: one symbol
    /// per entry, first-occurrence order.
    pub fn character_set(&self) -> String {
        self.records.iter().map(CharacterRecord::character).collect()
    }
}

impl<'a> IntoIterator for &'a EncodingTable {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derived_statistics() {
        let record = CharacterRecord::new('W', vec![1, 20]);
        assert_eq!(record.count(), 2);
        assert_eq!(record.sum_of_positions(), 21);
        assert_eq!(record.product_of_positions(), Some(20));
        assert_eq!(record.max_position(), 20);
    }

    #[test]
    fn test_record_cleans_positions() {
        // Unordered, duplicated, and zero positions are normalised.
        let record = CharacterRecord::new('x', vec![5, 0, 2, 5, 9]);
        assert_eq!(record.positions(), &[2, 5, 9]);
        assert_eq!(record.count(), 3);
        assert_eq!(record.max_position(), 9);
    }

    #[test]
    fn test_product_overflow_is_none() {
        // 64 positions of 2^32 overflow u128 (2^2048 total).
        let positions: Vec<usize> = (0..64).map(|i| (1usize << 32) + i).collect();
        let record = CharacterRecord::new('x', positions);
        assert_eq!(record.product_of_positions(), None);
        assert!(record.sum_of_positions() > 0);
    }

    #[test]
    fn test_empty_record_statistics() {
        let record = CharacterRecord::new('x', vec![]);
        assert_eq!(record.count(), 0);
        assert_eq!(record.sum_of_positions(), 0);
        assert_eq!(record.product_of_positions(), Some(1));
        assert_eq!(record.max_position(), 0);
    }

    #[test]
    fn test_table_accessors() {
        let table = EncodingTable::new(vec![
            CharacterRecord::new('a', vec![1, 3]),
            CharacterRecord::new('b', vec![2]),
        ]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.max_position(), 3);
        assert_eq!(table.character_set(), "ab");
    }

    #[test]
    fn test_empty_table() {
        let table = EncodingTable::default();
        assert!(table.is_empty());
        assert_eq!(table.max_position(), 0);
        assert_eq!(table.character_set(), "");
    }
}
