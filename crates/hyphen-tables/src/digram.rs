// Digram weight matrices: five fixed-size tables queried by letter indices.

use hyphen_core::{ALPHABET_SIZE, NEUTRAL, Weight, letter_index};

use crate::TableError;
use crate::english;

/// Number of entries in the word-beginning table.
///
/// The beginning table covers only the first half of the alphabet; this is
/// a property of the data asset and is preserved as-is. Queries at index 13
/// or above report the neutral weight.
pub const BEGINNING_SIZE: usize = 13;

/// Number of entries in each 26x26 pair matrix.
pub const MATRIX_SIZE: usize = ALPHABET_SIZE * ALPHABET_SIZE;

/// The five digram weight matrices.
///
/// - `beginning` is indexed by the letter immediately after the break and
///   applies only when the break falls after the first character.
/// - `general`, `ending`, `context`, and `fallback` are indexed by the
///   (left, right) letter pair adjacent to the candidate break.
///
/// All lookups are total: an out-of-range index yields [`NEUTRAL`], never a
/// panic. The matrices are immutable after construction and safe to share
/// across threads without locks.
#[derive(Debug)]
pub struct DigramWeightTables {
    beginning: [Weight; BEGINNING_SIZE],
    general: Box<[Weight; MATRIX_SIZE]>,
    ending: Box<[Weight; MATRIX_SIZE]>,
    context: Box<[Weight; MATRIX_SIZE]>,
    fallback: Box<[Weight; MATRIX_SIZE]>,
}

impl DigramWeightTables {
    /// Build the tables from raw weight slices, validating that every
    /// table has exactly its documented size.
    pub fn from_parts(
        beginning: &[Weight],
        general: &[Weight],
        ending: &[Weight],
        context: &[Weight],
        fallback: &[Weight],
    ) -> Result<Self, TableError> {
        let beginning: [Weight; BEGINNING_SIZE] =
            beginning
                .try_into()
                .map_err(|_| TableError::WrongTableSize {
                    table: "beginning",
                    expected: BEGINNING_SIZE,
                    actual: beginning.len(),
                })?;

        Ok(Self {
            beginning,
            general: boxed_matrix("general", general)?,
            ending: boxed_matrix("ending", ending)?,
            context: boxed_matrix("context", context)?,
            fallback: boxed_matrix("fallback", fallback)?,
        })
    }

    /// The embedded default English tables. The compile-time array lengths
    /// in [`english`] make this constructor infallible.
    pub fn english() -> Self {
        Self {
            beginning: english::BEGINNING,
            general: Box::new(english::GENERAL),
            ending: Box::new(english::ENDING),
            context: Box::new(english::CONTEXT),
            fallback: Box::new(english::FALLBACK),
        }
    }

    /// Weight for a break between two mid-word letters.
    #[inline]
    pub fn digram_weight(&self, left: usize, right: usize) -> Weight {
        pair_lookup(&self.general[..], left, right)
    }

    /// Convenience accessor taking raw characters instead of indices.
    /// Non-letter input yields the neutral weight.
    #[inline]
    pub fn digram_weight_chars(&self, first: u8, second: u8) -> Weight {
        match (letter_index(first), letter_index(second)) {
            (Some(left), Some(right)) => self.digram_weight(left, right),
            _ => NEUTRAL,
        }
    }

    /// Weight for a break after the first character, indexed by the letter
    /// following the break. Valid for indices below [`BEGINNING_SIZE`].
    #[inline]
    pub fn beginning_weight(&self, idx: usize) -> Weight {
        self.beginning.get(idx).copied().unwrap_or(NEUTRAL)
    }

    /// Weight contribution near the end of the word.
    #[inline]
    pub fn ending_weight(&self, left: usize, right: usize) -> Weight {
        pair_lookup(&self.ending[..], left, right)
    }

    /// Weight contribution when an explicit hyphen already appeared
    /// earlier in the word.
    #[inline]
    pub fn context_weight(&self, left: usize, right: usize) -> Weight {
        pair_lookup(&self.context[..], left, right)
    }

    /// Weight consulted only when every other signal nets to exactly zero.
    #[inline]
    pub fn fallback_weight(&self, left: usize, right: usize) -> Weight {
        pair_lookup(&self.fallback[..], left, right)
    }

    /// Raw table views in asset order, used by the binary encoder.
    pub(crate) fn raw_parts(&self) -> [&[Weight]; 5] {
        [
            &self.beginning,
            &self.general[..],
            &self.ending[..],
            &self.context[..],
            &self.fallback[..],
        ]
    }
}

/// Look up a (left, right) pair in a 26x26 matrix, absorbing out-of-range
/// indices as neutral weight.
#[inline]
fn pair_lookup(matrix: &[Weight], left: usize, right: usize) -> Weight {
    if left >= ALPHABET_SIZE || right >= ALPHABET_SIZE {
        return NEUTRAL;
    }
    matrix[left * ALPHABET_SIZE + right]
}

fn boxed_matrix(
    table: &'static str,
    weights: &[Weight],
) -> Result<Box<[Weight; MATRIX_SIZE]>, TableError> {
    if weights.len() != MATRIX_SIZE {
        return Err(TableError::WrongTableSize {
            table,
            expected: MATRIX_SIZE,
            actual: weights.len(),
        });
    }
    let mut boxed = Box::new([NEUTRAL; MATRIX_SIZE]);
    boxed.copy_from_slice(weights);
    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyphen_core::letter_index;

    fn letter(c: u8) -> usize {
        letter_index(c).unwrap()
    }

    #[test]
    fn english_tables_construct() {
        let tables = DigramWeightTables::english();
        // Spot values from the embedded asset.
        assert_eq!(tables.digram_weight(letter(b'a'), letter(b'b')), 34);
        assert_eq!(tables.digram_weight(letter(b'm'), letter(b'p')), 32);
        assert_eq!(tables.beginning_weight(0), 48);
    }

    #[test]
    fn out_of_range_pair_is_neutral() {
        let tables = DigramWeightTables::english();
        assert_eq!(tables.digram_weight(26, 0), 0);
        assert_eq!(tables.digram_weight(0, 26), 0);
        assert_eq!(tables.digram_weight(usize::MAX, usize::MAX), 0);
        assert_eq!(tables.ending_weight(30, 2), 0);
        assert_eq!(tables.context_weight(2, 30), 0);
        assert_eq!(tables.fallback_weight(99, 99), 0);
    }

    #[test]
    fn beginning_weight_bounded_at_13() {
        let tables = DigramWeightTables::english();
        // Indices 13..26 are valid letters but outside the beginning table.
        for idx in BEGINNING_SIZE..ALPHABET_SIZE {
            assert_eq!(tables.beginning_weight(idx), 0);
        }
        assert_eq!(tables.beginning_weight(usize::MAX), 0);
    }

    #[test]
    fn wrong_beginning_size_rejected() {
        let general = [0 as Weight; MATRIX_SIZE];
        let err = DigramWeightTables::from_parts(
            &[0; 12],
            &general,
            &general,
            &general,
            &general,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::WrongTableSize {
                table: "beginning",
                expected: 13,
                actual: 12,
            }
        ));
    }

    #[test]
    fn wrong_matrix_size_rejected() {
        let general = [0 as Weight; MATRIX_SIZE];
        let short = [0 as Weight; MATRIX_SIZE - 1];
        let err =
            DigramWeightTables::from_parts(&[0; 13], &general, &short, &general, &general)
                .unwrap_err();
        assert!(matches!(
            err,
            TableError::WrongTableSize {
                table: "ending",
                ..
            }
        ));
    }

    #[test]
    fn char_accessor_folds_case_and_absorbs_non_letters() {
        let tables = DigramWeightTables::english();
        assert_eq!(tables.digram_weight_chars(b'a', b'b'), 34);
        assert_eq!(tables.digram_weight_chars(b'A', b'B'), 34);
        assert_eq!(tables.digram_weight_chars(b'-', b'b'), 0);
        assert_eq!(tables.digram_weight_chars(b'a', b'!'), 0);
        assert_eq!(tables.digram_weight_chars(b'1', b'2'), 0);
    }

    #[test]
    fn negative_weights_survive() {
        // The general matrix stores discouraging entries as negative values.
        let tables = DigramWeightTables::english();
        assert_eq!(tables.digram_weight(letter(b't'), letter(b'e')), -112);
    }
}
