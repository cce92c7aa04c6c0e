// Per-position scoring: digram table combination plus the suffix signal.

use hyphen_core::{NEUTRAL, Weight, is_vowel, letter_index, narrow, to_lower};
use hyphen_tables::{DigramWeightTables, SuffixPatternTable};

/// Adjustment for a break directly before a known suffix.
const SUFFIX_BREAK_BONUS: i32 = 32;

/// Adjustment for a break before a priority suffix; strong enough to carry
/// a position on its own.
const SUFFIX_PRIORITY_BONUS: i32 = 96;

/// Adjustment when the matched suffix forbids a break before itself.
const SUFFIX_FORBIDDEN_PENALTY: i32 = -64;

/// Combines the digram weight tables, and optionally the suffix pattern
/// table, into a single score for a candidate break position.
///
/// All scoring is fail-soft: a position with non-letter neighbors scores
/// neutral, it never errors. Accumulation happens in `i32` and the result
/// saturates to the [`Weight`] range.
pub struct WeightEvaluator<'t> {
    tables: &'t DigramWeightTables,
    suffixes: Option<&'t SuffixPatternTable>,
}

impl<'t> WeightEvaluator<'t> {
    /// Evaluator over the digram tables alone.
    pub fn new(tables: &'t DigramWeightTables) -> Self {
        Self {
            tables,
            suffixes: None,
        }
    }

    /// Evaluator that also consults the suffix pattern table.
    pub fn with_suffixes(
        tables: &'t DigramWeightTables,
        suffixes: &'t SuffixPatternTable,
    ) -> Self {
        Self {
            tables,
            suffixes: Some(suffixes),
        }
    }

    /// Score a candidate break between `word[position - 1]` and
    /// `word[position]` from the digram tables.
    ///
    /// Positions outside `(0, word.len())` and positions whose neighbors
    /// are not letters score [`NEUTRAL`]. The beginning table contributes
    /// only when the break falls after the very first character; the
    /// fallback table is consulted only when every other signal nets to
    /// exactly zero.
    pub fn evaluate_position(
        &self,
        word: &[u8],
        position: usize,
        at_beginning: bool,
        at_ending: bool,
        has_context: bool,
    ) -> Weight {
        if position == 0 || position >= word.len() {
            return NEUTRAL;
        }
        let (Some(left), Some(right)) = (
            letter_index(word[position - 1]),
            letter_index(word[position]),
        ) else {
            return NEUTRAL;
        };

        let mut total = self.tables.digram_weight(left, right) as i32;
        if at_beginning && position == 1 {
            total += self.tables.beginning_weight(right) as i32;
        }
        if at_ending {
            total += self.tables.ending_weight(left, right) as i32;
        }
        if has_context {
            total += self.tables.context_weight(left, right) as i32;
        }
        if total == 0 {
            total = self.tables.fallback_weight(left, right) as i32;
        }
        narrow(total)
    }

    /// Full score for a candidate position: the digram evaluation plus the
    /// suffix adjustment, saturated to the [`Weight`] range.
    pub fn score_position(
        &self,
        word: &[u8],
        position: usize,
        at_beginning: bool,
        at_ending: bool,
        has_context: bool,
    ) -> Weight {
        let base =
            self.evaluate_position(word, position, at_beginning, at_ending, has_context);
        narrow(base as i32 + self.suffix_adjustment(word, position))
    }

    /// Suffix signal for a candidate position.
    ///
    /// Fires when the tail of the word starting at `position` exactly
    /// matches a stored pattern for its starting letter: a bonus when the
    /// pattern allows a break before itself (larger for priority patterns),
    /// a penalty when it forbids one. The bonus additionally requires a
    /// vowel somewhere before the break, so that a suffix is never split
    /// off a vowelless stem. Decode problems in the table are absorbed as
    /// "no signal"; this path never errors.
    fn suffix_adjustment(&self, word: &[u8], position: usize) -> i32 {
        let Some(suffixes) = self.suffixes else {
            return 0;
        };
        let tail = &word[position.min(word.len())..];
        let Some(&first) = tail.first() else {
            return 0;
        };
        let Ok(entries) = suffixes.lookup(first) else {
            return 0;
        };

        for entry in entries.flatten() {
            let matches = entry.pattern.len() == tail.len()
                && entry
                    .pattern
                    .iter()
                    .zip(tail)
                    .all(|(&p, &w)| p == to_lower(w));
            if !matches {
                continue;
            }
            if !entry.allow_break_before {
                return SUFFIX_FORBIDDEN_PENALTY;
            }
            if !word[..position].iter().any(|&c| is_vowel(c)) {
                return 0;
            }
            return if entry.priority {
                SUFFIX_PRIORITY_BONUS
            } else {
                SUFFIX_BREAK_BONUS
            };
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> DigramWeightTables {
        DigramWeightTables::english()
    }

    #[test]
    fn out_of_range_positions_are_neutral() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        assert_eq!(eval.evaluate_position(b"word", 0, false, false, false), 0);
        assert_eq!(eval.evaluate_position(b"word", 4, false, false, false), 0);
        assert_eq!(eval.evaluate_position(b"word", 100, false, false, false), 0);
        assert_eq!(eval.evaluate_position(b"", 1, false, false, false), 0);
    }

    #[test]
    fn non_letter_neighbors_are_neutral() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        assert_eq!(eval.evaluate_position(b"a-b", 1, false, false, false), 0);
        assert_eq!(eval.evaluate_position(b"a-b", 2, false, false, false), 0);
        assert_eq!(eval.evaluate_position(b"a1b", 2, true, true, true), 0);
    }

    #[test]
    fn plain_digram_weight() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // "er" pair in the general matrix.
        assert_eq!(eval.evaluate_position(b"er", 1, false, false, false), 32);
    }

    #[test]
    fn case_is_folded_before_lookup() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        assert_eq!(
            eval.evaluate_position(b"ER", 1, false, false, false),
            eval.evaluate_position(b"er", 1, false, false, false),
        );
    }

    #[test]
    fn ending_and_context_are_additive() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // "er": general 32, ending 16, context 16.
        assert_eq!(eval.evaluate_position(b"er", 1, false, true, false), 48);
        assert_eq!(eval.evaluate_position(b"er", 1, false, false, true), 48);
        assert_eq!(eval.evaluate_position(b"er", 1, false, true, true), 64);
    }

    #[test]
    fn beginning_applies_only_at_position_one() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // "xa": general 97, beginning['a'] 48 -- saturates at 127.
        assert_eq!(eval.evaluate_position(b"xa", 1, true, false, false), 127);
        assert_eq!(eval.evaluate_position(b"xa", 1, false, false, false), 97);
        // Same pair at position 2: the beginning table is not consulted
        // even with the flag set.
        assert_eq!(eval.evaluate_position(b"axa", 2, true, false, false), 97);
    }

    #[test]
    fn beginning_indices_past_table_end_contribute_nothing() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // 'r' (index 17) is outside the 13-entry beginning table.
        assert_eq!(
            eval.evaluate_position(b"er", 1, true, false, false),
            eval.evaluate_position(b"er", 1, false, false, false),
        );
    }

    #[test]
    fn fallback_consulted_only_on_exact_zero() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // "aw": general 0, fallback 17 -- fallback substitutes.
        assert_eq!(eval.evaluate_position(b"aw", 1, false, false, false), 17);
        // With context the total is -1, nonzero, so fallback stays out.
        assert_eq!(eval.evaluate_position(b"aw", 1, false, false, true), -1);
    }

    #[test]
    fn accumulation_saturates() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        // "nd": general 81 + context 71 = 152, beyond the i8 range.
        assert_eq!(eval.evaluate_position(b"nd", 1, false, false, true), 127);
    }

    #[test]
    fn priority_suffix_carries_position() {
        let tables = tables();
        let suffixes = SuffixPatternTable::english();
        let eval = WeightEvaluator::with_suffixes(&tables, &suffixes);
        // "wonderful" at 6: tail "ful" is a priority suffix; the base
        // digram score of 33 plus the priority bonus saturates.
        assert_eq!(eval.score_position(b"wonderful", 6, false, false, false), 127);
    }

    #[test]
    fn ordinary_suffix_adds_fixed_bonus() {
        let tables = tables();
        let suffixes = SuffixPatternTable::english();
        let eval = WeightEvaluator::with_suffixes(&tables, &suffixes);
        let base = eval.evaluate_position(b"famous", 3, false, false, false);
        let scored = eval.score_position(b"famous", 3, false, false, false);
        assert_eq!(scored as i32, base as i32 + 32);
    }

    #[test]
    fn forbidden_suffix_penalizes() {
        let tables = tables();
        let suffixes = SuffixPatternTable::english();
        let eval = WeightEvaluator::with_suffixes(&tables, &suffixes);
        // "wanted" at 4: tail "ed" forbids a break before itself.
        // Base score for the "te" pair is -112; the penalty saturates.
        assert_eq!(eval.score_position(b"wanted", 4, false, false, false), -128);
    }

    #[test]
    fn suffix_bonus_requires_a_vowel_in_the_stem() {
        let tables = tables();
        let suffixes = SuffixPatternTable::english();
        let eval = WeightEvaluator::with_suffixes(&tables, &suffixes);
        // "bcdful" has no vowel before position 3, so the "ful" bonus is
        // suppressed and the score equals the bare evaluation.
        assert_eq!(
            eval.score_position(b"bcdful", 3, false, false, false),
            eval.evaluate_position(b"bcdful", 3, false, false, false),
        );
    }

    #[test]
    fn without_suffix_table_score_equals_evaluation() {
        let tables = tables();
        let eval = WeightEvaluator::new(&tables);
        for pos in 1..8 {
            assert_eq!(
                eval.score_position(b"wonderful", pos, false, false, false),
                eval.evaluate_position(b"wonderful", pos, false, false, false),
            );
        }
    }

    #[test]
    fn partial_tail_match_is_not_a_suffix() {
        let tables = tables();
        let suffixes = SuffixPatternTable::english();
        let eval = WeightEvaluator::with_suffixes(&tables, &suffixes);
        // Tail "fully" starts like "ful" but is longer; no signal fires.
        assert_eq!(
            eval.score_position(b"carefully", 4, false, false, false),
            eval.evaluate_position(b"carefully", 4, false, false, false),
        );
    }
}
