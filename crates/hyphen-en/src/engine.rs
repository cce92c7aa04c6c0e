// Scan, score, filter, rank: the hyphenation pipeline.

use hyphen_core::{Weight, letter_index};
use hyphen_tables::{DigramWeightTables, SuffixPatternTable};

use crate::evaluator::WeightEvaluator;
use crate::exceptions::ExceptionList;

/// Default acceptance threshold: a candidate must score strictly above it.
pub const DEFAULT_THRESHOLD: Weight = 0;

/// Default minimum word length; shorter words are never hyphenated.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 5;

/// One accepted break point inside a word.
///
/// `prefix` and `suffix` partition the word at `position`, so
/// `prefix.len() + suffix.len() == word.len()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenationPoint<'w> {
    /// Break position: the hyphen goes before `word[position]`.
    pub position: usize,
    /// Score the position earned; higher means more desirable.
    pub confidence: Weight,
    /// The part of the word left of the break.
    pub prefix: &'w str,
    /// The part of the word right of the break.
    pub suffix: &'w str,
}

/// The hyphenation engine: a linear scan-score-filter-sort pipeline over
/// the weight tables.
///
/// Tables are borrowed immutably and may be shared by any number of
/// engines across threads. The engine's own configuration (`threshold`,
/// `min_word_length`, the exception list) is plain mutable state with no
/// internal synchronization.
pub struct HyphenationEngine<'t> {
    evaluator: WeightEvaluator<'t>,
    exceptions: ExceptionList,
    threshold: Weight,
    min_word_length: usize,
}

impl<'t> HyphenationEngine<'t> {
    /// Engine over the digram tables alone.
    pub fn new(tables: &'t DigramWeightTables) -> Self {
        Self::from_evaluator(WeightEvaluator::new(tables))
    }

    /// Engine that also uses the morphological suffix signal.
    pub fn with_suffixes(
        tables: &'t DigramWeightTables,
        suffixes: &'t SuffixPatternTable,
    ) -> Self {
        Self::from_evaluator(WeightEvaluator::with_suffixes(tables, suffixes))
    }

    fn from_evaluator(evaluator: WeightEvaluator<'t>) -> Self {
        Self {
            evaluator,
            exceptions: ExceptionList::new(),
            threshold: DEFAULT_THRESHOLD,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    /// Current acceptance threshold.
    pub fn threshold(&self) -> Weight {
        self.threshold
    }

    /// Set the acceptance threshold. Raising it never admits new points.
    pub fn set_threshold(&mut self, threshold: Weight) {
        self.threshold = threshold;
    }

    /// Current minimum word length.
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Set the minimum word length below which nothing is hyphenated.
    pub fn set_min_word_length(&mut self, min_word_length: usize) {
        self.min_word_length = min_word_length;
    }

    /// The explicit exception list consulted before scoring.
    pub fn exceptions(&self) -> &ExceptionList {
        &self.exceptions
    }

    /// Mutable access to the exception list.
    pub fn exceptions_mut(&mut self) -> &mut ExceptionList {
        &mut self.exceptions
    }

    /// The evaluator backing this engine.
    pub fn evaluator(&self) -> &WeightEvaluator<'t> {
        &self.evaluator
    }

    /// Propose break points for `word`, strongest first.
    ///
    /// Candidate positions run over `[2, len - 2)` so that at least two
    /// characters remain on each side; a position whose neighbors are not
    /// both letters is skipped outright. Survivors must score strictly
    /// above the threshold and are sorted by confidence descending, ties
    /// keeping scan order. Exception-list words bypass scoring: their
    /// recorded break points are returned with maximum confidence.
    ///
    /// Short words, empty input, and words with no acceptable position all
    /// yield an empty result; well-formed text never produces an error.
    pub fn hyphenate<'w>(&self, word: &'w str) -> Vec<HyphenationPoint<'w>> {
        let len = word.len();
        if len < self.min_word_length {
            return Vec::new();
        }
        let bytes = word.as_bytes();

        let mut points: Vec<HyphenationPoint<'w>> = match self.exceptions.lookup(word) {
            Some(positions) => positions
                .iter()
                .copied()
                .filter(|&pos| pos > 0 && pos < len && word.is_char_boundary(pos))
                .map(|pos| HyphenationPoint {
                    position: pos,
                    confidence: Weight::MAX,
                    prefix: &word[..pos],
                    suffix: &word[pos..],
                })
                .collect(),
            None => (2..len.saturating_sub(2))
                .filter(|&pos| Self::valid_position(bytes, pos))
                .map(|pos| HyphenationPoint {
                    position: pos,
                    confidence: self.score(bytes, pos),
                    prefix: &word[..pos],
                    suffix: &word[pos..],
                })
                .collect(),
        };

        points.retain(|p| p.confidence > self.threshold);
        // Stable sort: equal confidences keep left-to-right scan order.
        points.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        points
    }

    /// The single strongest break point, if any position was accepted.
    pub fn best_hyphenation<'w>(&self, word: &'w str) -> Option<HyphenationPoint<'w>> {
        self.hyphenate(word).into_iter().next()
    }

    /// Decide one position under an explicit threshold, using the same
    /// validity and scoring rules as [`hyphenate`](Self::hyphenate); the
    /// outcomes agree for any given threshold.
    pub fn should_hyphenate_at(&self, word: &str, position: usize, threshold: Weight) -> bool {
        if word.len() < self.min_word_length {
            return false;
        }
        if let Some(positions) = self.exceptions.lookup(word) {
            return positions.contains(&position) && Weight::MAX > threshold;
        }
        let bytes = word.as_bytes();
        if !Self::valid_position(bytes, position) {
            return false;
        }
        self.score(bytes, position) > threshold
    }

    /// Raw score for a single position, or `None` when the position is
    /// invalid. Exception entries are not consulted here; this reports
    /// what the tables say.
    pub fn position_weight(&self, word: &str, position: usize) -> Option<Weight> {
        let bytes = word.as_bytes();
        Self::valid_position(bytes, position).then(|| self.score(bytes, position))
    }

    /// A position is valid when it leaves two characters on each side and
    /// both adjacent characters map to letter indices. An existing hyphen
    /// or other punctuation next to the position disqualifies it entirely.
    fn valid_position(word: &[u8], position: usize) -> bool {
        position >= 2
            && position + 2 < word.len()
            && letter_index(word[position - 1]).is_some()
            && letter_index(word[position]).is_some()
    }

    fn score(&self, word: &[u8], position: usize) -> Weight {
        let at_beginning = position <= 2;
        let at_ending = position + 2 >= word.len();
        let has_context = word[..position].contains(&b'-');
        self.evaluator
            .score_position(word, position, at_beginning, at_ending, has_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        tables: DigramWeightTables,
        suffixes: SuffixPatternTable,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                tables: DigramWeightTables::english(),
                suffixes: SuffixPatternTable::english(),
            }
        }

        fn engine(&self) -> HyphenationEngine<'_> {
            HyphenationEngine::with_suffixes(&self.tables, &self.suffixes)
        }
    }

    fn positions(points: &[HyphenationPoint<'_>]) -> Vec<(usize, Weight)> {
        points.iter().map(|p| (p.position, p.confidence)).collect()
    }

    #[test]
    fn computer_candidates_ranked() {
        let fx = Fixture::new();
        let points = fx.engine().hyphenate("computer");
        assert_eq!(positions(&points), vec![(4, 96), (2, 64), (3, 32)]);
        assert_eq!(points[0].prefix, "comp");
        assert_eq!(points[0].suffix, "uter");
    }

    #[test]
    fn best_point_is_first() {
        let fx = Fixture::new();
        let best = fx.engine().best_hyphenation("computer").unwrap();
        assert_eq!(best.position, 4);
        assert_eq!(best.confidence, 96);
    }

    #[test]
    fn short_and_empty_words_yield_nothing() {
        let fx = Fixture::new();
        let engine = fx.engine();
        assert!(engine.hyphenate("").is_empty());
        assert!(engine.hyphenate("cat").is_empty());
        assert!(engine.hyphenate("word").is_empty());
        assert!(engine.best_hyphenation("cat").is_none());
    }

    #[test]
    fn min_word_length_four_still_rejects_cat() {
        // The scan range [2, len - 2) is empty for a three-letter word, so
        // even a permissive length gate admits nothing.
        let fx = Fixture::new();
        let mut engine = fx.engine();
        engine.set_min_word_length(4);
        assert!(engine.hyphenate("cat").is_empty());
    }

    #[test]
    fn raising_threshold_narrows_the_result() {
        let fx = Fixture::new();
        let mut engine = fx.engine();
        assert_eq!(engine.hyphenate("computer").len(), 3);
        engine.set_threshold(90);
        assert_eq!(positions(&engine.hyphenate("computer")), vec![(4, 96)]);
        engine.set_threshold(126);
        assert!(engine.hyphenate("computer").is_empty());
    }

    #[test]
    fn ties_keep_scan_order() {
        // "understanding" scores 81 at positions 2 and 9; the earlier
        // position must come first in the sorted output.
        let fx = Fixture::new();
        let points = fx.engine().hyphenate("understanding");
        let tied: Vec<usize> = points
            .iter()
            .filter(|p| p.confidence == 81)
            .map(|p| p.position)
            .collect();
        assert_eq!(tied, vec![2, 9]);
    }

    #[test]
    fn boundary_positions_always_rejected() {
        let fx = Fixture::new();
        let engine = fx.engine();
        for t in [-128, -1, 0, 64] {
            assert!(!engine.should_hyphenate_at("test", 0, t));
            assert!(!engine.should_hyphenate_at("test", 1, t));
            assert!(!engine.should_hyphenate_at("test", 2, t));
            assert!(!engine.should_hyphenate_at("test", 3, t));
            assert!(!engine.should_hyphenate_at("test", 4, t));
            assert!(!engine.should_hyphenate_at("hyphenation", 0, t));
            assert!(!engine.should_hyphenate_at("hyphenation", 11, t));
            assert!(!engine.should_hyphenate_at("hyphenation", 100, t));
        }
    }

    #[test]
    fn single_position_check_agrees_with_scan() {
        let fx = Fixture::new();
        let engine = fx.engine();
        for word in ["computer", "hyphenation", "wonderful", "multi-part"] {
            for threshold in [-40, 0, 40, 100] {
                let accepted: Vec<usize> = {
                    let mut e = fx.engine();
                    e.set_threshold(threshold);
                    e.hyphenate(word).iter().map(|p| p.position).collect()
                };
                for pos in 0..=word.len() {
                    assert_eq!(
                        engine.should_hyphenate_at(word, pos, threshold),
                        accepted.contains(&pos),
                        "{word} position {pos} threshold {threshold}"
                    );
                }
            }
        }
    }

    #[test]
    fn positions_next_to_an_existing_hyphen_are_skipped() {
        let fx = Fixture::new();
        let points = fx.engine().hyphenate("multi-part");
        // Positions 5 and 6 straddle the literal hyphen and are invalid.
        assert!(points.iter().all(|p| p.position != 5 && p.position != 6));
    }

    #[test]
    fn exception_entry_overrides_scoring() {
        let fx = Fixture::new();
        let mut engine = fx.engine();
        engine.exceptions_mut().add("ta-bles").unwrap();
        let points = engine.hyphenate("tables");
        assert_eq!(positions(&points), vec![(2, Weight::MAX)]);
        assert_eq!(points[0].prefix, "ta");
        assert_eq!(points[0].suffix, "bles");
        assert!(engine.should_hyphenate_at("tables", 2, 0));
        assert!(!engine.should_hyphenate_at("tables", 3, 0));
    }

    #[test]
    fn exception_lookup_folds_case_and_tolerates_plural() {
        let fx = Fixture::new();
        let mut engine = fx.engine();
        engine.exceptions_mut().add("pro-cess").unwrap();
        engine.exceptions_mut().add("ta-ble").unwrap();
        assert_eq!(positions(&engine.hyphenate("Process")), vec![(3, Weight::MAX)]);
        // An entry also covers its plain plural, but nothing longer.
        assert_eq!(positions(&engine.hyphenate("tables")), vec![(2, Weight::MAX)]);
        assert!(engine.hyphenate("tabless").iter().all(|p| p.confidence != Weight::MAX));
    }

    #[test]
    fn exception_words_still_respect_min_word_length() {
        let fx = Fixture::new();
        let mut engine = fx.engine();
        engine.exceptions_mut().add("ta-ble").unwrap();
        engine.set_min_word_length(10);
        assert!(engine.hyphenate("table").is_empty());
        assert!(!engine.should_hyphenate_at("table", 2, 0));
    }

    #[test]
    fn position_weight_reports_raw_scores() {
        let fx = Fixture::new();
        let engine = fx.engine();
        assert_eq!(engine.position_weight("computer", 4), Some(96));
        assert_eq!(engine.position_weight("computer", 0), None);
        assert_eq!(engine.position_weight("computer", 7), None);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let fx = Fixture::new();
        let engine = fx.engine();
        let first = engine.hyphenate("hyphenation");
        let second = engine.hyphenate("hyphenation");
        assert_eq!(first, second);
    }

    #[test]
    fn non_ascii_input_is_safe_and_sterile() {
        let fx = Fixture::new();
        let engine = fx.engine();
        // Multibyte characters are non-letters to the tables; positions
        // touching them are skipped, and no slicing panics.
        for p in engine.hyphenate("na\u{00EF}vet\u{00E9}s") {
            assert_eq!(p.prefix.len() + p.suffix.len(), "na\u{00EF}vet\u{00E9}s".len());
        }
        let _ = engine.hyphenate("\u{00E9}\u{00E9}\u{00E9}\u{00E9}\u{00E9}");
    }
}
