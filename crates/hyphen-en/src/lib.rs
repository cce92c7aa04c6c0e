//! Statistical English hyphenation engine.
//!
//! Given a word, the engine proposes candidate break points ranked by a
//! signed confidence score. Scoring combines the digram weight matrices
//! with a morphological suffix signal; a configurable threshold and a
//! position-validity policy decide which candidates survive.
//!
//! - [`evaluator`] -- per-position scoring over the weight tables
//! - [`engine`] -- scan, filter, rank, threshold; the public entry point
//! - [`exceptions`] -- explicit per-word break lists that override scoring
//!
//! The engine is a pure synchronous function of (word, tables,
//! configuration): no locks, no suspension, every call bounded by word
//! length. Tables are shared immutably; engine configuration is plain
//! mutable state, so share one engine per thread or guard it externally.

pub mod engine;
pub mod evaluator;
pub mod exceptions;

pub use engine::{
    DEFAULT_MIN_WORD_LENGTH, DEFAULT_THRESHOLD, HyphenationEngine, HyphenationPoint,
};
pub use evaluator::WeightEvaluator;
pub use exceptions::{ExceptionError, ExceptionList};
