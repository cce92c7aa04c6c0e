//! Read-only data layer of the hyphen engine.
//!
//! This crate loads and validates the statistical data the engine scores
//! with, and exposes total (never-failing) lookups over it:
//!
//! - [`digram`] -- the five digram weight matrices and their accessors
//! - [`suffix`] -- the morphological suffix pattern table and its
//!   bounds-checked decoder
//! - [`format`] -- the flat binary asset layout (encode + parse)
//! - [`english`] -- the embedded default English data asset
//!
//! All tables are constructed once, validated at construction, and never
//! mutated afterwards; they can be shared freely across threads.

pub mod digram;
pub mod english;
pub mod format;
pub mod suffix;

pub use digram::DigramWeightTables;
pub use suffix::{SuffixEntry, SuffixPatternTable};

/// Error type for table construction, validation, and suffix decoding.
///
/// Per-character lookups on the hot path never produce these: weight
/// queries on out-of-domain input yield the neutral weight instead. Errors
/// are reserved for structurally invalid data and invalid parameters.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A weight matrix was constructed with the wrong number of entries.
    #[error("{table} table has {actual} entries, expected {expected}")]
    WrongTableSize {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A binary asset is shorter than its fixed-size sections require.
    #[error("data asset too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// A suffix index entry points past the end of the pattern blob.
    #[error("suffix offset {offset} for '{letter}' is outside the {blob_len}-byte blob")]
    OffsetOutOfRange {
        letter: char,
        offset: u16,
        blob_len: usize,
    },

    /// A suffix lookup was attempted with a non-letter parameter.
    ///
    /// Distinct from a letter that simply has no entries, which is a
    /// normal empty result.
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// A suffix record's header promises more pattern bytes than remain
    /// in the blob. Entries decoded before this point are still valid.
    #[error("truncated suffix record at offset {offset}: needs {needed} bytes, {available} remain")]
    TruncatedEntry {
        offset: usize,
        needed: usize,
        available: usize,
    },
}
