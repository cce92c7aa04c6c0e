// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// hyphen-ffi: C-compatible facade over the hyphenation engine.
//
// This crate exposes the classic C entry points over a stable ABI so that
// existing callers keep working against the single canonical engine.
//
// Memory management rules:
// - Opaque `HyphenEngine` pointer: created by `hyphen_new` /
//   `hyphen_new_from_asset`, freed by `hyphen_free`.
// - Word parameters are raw byte pointers with explicit lengths; they are
//   never retained past the call.
// - The suffix visitor callback borrows its pattern bytes only for the
//   duration of the call.

use std::ffi::{c_int, c_void};
use std::ptr;
use std::slice;

use hyphen_core::Weight;
use hyphen_en::{HyphenationEngine, WeightEvaluator};
use hyphen_tables::format;
use hyphen_tables::{DigramWeightTables, SuffixPatternTable, TableError};

/// Opaque engine handle.
///
/// Owns the tables and the configuration; lightweight engine views are
/// created on the fly in each call, so the handle has no self-referential
/// borrows.
pub struct HyphenEngine {
    digrams: DigramWeightTables,
    suffixes: SuffixPatternTable,
    threshold: Weight,
    min_word_length: usize,
}

impl HyphenEngine {
    fn view(&self) -> HyphenationEngine<'_> {
        let mut engine = HyphenationEngine::with_suffixes(&self.digrams, &self.suffixes);
        engine.set_threshold(self.threshold);
        engine.set_min_word_length(self.min_word_length);
        engine
    }
}

/// Visitor type for `suffix_lookup`: receives the raw pattern bytes, the
/// pattern length, the two flag values, and the caller's context pointer.
pub type SuffixVisitor = unsafe extern "C" fn(
    pattern: *const u8,
    length: usize,
    allow_break_before: c_int,
    priority: c_int,
    user_data: *mut c_void,
);

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create an engine over the embedded English data asset.
/// Free with `hyphen_free`.
#[unsafe(no_mangle)]
pub extern "C" fn hyphen_new() -> *mut HyphenEngine {
    Box::into_raw(Box::new(HyphenEngine {
        digrams: DigramWeightTables::english(),
        suffixes: SuffixPatternTable::english(),
        threshold: hyphen_en::DEFAULT_THRESHOLD,
        min_word_length: hyphen_en::DEFAULT_MIN_WORD_LENGTH,
    }))
}

/// Create an engine from an external data asset in the flat binary layout.
///
/// Returns NULL if `data` is NULL or the asset fails validation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hyphen_new_from_asset(
    data: *const u8,
    len: usize,
) -> *mut HyphenEngine {
    if data.is_null() {
        return ptr::null_mut();
    }
    let bytes = unsafe { slice::from_raw_parts(data, len) };
    match format::parse_asset(bytes) {
        Ok((digrams, suffixes)) => Box::into_raw(Box::new(HyphenEngine {
            digrams,
            suffixes,
            threshold: hyphen_en::DEFAULT_THRESHOLD,
            min_word_length: hyphen_en::DEFAULT_MIN_WORD_LENGTH,
        })),
        Err(_) => ptr::null_mut(),
    }
}

/// Free an engine created by `hyphen_new` / `hyphen_new_from_asset`.
/// NULL is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hyphen_free(engine: *mut HyphenEngine) {
    if !engine.is_null() {
        drop(unsafe { Box::from_raw(engine) });
    }
}

/// Set the acceptance threshold used by `should_hyphenate_at` callers that
/// pass the engine's configured threshold.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hyphen_set_threshold(engine: *mut HyphenEngine, threshold: i8) {
    if let Some(engine) = unsafe { engine.as_mut() } {
        engine.threshold = threshold;
    }
}

/// Set the minimum word length below which nothing is hyphenated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hyphen_set_min_word_length(
    engine: *mut HyphenEngine,
    min_word_length: usize,
) {
    if let Some(engine) = unsafe { engine.as_mut() } {
        engine.min_word_length = min_word_length;
    }
}

// ── Classic entry points ─────────────────────────────────────────

/// Combined digram-table weight for a break before `word[position]`.
///
/// This is the bare table evaluation: the suffix signal is not applied.
/// Returns 0 for NULL input, out-of-range positions, and non-letter
/// neighbors.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn calculate_hyphen_weight(
    engine: *const HyphenEngine,
    word: *const u8,
    word_len: usize,
    position: usize,
    at_beginning: c_int,
    at_ending: c_int,
    has_context: c_int,
) -> i8 {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return 0;
    };
    if word.is_null() {
        return 0;
    }
    let word = unsafe { slice::from_raw_parts(word, word_len) };
    WeightEvaluator::new(&engine.digrams).evaluate_position(
        word,
        position,
        at_beginning != 0,
        at_ending != 0,
        has_context != 0,
    )
}

/// Decide whether to hyphenate at `position` under `threshold`, using the
/// full engine rules (validity window, suffix signal, exception list).
/// Returns 1 to hyphenate, 0 otherwise.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn should_hyphenate_at(
    engine: *const HyphenEngine,
    word: *const u8,
    word_len: usize,
    position: usize,
    threshold: i8,
) -> c_int {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return 0;
    };
    if word.is_null() {
        return 0;
    }
    let bytes = unsafe { slice::from_raw_parts(word, word_len) };
    let Ok(word) = std::str::from_utf8(bytes) else {
        return 0;
    };
    engine.view().should_hyphenate_at(word, position, threshold) as c_int
}

/// Weight for a two-character sequence from the general digram matrix.
/// Non-letter characters yield 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn digram_weight(
    engine: *const HyphenEngine,
    first: u8,
    second: u8,
) -> i8 {
    match unsafe { engine.as_ref() } {
        Some(engine) => engine.digrams.digram_weight_chars(first, second),
        None => 0,
    }
}

/// Visit each suffix record for a starting letter in stored order.
///
/// Returns the number of records visited, `-1` for a non-letter parameter,
/// and `-2` when the stored data is truncated (records decoded before the
/// truncation are still visited).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn suffix_lookup(
    engine: *const HyphenEngine,
    letter: u8,
    visitor: Option<SuffixVisitor>,
    user_data: *mut c_void,
) -> c_int {
    let Some(engine) = (unsafe { engine.as_ref() }) else {
        return -1;
    };

    let result = engine.suffixes.for_each(letter, |entry| {
        if let Some(visit) = visitor {
            unsafe {
                visit(
                    entry.pattern.as_ptr(),
                    entry.pattern.len(),
                    entry.allow_break_before as c_int,
                    entry.priority as c_int,
                    user_data,
                );
            }
        }
    });

    match result {
        Ok(count) => count as c_int,
        Err(TableError::InvalidLetter(_)) => -1,
        Err(_) => -2,
    }
}
