// Suffix pattern table: per-letter morphological patterns decoded from a
// length-prefixed byte stream.

use hyphen_core::{ALPHABET_SIZE, letter_index};

use crate::TableError;
use crate::english;

/// Low six bits of a record header: pattern length in bytes (1..=63).
pub const LENGTH_MASK: u8 = 0x3F;

/// Header bit 7: a hyphen break is allowed immediately before this suffix.
pub const FLAG_BREAK_BEFORE: u8 = 0x80;

/// Header bit 6: this pattern takes priority over digram scoring.
pub const FLAG_PRIORITY: u8 = 0x40;

/// One decoded suffix record, borrowing its pattern bytes from the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixEntry<'a> {
    /// Raw pattern bytes (stored lowercase, 1..=63 bytes).
    pub pattern: &'a [u8],
    /// Whether a break is allowed immediately before the suffix.
    pub allow_break_before: bool,
    /// Whether the pattern overrides digram scoring.
    pub priority: bool,
}

/// Per-starting-letter index into a shared blob of suffix records.
///
/// The wire format is one header byte per record -- `(flags << 6) | length`
/// -- followed by the raw pattern bytes. A zero-length header terminates a
/// letter's list. The 26-entry offset index uses 0 for "no entries", so the
/// blob's first byte is never a valid record start.
///
/// Construction validates every non-zero offset against the blob length;
/// iteration bounds every decode step so that malformed data is reported as
/// truncation instead of being read past the end of the buffer.
#[derive(Debug)]
pub struct SuffixPatternTable {
    index: [u16; ALPHABET_SIZE],
    blob: Box<[u8]>,
}

impl SuffixPatternTable {
    /// Build a table from an offset index and its backing blob, validating
    /// that every non-zero offset lands inside the blob.
    pub fn new(
        index: [u16; ALPHABET_SIZE],
        blob: impl Into<Box<[u8]>>,
    ) -> Result<Self, TableError> {
        let blob = blob.into();
        for (i, &offset) in index.iter().enumerate() {
            if offset != 0 && (offset as usize) >= blob.len() {
                return Err(TableError::OffsetOutOfRange {
                    letter: (b'a' + i as u8) as char,
                    offset,
                    blob_len: blob.len(),
                });
            }
        }
        Ok(Self { index, blob })
    }

    /// The embedded default English suffix table. The embedded index is
    /// checked against the blob by this crate's tests, so construction
    /// skips revalidation.
    pub fn english() -> Self {
        Self {
            index: english::SUFFIX_INDEX,
            blob: english::SUFFIX_BLOB.into(),
        }
    }

    /// Decode the suffix records for a starting letter.
    ///
    /// A non-letter parameter is an [`TableError::InvalidLetter`] error. A
    /// letter with offset 0 yields an empty (but not erroneous) sequence.
    /// The returned iterator is re-enumerable by calling `lookup` again; a
    /// record that would overrun the blob surfaces as a
    /// [`TableError::TruncatedEntry`] item after all validly decoded
    /// entries.
    pub fn lookup(&self, letter: u8) -> Result<SuffixEntries<'_>, TableError> {
        let idx =
            letter_index(letter).ok_or(TableError::InvalidLetter(letter as char))?;
        let offset = self.index[idx] as usize;
        Ok(SuffixEntries {
            blob: &self.blob,
            pos: offset,
            finished: offset == 0,
        })
    }

    /// Visit each suffix record for a starting letter in stored order.
    ///
    /// Returns the number of records visited. Truncated trailing data is
    /// reported as an error after every valid record has been visited.
    pub fn for_each<F>(&self, letter: u8, mut visit: F) -> Result<usize, TableError>
    where
        F: FnMut(&SuffixEntry<'_>),
    {
        let mut count = 0;
        for entry in self.lookup(letter)? {
            visit(&entry?);
            count += 1;
        }
        Ok(count)
    }

    /// Raw views used by the binary asset encoder.
    pub(crate) fn raw_parts(&self) -> (&[u16; ALPHABET_SIZE], &[u8]) {
        (&self.index, &self.blob)
    }
}

/// Bounds-checked decoder over one letter's records.
///
/// Stops at a zero-length header or at the end of the blob, whichever
/// comes first. Never reads past the backing buffer.
#[derive(Debug)]
pub struct SuffixEntries<'a> {
    blob: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> Iterator for SuffixEntries<'a> {
    type Item = Result<SuffixEntry<'a>, TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.pos >= self.blob.len() {
            return None;
        }

        let header = self.blob[self.pos];
        let len = (header & LENGTH_MASK) as usize;
        if len == 0 {
            // Terminator. Flag bits on a zero-length header carry no record.
            self.finished = true;
            return None;
        }

        let start = self.pos + 1;
        let end = start + len;
        if end > self.blob.len() {
            self.finished = true;
            return Some(Err(TableError::TruncatedEntry {
                offset: self.pos,
                needed: len,
                available: self.blob.len() - start,
            }));
        }

        self.pos = end;
        Some(Ok(SuffixEntry {
            pattern: &self.blob[start..end],
            allow_break_before: header & FLAG_BREAK_BEFORE != 0,
            priority: header & FLAG_PRIORITY != 0,
        }))
    }
}
