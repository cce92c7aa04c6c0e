// Exception word list: explicit break points that override scoring.

use hashbrown::HashMap;

/// Error type for malformed exception entries.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExceptionError {
    /// The entry contained no letters at all.
    #[error("exception entry is empty")]
    Empty,

    /// A hyphen marker sat at the start or end of the entry, where it
    /// cannot denote a break between two characters.
    #[error("hyphen marker at the edge of exception entry {0:?}")]
    EdgeHyphen(String),
}

/// Words with hand-specified hyphenation, entered as marked strings like
/// `"ta-ble"`. When a word is found here the engine returns the recorded
/// break points directly instead of scoring.
///
/// Lookups fold ASCII case, and an entry also covers its plain plural
/// (the word plus a single trailing `s`).
#[derive(Debug, Default)]
pub struct ExceptionList {
    words: HashMap<String, Vec<usize>>,
}

impl ExceptionList {
    /// An empty exception list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marked entry: hyphens denote break points and are not part
    /// of the stored word. Re-adding a word replaces its break list.
    pub fn add(&mut self, marked: &str) -> Result<(), ExceptionError> {
        let mut key = String::with_capacity(marked.len());
        let mut positions: Vec<usize> = Vec::new();

        for ch in marked.chars() {
            if ch == '-' {
                if key.is_empty() {
                    return Err(ExceptionError::EdgeHyphen(marked.to_string()));
                }
                if positions.last() != Some(&key.len()) {
                    positions.push(key.len());
                }
            } else {
                key.push(ch.to_ascii_lowercase());
            }
        }

        if key.is_empty() {
            return Err(ExceptionError::Empty);
        }
        if positions.last() == Some(&key.len()) {
            return Err(ExceptionError::EdgeHyphen(marked.to_string()));
        }

        self.words.insert(key, positions);
        Ok(())
    }

    /// Break positions recorded for `word`, if present.
    pub fn lookup(&self, word: &str) -> Option<&[usize]> {
        let folded = word.to_ascii_lowercase();
        if let Some(positions) = self.words.get(&folded) {
            return Some(positions);
        }
        // The classic exception lists treat "tables" as covered by the
        // "ta-ble" entry: one trailing 's' is tolerated.
        let stem = folded.strip_suffix('s')?;
        self.words.get(stem).map(Vec::as_slice)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut list = ExceptionList::new();
        list.add("ta-ble").unwrap();
        assert_eq!(list.lookup("table"), Some(&[2usize][..]));
        assert_eq!(list.lookup("TABLE"), Some(&[2usize][..]));
        assert_eq!(list.lookup("chair"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn multiple_breaks() {
        let mut list = ExceptionList::new();
        list.add("hy-phen-ate").unwrap();
        assert_eq!(list.lookup("hyphenate"), Some(&[2usize, 6][..]));
    }

    #[test]
    fn plural_falls_back_to_stem() {
        let mut list = ExceptionList::new();
        list.add("ta-ble").unwrap();
        assert_eq!(list.lookup("tables"), Some(&[2usize][..]));
        // Only a single trailing 's' is tolerated.
        assert_eq!(list.lookup("tabless"), None);
    }

    #[test]
    fn explicit_plural_entry_wins_over_stem() {
        let mut list = ExceptionList::new();
        list.add("ta-ble").unwrap();
        list.add("tab-les").unwrap();
        assert_eq!(list.lookup("tables"), Some(&[3usize][..]));
    }

    #[test]
    fn entry_case_is_folded() {
        let mut list = ExceptionList::new();
        list.add("Ta-Ble").unwrap();
        assert_eq!(list.lookup("table"), Some(&[2usize][..]));
    }

    #[test]
    fn re_adding_replaces() {
        let mut list = ExceptionList::new();
        list.add("ta-ble").unwrap();
        list.add("tab-le").unwrap();
        assert_eq!(list.lookup("table"), Some(&[3usize][..]));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn doubled_hyphen_collapses() {
        let mut list = ExceptionList::new();
        list.add("ta--ble").unwrap();
        assert_eq!(list.lookup("table"), Some(&[2usize][..]));
    }

    #[test]
    fn malformed_entries_rejected() {
        let mut list = ExceptionList::new();
        assert_eq!(list.add(""), Err(ExceptionError::Empty));
        assert_eq!(list.add("-"), Err(ExceptionError::EdgeHyphen("-".into())));
        assert!(matches!(list.add("-table"), Err(ExceptionError::EdgeHyphen(_))));
        assert!(matches!(list.add("table-"), Err(ExceptionError::EdgeHyphen(_))));
        assert!(list.is_empty());
    }
}
