//! Denylist filtering for generated identifiers.
//!
//! A generated id is rejected when it *contains* any denylisted substring
//! (case-insensitive), not only on exact match: random alphabets are good at
//! embedding unfortunate words in longer strings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The denylist shipped with the crate, loaded when no explicit list is
/// configured. One entry per line, lowercase.
const DEFAULT_DENYLIST: &str = include_str!("denylist.txt");

/// An ordered list of disallowed substrings.
///
/// Entries are normalized to lowercase; empty entries are kept but ignored at
/// match time. The list is loaded once at startup and read-only afterwards.
///
/// An *empty* denylist ([`Denylist::empty`]) means "no filtering" and is
/// distinct from an *absent* one: components that take
/// `Option<Denylist>` fall back to [`Denylist::default`] (the embedded list)
/// only on `None`.
#[derive(Debug, Clone)]
pub struct Denylist {
    entries: Vec<String>,
}

impl Denylist {
    /// Builds a denylist from the given entries, lowercasing each one.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.into().to_lowercase())
                .collect(),
        }
    }

    /// A denylist that allows everything.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Loads a denylist from a file, one entry per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read denylist from {}", path.display()))?;

        Ok(Self::new(contents.lines()))
    }

    /// Returns false if `candidate` (lowercased) contains any non-empty
    /// denylist entry as a substring, true otherwise.
    pub fn is_allowed(&self, candidate: &str) -> bool {
        let normalized = candidate.to_lowercase();

        for entry in &self.entries {
            if entry.is_empty() {
                continue;
            }

            if normalized.contains(entry.as_str()) {
                tracing::debug!(candidate = %normalized, entry = %entry, "denylist rejected candidate");
                return false;
            }
        }

        true
    }

    /// Number of entries, counting ignored empty ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Denylist {
    /// The embedded default list.
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_allows_everything() {
        let denylist = Denylist::empty();
        assert!(denylist.is_allowed("anything"));
        assert!(denylist.is_allowed(""));
    }

    #[test]
    fn test_substring_match_rejects() {
        let denylist = Denylist::new(["bad"]);
        assert!(!denylist.is_allowed("bad"));
        assert!(!denylist.is_allowed("xxbadxx"));
        assert!(denylist.is_allowed("bda"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let denylist = Denylist::new(["bad"]);
        assert!(!denylist.is_allowed("BAD"));
        assert!(!denylist.is_allowed("xBaDx"));
    }

    #[test]
    fn test_entries_are_lowercased_at_construction() {
        let denylist = Denylist::new(["BAD"]);
        assert!(!denylist.is_allowed("bad"));
    }

    #[test]
    fn test_empty_entries_are_ignored() {
        let denylist = Denylist::new(["", "bad", ""]);
        assert!(denylist.is_allowed("anything"));
        assert!(!denylist.is_allowed("bad"));
    }

    #[test]
    fn test_default_list_is_not_empty() {
        let denylist = Denylist::default();
        assert!(!denylist.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("shortlink-denylist-test.txt");
        fs::write(&path, "one\nTWO\n\nthree\n").unwrap();

        let denylist = Denylist::load(&path).unwrap();
        assert!(!denylist.is_allowed("xONEx"));
        assert!(!denylist.is_allowed("two"));
        assert!(!denylist.is_allowed("three"));
        assert!(denylist.is_allowed("four"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Denylist::load("/nonexistent/denylist.txt").is_err());
    }
}
