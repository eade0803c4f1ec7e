//! Unit and lexeme dictionaries.
//!
//! Both are plain uppercase-keyed maps, built once per language from feed
//! rows and replaced wholesale on language switch — entries are never
//! mutated in place after a set is published.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Translation pair attached to a whole recognized word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeEntry {
    /// Word-for-word rendering.
    pub literal: String,
    /// Idiomatic rendering.
    pub idiomatic: String,
}

/// Romanized unit -> translation text.
///
/// An empty translation is a real entry ("known unit, nothing recorded for
/// it") and observably distinct from an absent key.
///
/// # Example
/// ```
/// use alepo_core::UnitDictionary;
///
/// let dict = UnitDictionary::from_rows([("ch", "sh"), ("t", "")]);
/// assert_eq!(dict.lookup("CH"), Some("sh"));
/// assert_eq!(dict.lookup("T"), Some(""));
/// assert_eq!(dict.lookup("Z"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitDictionary {
    map: AHashMap<String, String>,
    max_unit_len: usize,
}

impl UnitDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw feed rows.
    ///
    /// Keys are trimmed and uppercased, values trimmed; rows with an empty
    /// key are skipped; when the same key appears twice the later row wins.
    pub fn from_rows<I, K, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dict = Self::new();
        for (key, value) in rows {
            dict.insert(key.as_ref(), value.as_ref());
        }
        dict
    }

    /// Insert one mapping, normalizing the way `from_rows` does.
    pub fn insert(&mut self, key: &str, value: &str) {
        let key = key.trim().to_uppercase();
        if key.is_empty() {
            return;
        }
        self.max_unit_len = self.max_unit_len.max(key.chars().count());
        self.map.insert(key, value.trim().to_string());
    }

    /// Exact-match lookup. Callers pre-normalize to uppercase.
    pub fn lookup(&self, unit: &str) -> Option<&str> {
        self.map.get(unit).map(String::as_str)
    }

    /// Whether the exact unit is present, translation or not.
    pub fn contains(&self, unit: &str) -> bool {
        self.map.contains_key(unit)
    }

    /// Longest key present, in characters. Zero for an empty dictionary.
    ///
    /// The segmentation window is derived from this value, so feeds that
    /// introduce longer units widen the scan without code changes.
    pub fn max_unit_len(&self) -> usize {
        self.max_unit_len
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries sorted by key, for listing views.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by_key(|&(k, _)| k);
        entries
    }
}

/// Whole recognized word -> literal/idiomatic translation pair.
///
/// Used for the reference dictionary view only; the segmentation engine
/// never consults it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexemeDictionary {
    map: AHashMap<String, LexemeEntry>,
}

impl LexemeDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw feed rows, with the same trimming,
    /// empty-key and last-write-wins rules as [`UnitDictionary::from_rows`].
    pub fn from_rows<I, K>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, LexemeEntry)>,
        K: AsRef<str>,
    {
        let mut dict = Self::new();
        for (key, entry) in rows {
            dict.insert(key.as_ref(), entry);
        }
        dict
    }

    /// Insert one mapping, normalizing the way `from_rows` does.
    pub fn insert(&mut self, key: &str, entry: LexemeEntry) {
        let key = key.trim().to_uppercase();
        if key.is_empty() {
            return;
        }
        let entry = LexemeEntry {
            literal: entry.literal.trim().to_string(),
            idiomatic: entry.idiomatic.trim().to_string(),
        };
        self.map.insert(key, entry);
    }

    /// Exact-match lookup. Callers pre-normalize to uppercase.
    pub fn lookup(&self, word: &str) -> Option<&LexemeEntry> {
        self.map.get(word)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries sorted by key, for listing views.
    pub fn sorted_entries(&self) -> Vec<(&str, &LexemeEntry)> {
        let mut entries: Vec<(&str, &LexemeEntry)> =
            self.map.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by_key(|&(k, _)| k);
        entries
    }
}
