//! alepo-core
//!
//! Dictionary store and segmentation engine shared by the alepo frontends.
//!
//! Input text is translated letter-group by letter-group: each word is cut
//! into the longest romanized units the active dictionary recognizes, and
//! each unit is mapped to its translation. Unmatched characters and units
//! with no recorded translation are ordinary outcomes, not errors, so a
//! translation pass never fails on well-formed input.
//!
//! Public API:
//! - `Language` - closed set of supported vocabularies
//! - `UnitDictionary` / `LexemeDictionary` / `LexemeEntry` - per-language mappings
//! - `segment`, `Segment`, `Outcome` - greedy longest-match engine
//! - `translate_phrase`, `WordTranslation` - whole-phrase entry point
//! - `DictionarySet` / `DictionaryStore` - immutable snapshot and replaceable handle
//! - `Config` - feed locations and startup options
//! - `DataSourceError` - dictionary feed failures

use serde::{Deserialize, Serialize};

pub mod config;
pub use config::{Config, FeedPaths};

pub mod dictionary;
pub use dictionary::{LexemeDictionary, LexemeEntry, UnitDictionary};

pub mod error;
pub use error::DataSourceError;

pub mod feed;

pub mod segment;
pub use segment::{segment, Outcome, Segment};

pub mod store;
pub use store::{DictionarySet, DictionaryStore};

/// Target vocabulary.
///
/// The variants name the two shipped vocabulary pairs; nothing in the
/// engine branches on them. Frontends own the mapping from language to
/// display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// The other language of the pair.
    pub fn toggle(self) -> Self {
        match self {
            Language::French => Language::English,
            Language::English => Language::French,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::French
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::French => "FR",
            Language::English => "EN",
        })
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "french" => Ok(Language::French),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language '{}', expected 'fr' or 'en'", other)),
        }
    }
}

/// One translated word of an input phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTranslation {
    /// The word exactly as segmented (trimmed, uppercased).
    pub word: String,
    /// Ordered per-unit results; concatenating the units restores `word`.
    pub segments: Vec<Segment>,
}

/// Translate a whole phrase against the given dictionary set.
///
/// The phrase is trimmed, uppercased and split on whitespace; each word is
/// then segmented independently. A blank phrase yields no entries —
/// frontends are expected to reject blank input before getting here.
pub fn translate_phrase(phrase: &str, set: &DictionarySet) -> Vec<WordTranslation> {
    let normalized = phrase.trim().to_uppercase();
    normalized
        .split_whitespace()
        .map(|word| WordTranslation {
            word: word.to_string(),
            segments: segment(word, set.units()),
        })
        .collect()
}
