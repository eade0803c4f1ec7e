//! Active dictionary state.
//!
//! A [`DictionarySet`] is an immutable snapshot of one language's loaded
//! vocabulary. The [`DictionaryStore`] publishes the active set behind a
//! shared handle with a snapshot-replace discipline: readers clone out an
//! `Arc` and keep using it for the whole translation pass, while a language
//! switch builds the replacement set completely before swapping it in.
//! Published sets are never mutated in place.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::config::Config;
use crate::dictionary::{LexemeDictionary, UnitDictionary};
use crate::error::DataSourceError;
use crate::feed;
use crate::Language;

/// Immutable snapshot of one language's vocabulary.
#[derive(Debug, Clone)]
pub struct DictionarySet {
    language: Language,
    units: UnitDictionary,
    lexemes: LexemeDictionary,
}

impl DictionarySet {
    /// Materialize both feeds for `language` per the configuration.
    ///
    /// Fails with the first feed error; nothing is substituted for a feed
    /// that would not load.
    pub fn load(config: &Config, language: Language) -> Result<Self, DataSourceError> {
        let feeds = config.feeds_for(language);
        let units = UnitDictionary::from_rows(feed::read_unit_feed(&feeds.units)?);
        let lexemes = LexemeDictionary::from_rows(feed::read_lexeme_feed(&feeds.lexemes)?);
        info!(
            language = %language,
            units = units.len(),
            lexemes = lexemes.len(),
            "dictionary set loaded"
        );
        Ok(Self {
            language,
            units,
            lexemes,
        })
    }

    /// Assemble a set from already-built dictionaries.
    pub fn from_parts(
        language: Language,
        units: UnitDictionary,
        lexemes: LexemeDictionary,
    ) -> Self {
        Self {
            language,
            units,
            lexemes,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn units(&self) -> &UnitDictionary {
        &self.units
    }

    pub fn lexemes(&self) -> &LexemeDictionary {
        &self.lexemes
    }
}

/// Shared handle to the active [`DictionarySet`].
#[derive(Debug)]
pub struct DictionaryStore {
    active: RwLock<Arc<DictionarySet>>,
}

impl DictionaryStore {
    /// Wrap an already-loaded set.
    pub fn new(set: DictionarySet) -> Self {
        Self {
            active: RwLock::new(Arc::new(set)),
        }
    }

    /// Load `language` per the configuration and open a store on it.
    pub fn open(config: &Config, language: Language) -> Result<Self, DataSourceError> {
        Ok(Self::new(DictionarySet::load(config, language)?))
    }

    /// Cheap handle to the currently active set. The snapshot stays valid
    /// for as long as the caller holds it, even across language switches.
    pub fn snapshot(&self) -> Arc<DictionarySet> {
        Arc::clone(
            &self
                .active
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Language of the currently active set.
    pub fn language(&self) -> Language {
        self.snapshot().language()
    }

    /// Publish `set` as the active set, wholesale.
    pub fn replace(&self, set: DictionarySet) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *active = Arc::new(set);
    }

    /// Load the other language of the pair and swap it in.
    ///
    /// The replacement is built completely before the swap; on a feed
    /// error the active set is left untouched and the error is returned
    /// for the frontend to report.
    pub fn switch_language(&self, config: &Config) -> Result<Language, DataSourceError> {
        let next = self.language().toggle();
        let set = DictionarySet::load(config, next)?;
        self.replace(set);
        info!(language = %next, "language switched");
        Ok(next)
    }
}
