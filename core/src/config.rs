//! Runtime configuration shared by the frontends.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Language;

/// Feed locations for one language's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedPaths {
    /// Unit feed (letter/translation rows).
    pub units: PathBuf,
    /// Lexeme feed (word/literal/idiomatic rows).
    pub lexemes: PathBuf,
}

/// Top-level configuration.
///
/// Every field has a default, so a missing or partial file still yields a
/// working configuration pointing at the bundled `data/` feeds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// French vocabulary feeds.
    #[serde(default = "default_french_feeds")]
    pub french: FeedPaths,

    /// English vocabulary feeds.
    #[serde(default = "default_english_feeds")]
    pub english: FeedPaths,

    /// Language active at startup.
    #[serde(default)]
    pub startup_language: Language,
}

fn default_french_feeds() -> FeedPaths {
    FeedPaths {
        units: PathBuf::from("data/units_fr.csv"),
        lexemes: PathBuf::from("data/lexemes_fr.csv"),
    }
}

fn default_english_feeds() -> FeedPaths {
    FeedPaths {
        units: PathBuf::from("data/units_en.csv"),
        lexemes: PathBuf::from("data/lexemes_en.csv"),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            french: default_french_feeds(),
            english: default_english_feeds(),
            startup_language: Language::default(),
        }
    }
}

impl Config {
    /// Feed locations for the given language.
    pub fn feeds_for(&self, language: Language) -> &FeedPaths {
        match language {
            Language::French => &self.french,
            Language::English => &self.english,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_feeds() {
        let config = Config::default();
        assert_eq!(config.french.units, PathBuf::from("data/units_fr.csv"));
        assert_eq!(config.english.lexemes, PathBuf::from("data/lexemes_en.csv"));
        assert_eq!(config.startup_language, Language::French);
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config {
            startup_language: Language::English,
            ..Config::default()
        };
        let text = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed = Config::from_toml_str("startup_language = \"en\"\n").unwrap();
        assert_eq!(parsed.startup_language, Language::English);
        assert_eq!(parsed.french, Config::default().french);
    }

    #[test]
    fn feeds_for_selects_per_language() {
        let config = Config::default();
        assert_eq!(
            config.feeds_for(Language::English).units,
            PathBuf::from("data/units_en.csv")
        );
        assert_eq!(
            config.feeds_for(Language::French).units,
            PathBuf::from("data/units_fr.csv")
        );
    }
}
