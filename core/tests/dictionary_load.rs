// Dictionary feed loading and store lifecycle tests.
//
// Feeds are written to a temp directory per case; the assertions cover the
// loader's normalization contract (trim, last-write-wins, BOM, delimiter
// sniffing), its failure taxonomy, and the store's snapshot-replace
// discipline around language switches.

use std::path::PathBuf;

use alepo_core::feed::{read_lexeme_feed, read_unit_feed};
use alepo_core::{
    Config, DataSourceError, DictionarySet, DictionaryStore, FeedPaths, Language,
    LexemeDictionary, UnitDictionary,
};
use tempfile::TempDir;

fn write_feed(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn unit_feed_rows_are_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.csv", "letter,translation\n ch , sh \na,ah\nt,\n");

    let dict = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    assert_eq!(dict.len(), 3);
    assert_eq!(dict.lookup("CH"), Some("sh"));
    assert_eq!(dict.lookup("A"), Some("ah"));
    assert_eq!(dict.lookup("T"), Some(""));
}

#[test]
fn duplicate_keys_keep_the_last_row() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.csv", "letter,translation\na,first\nA,second\n");

    let dict = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.lookup("A"), Some("second"));
}

#[test]
fn semicolon_delimiter_and_bom_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(
        &dir,
        "units.csv",
        "\u{feff}letter;translation\nch;sh\nou;u\n",
    );

    let dict = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    assert_eq!(dict.lookup("CH"), Some("sh"));
    assert_eq!(dict.lookup("OU"), Some("u"));
}

#[test]
fn extra_columns_and_column_order_are_irrelevant() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(
        &dir,
        "units.csv",
        "Translation,comment,Letter\nsh,a note,ch\n",
    );

    let dict = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    assert_eq!(dict.lookup("CH"), Some("sh"));
}

#[test]
fn short_row_fails_with_its_line_number() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.csv", "letter,translation\na,ah\n\nb\n");

    match read_unit_feed(&path) {
        Err(DataSourceError::Malformed { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.csv", "letter,value\na,ah\n");

    match read_unit_feed(&path) {
        Err(DataSourceError::MissingColumn { column, .. }) => {
            assert_eq!(column, "translation");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_file_carries_the_feed_path() {
    let path = PathBuf::from("no/such/feed.csv");
    match read_unit_feed(&path) {
        Err(err @ DataSourceError::Io { .. }) => assert_eq!(err.path(), path.as_path()),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn blank_feed_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.csv", "\n\n");

    assert!(matches!(
        read_unit_feed(&path),
        Err(DataSourceError::Malformed { line: 0, .. })
    ));
}

#[test]
fn lexeme_feed_loads_both_translations() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(
        &dir,
        "lexemes.csv",
        "word,literal,idiomatic\nbonjour, good day , hello \n",
    );

    let dict = LexemeDictionary::from_rows(read_lexeme_feed(&path).unwrap());
    let entry = dict.lookup("BONJOUR").unwrap();
    assert_eq!(entry.literal, "good day");
    assert_eq!(entry.idiomatic, "hello");
}

#[test]
fn json_feeds_load_like_delimited_ones() {
    let dir = TempDir::new().unwrap();
    let units = write_feed(&dir, "units.json", r#"{"ch": "sh", "t": ""}"#);
    let lexemes = write_feed(
        &dir,
        "lexemes.json",
        r#"{"bonjour": {"literal": "good day", "idiomatic": "hello"}}"#,
    );

    let unit_dict = UnitDictionary::from_rows(read_unit_feed(&units).unwrap());
    assert_eq!(unit_dict.lookup("CH"), Some("sh"));
    assert_eq!(unit_dict.lookup("T"), Some(""));

    let lexeme_dict = LexemeDictionary::from_rows(read_lexeme_feed(&lexemes).unwrap());
    assert_eq!(lexeme_dict.lookup("BONJOUR").unwrap().idiomatic, "hello");
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(&dir, "units.json", "{ not json ");

    assert!(matches!(
        read_unit_feed(&path),
        Err(DataSourceError::Json { .. })
    ));
}

#[test]
fn loading_the_same_feed_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_feed(
        &dir,
        "units.csv",
        "letter,translation\nch,sh\na,ah\nA,ahh\nt,\n",
    );

    let first = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    let second = UnitDictionary::from_rows(read_unit_feed(&path).unwrap());
    assert_eq!(first, second);
    assert_eq!(first.sorted_entries(), second.sorted_entries());
}

fn two_language_config(dir: &TempDir) -> Config {
    let fr_units = write_feed(dir, "units_fr.csv", "letter,translation\nch,sh\na,ah\n");
    let fr_lexemes = write_feed(
        dir,
        "lexemes_fr.csv",
        "word,literal,idiomatic\nchat,cat,cat\n",
    );
    let en_units = write_feed(dir, "units_en.csv", "letter,translation\nth,dh\ne,eh\n");
    let en_lexemes = write_feed(
        dir,
        "lexemes_en.csv",
        "word,literal,idiomatic\nthe,le,le\n",
    );
    Config {
        french: FeedPaths {
            units: fr_units,
            lexemes: fr_lexemes,
        },
        english: FeedPaths {
            units: en_units,
            lexemes: en_lexemes,
        },
        startup_language: Language::French,
    }
}

#[test]
fn dictionary_set_loads_both_feeds() {
    let dir = TempDir::new().unwrap();
    let config = two_language_config(&dir);

    let set = DictionarySet::load(&config, Language::French).unwrap();
    assert_eq!(set.language(), Language::French);
    assert_eq!(set.units().lookup("CH"), Some("sh"));
    assert!(set.lexemes().lookup("CHAT").is_some());
}

#[test]
fn language_switch_swaps_the_whole_set() {
    let dir = TempDir::new().unwrap();
    let config = two_language_config(&dir);

    let store = DictionaryStore::open(&config, Language::French).unwrap();
    let held = store.snapshot();

    let switched = store.switch_language(&config).unwrap();
    assert_eq!(switched, Language::English);
    assert_eq!(store.language(), Language::English);
    assert_eq!(store.snapshot().units().lookup("TH"), Some("dh"));

    // A snapshot taken before the switch keeps observing the old set.
    assert_eq!(held.language(), Language::French);
    assert_eq!(held.units().lookup("CH"), Some("sh"));
}

#[test]
fn failed_switch_leaves_the_active_set_untouched() {
    let dir = TempDir::new().unwrap();
    let mut config = two_language_config(&dir);
    config.english.units = PathBuf::from("no/such/units.csv");

    let store = DictionaryStore::open(&config, Language::French).unwrap();
    assert!(store.switch_language(&config).is_err());

    assert_eq!(store.language(), Language::French);
    assert_eq!(store.snapshot().units().lookup("CH"), Some("sh"));
}
