//! Dictionary feed reading.
//!
//! Two on-disk shapes are accepted, selected by file extension:
//!
//! - A delimited table (any extension but `.json`): the first non-blank
//!   line is a header naming the columns; the delimiter is sniffed from
//!   that line (`;` if present, `,` otherwise). Extra columns are ignored,
//!   field values are trimmed, and a UTF-8 BOM on the first line is
//!   stripped. Quoting is not interpreted — values must not contain the
//!   delimiter.
//! - A JSON map (`.json`): unit feeds as a string-to-string object, lexeme
//!   feeds as a string-to-`{literal, idiomatic}` object.
//!
//! Readers return raw rows; normalization beyond field trimming (key
//! uppercasing, last-write-wins) happens at dictionary construction.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::dictionary::LexemeEntry;
use crate::error::DataSourceError;

/// Header column holding the romanized unit key.
pub const UNIT_KEY_COLUMN: &str = "letter";
/// Header column holding the unit translation (may be empty).
pub const UNIT_VALUE_COLUMN: &str = "translation";
/// Header column holding the romanized word key.
pub const LEXEME_KEY_COLUMN: &str = "word";
/// Header column holding the word-for-word translation.
pub const LEXEME_LITERAL_COLUMN: &str = "literal";
/// Header column holding the idiomatic translation.
pub const LEXEME_IDIOMATIC_COLUMN: &str = "idiomatic";

/// Read a unit feed into `(key, translation)` rows.
pub fn read_unit_feed(path: &Path) -> Result<Vec<(String, String)>, DataSourceError> {
    if is_json(path) {
        let map: BTreeMap<String, String> = read_json(path)?;
        return Ok(map.into_iter().collect());
    }
    let rows = read_delimited(path, [UNIT_KEY_COLUMN, UNIT_VALUE_COLUMN])?;
    Ok(rows.into_iter().map(|[key, value]| (key, value)).collect())
}

/// Read a lexeme feed into `(key, entry)` rows.
pub fn read_lexeme_feed(path: &Path) -> Result<Vec<(String, LexemeEntry)>, DataSourceError> {
    if is_json(path) {
        let map: BTreeMap<String, LexemeEntry> = read_json(path)?;
        return Ok(map.into_iter().collect());
    }
    let rows = read_delimited(
        path,
        [LEXEME_KEY_COLUMN, LEXEME_LITERAL_COLUMN, LEXEME_IDIOMATIC_COLUMN],
    )?;
    Ok(rows
        .into_iter()
        .map(|[key, literal, idiomatic]| (key, LexemeEntry { literal, idiomatic }))
        .collect())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataSourceError> {
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataSourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the named `columns` out of a delimited feed, in order, one array
/// per data row. Blank lines are skipped; a row shorter than the rightmost
/// required column is a hard error — a damaged feed must never load as a
/// partial dictionary.
fn read_delimited<const N: usize>(
    path: &Path,
    columns: [&str; N],
) -> Result<Vec<[String; N]>, DataSourceError> {
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut indices: Option<[usize; N]> = None;
    let mut min_fields = 0;
    let mut delimiter = ',';
    let mut rows = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DataSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // Feeds written by spreadsheet exports often start with a BOM.
        let line = if number == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };
        if line.trim().is_empty() {
            continue;
        }

        match indices {
            None => {
                delimiter = if line.contains(';') { ';' } else { ',' };
                let names: Vec<&str> = line.split(delimiter).map(str::trim).collect();
                let mut found = [0usize; N];
                for (slot, column) in columns.iter().copied().enumerate() {
                    match names.iter().position(|name| name.eq_ignore_ascii_case(column)) {
                        Some(idx) => found[slot] = idx,
                        None => {
                            return Err(DataSourceError::MissingColumn {
                                path: path.to_path_buf(),
                                column: column.to_string(),
                            })
                        }
                    }
                }
                min_fields = found.iter().copied().max().map_or(0, |max| max + 1);
                indices = Some(found);
            }
            Some(found) => {
                let fields: Vec<&str> = line.split(delimiter).collect();
                if fields.len() < min_fields {
                    return Err(DataSourceError::Malformed {
                        path: path.to_path_buf(),
                        line: number + 1,
                        reason: format!(
                            "expected at least {} fields, found {}",
                            min_fields,
                            fields.len()
                        ),
                    });
                }
                rows.push(found.map(|idx| fields[idx].trim().to_string()));
            }
        }
    }

    if indices.is_none() {
        return Err(DataSourceError::Malformed {
            path: path.to_path_buf(),
            line: 0,
            reason: "empty feed (no header line)".to_string(),
        });
    }

    debug!(path = %path.display(), rows = rows.len(), "feed read");
    Ok(rows)
}
