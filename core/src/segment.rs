//! Greedy longest-match segmentation.
//!
//! A word is scanned left to right with a cursor. At each position the
//! engine probes dictionary keys by decreasing window length, longest
//! first; the first hit wins and the cursor advances by the hit length.
//! There is no backtracking: once a span is consumed it is never revisited
//! to try a different split. A position where no window matches consumes
//! exactly one character, flagged `UnitNotFound`.
//!
//! The window cap is the longest key actually present in the dictionary,
//! not a constant, so multi-character units always take priority over a
//! coincidental run of single-character matches.

use crate::dictionary::UnitDictionary;

/// What a consumed span resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Unit found with a non-empty translation.
    Translated(String),
    /// Unit found, but its translation field is empty.
    NoTranslationAvailable,
    /// No unit of any window length matched at this position.
    UnitNotFound,
}

/// One consumed span of the input word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The matched text, exactly as it appears in the word.
    pub unit: String,
    pub outcome: Outcome,
}

impl Segment {
    pub fn new<T: Into<String>>(unit: T, outcome: Outcome) -> Self {
        Self {
            unit: unit.into(),
            outcome,
        }
    }
}

/// Segment `word` against `dict`, longest match first.
///
/// Pure function of its inputs: no state survives between calls, and the
/// result is safe to compute concurrently over a shared dictionary. An
/// empty word yields an empty sequence. Concatenating the returned units
/// in order reproduces `word` exactly — total coverage, no overlap.
///
/// Callers pass the word already uppercased; `translate_phrase` does this
/// for whole phrases.
///
/// # Example
/// ```
/// use alepo_core::{segment, Outcome, UnitDictionary};
///
/// let dict = UnitDictionary::from_rows([("ch", "sh"), ("a", "ah")]);
/// let segments = segment("CHA", &dict);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].unit, "CH");
/// assert_eq!(segments[1].outcome, Outcome::Translated("ah".to_string()));
/// ```
pub fn segment(word: &str, dict: &UnitDictionary) -> Vec<Segment> {
    let chars: Vec<char> = word.chars().collect();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let window = dict.max_unit_len().min(chars.len() - i);
        let mut matched = None;

        for j in (1..=window).rev() {
            let candidate: String = chars[i..i + j].iter().collect();
            if let Some(translation) = dict.lookup(&candidate) {
                let outcome = if translation.is_empty() {
                    Outcome::NoTranslationAvailable
                } else {
                    Outcome::Translated(translation.to_string())
                };
                matched = Some((Segment::new(candidate, outcome), j));
                break;
            }
        }

        match matched {
            Some((segment, consumed)) => {
                segments.push(segment);
                i += consumed;
            }
            None => {
                segments.push(Segment::new(chars[i].to_string(), Outcome::UnitNotFound));
                i += 1;
            }
        }
    }

    segments
}
