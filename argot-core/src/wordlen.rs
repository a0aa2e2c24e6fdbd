//! Word-length-class replacement
//!
//! Replaces every alphabetic word with a fixed replacement chosen by the
//! word's length. This is how single-vocabulary filters ("quack" speech
//! and friends) are expressed: short words map to one form, longer words
//! to progressively longer forms.

use crate::casing::match_case;
use crate::error::{CoreError, Result};
use crate::stage::Stage;
use regex::Regex;

/// One length band. The first band whose range contains the word length
/// wins; words matching no band pass through unchanged.
#[derive(Debug, Clone)]
pub struct LengthBand {
    /// Inclusive lower bound on word length.
    pub min_len: usize,
    /// Inclusive upper bound, unbounded when absent.
    pub max_len: Option<usize>,
    /// Replacement text, case-adapted per match.
    pub replacement: String,
}

impl LengthBand {
    fn contains(&self, len: usize) -> bool {
        len >= self.min_len && self.max_len.map_or(true, |max| len <= max)
    }
}

/// Replaces whole words by length class, preserving capitalization.
#[derive(Debug)]
pub struct WordLengthReplacer {
    bands: Vec<LengthBand>,
    word: Regex,
}

impl WordLengthReplacer {
    /// Create a replacer from ordered length bands.
    pub fn new(bands: Vec<LengthBand>) -> Result<Self> {
        for band in &bands {
            if band.replacement.is_empty() {
                return Err(CoreError::InvalidRule {
                    key: format!("length band {}..", band.min_len),
                    reason: "empty replacement".into(),
                });
            }
            if band.max_len.is_some_and(|max| max < band.min_len) {
                return Err(CoreError::InvalidRule {
                    key: format!("length band {}..", band.min_len),
                    reason: "max_len below min_len".into(),
                });
            }
        }
        Ok(Self {
            bands,
            word: Regex::new("[a-zA-Z]+")?,
        })
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// True when no bands are configured.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Stage for WordLengthReplacer {
    fn rewrite(&mut self, text: &str) -> String {
        self.word
            .replace_all(text, |caps: &regex::Captures| {
                let word = &caps[0];
                let len = word.chars().count();
                match self.bands.iter().find(|band| band.contains(len)) {
                    Some(band) => match_case(word, &band.replacement),
                    None => word.to_string(),
                }
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "word_length_replacer"
    }
}
