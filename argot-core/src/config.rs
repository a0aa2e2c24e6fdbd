//! Filter configuration schema
//!
//! A filter document is a mapping of recognized keys; the schema is
//! format-agnostic beyond that, so any self-describing serde format
//! (JSON, TOML, ...) can carry it. Unknown top-level keys are ignored
//! for forward compatibility. Rule tables deserialize into `BTreeMap`s,
//! which gives equal-length keys a stable (alphabetical) order before
//! the longest-first re-sort.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Declarative filter definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Display name, not used by the engine.
    #[serde(default)]
    pub name: Option<String>,

    /// Multi-word phrase replacements, merged first (lowest priority).
    #[serde(default)]
    pub phrases: BTreeMap<String, String>,

    /// Exclamation replacements, merged over phrases.
    #[serde(default)]
    pub exclamations: BTreeMap<String, String>,

    /// Single-word replacements, merged over exclamations.
    #[serde(default)]
    pub words: BTreeMap<String, String>,

    /// General substitutions, merged last (highest priority).
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,

    /// Character and character-pair replacements.
    #[serde(default)]
    pub characters: BTreeMap<String, String>,

    /// Suffix replacements, plain or detailed.
    #[serde(default)]
    pub suffixes: BTreeMap<String, SuffixSpec>,

    /// Prefix replacements.
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    /// Punctuation augmentation rules.
    #[serde(default)]
    pub sentence_augmentation: Vec<AugmentSpec>,

    /// Word-length replacement bands.
    #[serde(default)]
    pub word_lengths: Vec<LengthBandSpec>,

    /// Random re-capitalization parameters.
    #[serde(default)]
    pub random_case: Option<SeededSpec>,

    /// Corruption parameters.
    #[serde(default)]
    pub glitch: Option<SeededSpec>,

    /// Require word boundaries around substitution matches.
    #[serde(default = "default_true")]
    pub word_boundary: bool,

    /// Mirror the matched span's capitalization onto replacements.
    #[serde(default = "default_true")]
    pub preserve_case: bool,

    /// Literal text prepended to every output.
    #[serde(default)]
    pub prefix_text: String,

    /// Literal text appended to every output.
    #[serde(default)]
    pub suffix_text: String,
}

impl FilterConfig {
    /// Merge the word-level tables into one mapping, later tables
    /// overwriting earlier keys on collision.
    pub fn merged_substitutions(&self) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        for table in [
            &self.phrases,
            &self.exclamations,
            &self.words,
            &self.substitutions,
        ] {
            for (key, value) in table {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// A suffix rule: either a bare replacement or a replacement with an
/// explicit minimum stem length.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SuffixSpec {
    /// `"ing" = "in'"`
    Simple(String),
    /// `"ing" = { replacement = "in'", min_stem = 3 }`
    Detailed {
        /// Replacement text.
        replacement: String,
        /// Minimum stem length before the suffix.
        #[serde(default = "default_min_stem")]
        min_stem: usize,
    },
}

impl SuffixSpec {
    /// The replacement text.
    pub fn replacement(&self) -> &str {
        match self {
            SuffixSpec::Simple(replacement) => replacement,
            SuffixSpec::Detailed { replacement, .. } => replacement,
        }
    }

    /// The minimum stem length.
    pub fn min_stem(&self) -> usize {
        match self {
            SuffixSpec::Simple(_) => default_min_stem(),
            SuffixSpec::Detailed { min_stem, .. } => *min_stem,
        }
    }
}

/// One punctuation augmentation rule.
#[derive(Debug, Clone, Deserialize)]
pub struct AugmentSpec {
    /// The trigger punctuation, a single character.
    pub punctuation: String,
    /// Addition strings, cycled by occurrence.
    pub additions: Vec<String>,
    /// Augment every Nth occurrence; 1 means every occurrence.
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

/// One word-length replacement band.
#[derive(Debug, Clone, Deserialize)]
pub struct LengthBandSpec {
    /// Inclusive lower bound on word length.
    #[serde(default)]
    pub min_len: usize,
    /// Inclusive upper bound; unbounded when absent.
    #[serde(default)]
    pub max_len: Option<usize>,
    /// Replacement text.
    pub replacement: String,
}

/// Parameters for the seeded stages: either a bare percentage or a
/// percentage with an explicit seed.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum SeededSpec {
    /// `glitch = 30`
    Percentage(i64),
    /// `glitch = { percentage = 30, seed = 7 }`
    Detailed {
        /// Share of eligible characters to affect, 0..=100.
        #[serde(default)]
        percentage: Option<i64>,
        /// Generator seed.
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl SeededSpec {
    /// The configured percentage, or `default` when absent.
    pub fn percentage_or(&self, default: i64) -> i64 {
        match self {
            SeededSpec::Percentage(percentage) => *percentage,
            SeededSpec::Detailed { percentage, .. } => percentage.unwrap_or(default),
        }
    }

    /// The configured seed, or `default` when absent.
    pub fn seed_or(&self, default: u64) -> u64 {
        match self {
            SeededSpec::Percentage(_) => default,
            SeededSpec::Detailed { seed, .. } => seed.unwrap_or(default),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_stem() -> usize {
    crate::affix::DEFAULT_MIN_STEM
}

fn default_frequency() -> u32 {
    1
}
