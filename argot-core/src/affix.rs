//! Suffix and prefix replacement stages
//!
//! Affix injection deliberately skips case adaptation: the stem keeps its
//! case as found and the configured affix text is spliced in verbatim.
//! Only whole-word/phrase/character substitution preserves case.

use crate::error::{CoreError, Result};
use crate::stage::Stage;
use regex::{Captures, Regex};

/// Default minimum stem length for suffix rules.
pub const DEFAULT_MIN_STEM: usize = 2;

#[derive(Debug)]
struct AffixRule {
    regex: Regex,
    replacement: String,
}

/// Replaces word endings ("ing" → "in'", "ly" → "wise").
///
/// A suffix only matches when preceded by a stem of at least `min_stem`
/// alphabetic characters, so short words are left alone.
#[derive(Debug, Default)]
pub struct SuffixReplacer {
    rules: Vec<AffixRule>,
}

impl SuffixReplacer {
    /// Create an empty replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suffix rule.
    pub fn add_rule(&mut self, suffix: &str, replacement: &str, min_stem: usize) -> Result<()> {
        if suffix.is_empty() {
            return Err(CoreError::InvalidRule {
                key: suffix.to_string(),
                reason: "empty suffix".into(),
            });
        }
        let pattern = format!(
            r"(?i)([a-zA-Z]{{{min_stem},}}){}\b",
            regex::escape(suffix)
        );
        self.rules.push(AffixRule {
            regex: Regex::new(&pattern)?,
            replacement: replacement.to_string(),
        });
        Ok(())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules were added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Stage for SuffixReplacer {
    fn rewrite(&mut self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule
                .regex
                .replace_all(&current, |caps: &Captures| {
                    format!("{}{}", &caps[1], rule.replacement)
                })
                .into_owned();
        }
        current
    }

    fn name(&self) -> &'static str {
        "suffix_replacer"
    }
}

/// Replaces word beginnings ("un" → "not").
#[derive(Debug, Default)]
pub struct PrefixReplacer {
    rules: Vec<AffixRule>,
}

impl PrefixReplacer {
    /// Create an empty replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix rule.
    pub fn add_rule(&mut self, prefix: &str, replacement: &str) -> Result<()> {
        if prefix.is_empty() {
            return Err(CoreError::InvalidRule {
                key: prefix.to_string(),
                reason: "empty prefix".into(),
            });
        }
        let pattern = format!(r"(?i)\b{}([a-zA-Z]+)", regex::escape(prefix));
        self.rules.push(AffixRule {
            regex: Regex::new(&pattern)?,
            replacement: replacement.to_string(),
        });
        Ok(())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules were added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Stage for PrefixReplacer {
    fn rewrite(&mut self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule
                .regex
                .replace_all(&current, |caps: &Captures| {
                    format!("{}{}", rule.replacement, &caps[1])
                })
                .into_owned();
        }
        current
    }

    fn name(&self) -> &'static str {
        "prefix_replacer"
    }
}
