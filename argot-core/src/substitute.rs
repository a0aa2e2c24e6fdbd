//! Word/phrase and character substitution stages

use crate::error::Result;
use crate::matcher::{MatchMode, RuleSet};
use crate::stage::Stage;

/// Literal word and phrase replacement.
///
/// Built from a unified mapping (phrases, exclamations, words and plain
/// substitutions merged by the caller). Matching is case-insensitive and
/// longest-key-first; multi-word keys tolerate irregular whitespace.
#[derive(Debug)]
pub struct Substitution {
    rules: RuleSet,
}

impl Substitution {
    /// Compile a merged word/phrase table.
    pub fn new(
        mappings: Vec<(String, String)>,
        word_boundary: bool,
        preserve_case: bool,
    ) -> Result<Self> {
        let rules = RuleSet::compile(mappings, MatchMode::Words { word_boundary }, preserve_case)?;
        Ok(Self { rules })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table compiled to no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Stage for Substitution {
    fn rewrite(&mut self, text: &str) -> String {
        self.rules.apply(text)
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}

/// Literal character and character-pair replacement.
///
/// Same machinery as [`Substitution`] but never fenced by word
/// boundaries, which makes it suitable for accent and dialect effects
/// ("th" → "d", "w" → "v", ...).
#[derive(Debug)]
pub struct CharacterSubstitution {
    rules: RuleSet,
}

impl CharacterSubstitution {
    /// Compile a character table.
    pub fn new(mappings: Vec<(String, String)>, preserve_case: bool) -> Result<Self> {
        let rules = RuleSet::compile(mappings, MatchMode::Chars, preserve_case)?;
        Ok(Self { rules })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table compiled to no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Stage for CharacterSubstitution {
    fn rewrite(&mut self, text: &str) -> String {
        self.rules.apply(text)
    }

    fn name(&self) -> &'static str {
        "character_substitution"
    }
}
