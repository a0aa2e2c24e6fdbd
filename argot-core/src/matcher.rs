//! Compiled literal rule matching
//!
//! Both substitution stages share this machinery: a rule table is sorted
//! longest-key-first, each key is compiled into a case-insensitive regex,
//! and all rules are resolved against the stage input in a single pass
//! with claim-based overlap resolution.

use crate::casing::match_case;
use crate::error::{CoreError, Result};
use regex::Regex;

/// One compiled literal rule.
#[derive(Debug)]
struct LiteralRule {
    regex: Regex,
    replacement: String,
}

/// How keys are turned into patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Word-level matching: multi-word keys match with flexible
    /// whitespace, and matches may be fenced by word boundaries.
    Words {
        /// Reject matches adjacent to another word character
        word_boundary: bool,
    },
    /// Character-level matching: keys are matched verbatim anywhere.
    Chars,
}

/// An ordered, compiled set of literal rules.
///
/// Rules are held in descending key length so that phrases are tested
/// before the single words they contain and longer character sequences
/// before shorter ones. Ties keep the insertion order of the (sorted)
/// source table.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<LiteralRule>,
    preserve_case: bool,
}

impl RuleSet {
    /// Compile a rule table.
    ///
    /// `mappings` must already be in a stable order; keys are re-sorted
    /// by length descending with a stable sort before compilation.
    pub fn compile(
        mappings: Vec<(String, String)>,
        mode: MatchMode,
        preserve_case: bool,
    ) -> Result<Self> {
        let mut sorted = mappings;
        sorted.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        let mut rules = Vec::with_capacity(sorted.len());
        for (key, replacement) in sorted {
            if key.is_empty() {
                return Err(CoreError::InvalidRule {
                    key,
                    reason: "empty match key".into(),
                });
            }
            let pattern = build_pattern(&key, mode);
            rules.push(LiteralRule {
                regex: Regex::new(&pattern)?,
                replacement,
            });
        }

        Ok(Self {
            rules,
            preserve_case,
        })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules were compiled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `text` in priority order.
    ///
    /// Each rule claims the spans it matches on the original input; a
    /// span already claimed by a higher-priority (longer) rule is not
    /// available to later rules, and replacement text is never re-scanned
    /// within the same pass.
    pub fn apply(&self, text: &str) -> String {
        let mut claims: Vec<(usize, usize, String)> = Vec::new();

        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                let overlaps = claims
                    .iter()
                    .any(|&(start, end, _)| m.start() < end && start < m.end());
                if overlaps {
                    continue;
                }
                let replacement = if self.preserve_case {
                    match_case(m.as_str(), &rule.replacement)
                } else {
                    rule.replacement.clone()
                };
                claims.push((m.start(), m.end(), replacement));
            }
        }

        claims.sort_by_key(|&(start, _, _)| start);

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, end, replacement) in claims {
            out.push_str(&text[cursor..start]);
            out.push_str(&replacement);
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}

fn build_pattern(key: &str, mode: MatchMode) -> String {
    let body = match mode {
        MatchMode::Words { .. } if key.contains(' ') => {
            // Irregular spacing in the input still matches the phrase
            key.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        }
        _ => regex::escape(key),
    };

    match mode {
        MatchMode::Words {
            word_boundary: true,
        } => format!(r"(?i)\b{body}\b"),
        _ => format!("(?i){body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, &str)], mode: MatchMode) -> RuleSet {
        let mappings = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuleSet::compile(mappings, mode, true).unwrap()
    }

    #[test]
    fn longest_key_wins() {
        let set = rules(
            &[("going", "goin"), ("going to", "gonna")],
            MatchMode::Words {
                word_boundary: true,
            },
        );
        assert_eq!(set.apply("I am going to run"), "I am gonna run");
    }

    #[test]
    fn phrase_matches_across_irregular_whitespace() {
        let set = rules(
            &[("going to", "gonna")],
            MatchMode::Words {
                word_boundary: true,
            },
        );
        assert_eq!(set.apply("going   to town"), "gonna town");
    }

    #[test]
    fn word_boundary_blocks_substring_hits() {
        let set = rules(
            &[("the", "da")],
            MatchMode::Words {
                word_boundary: true,
            },
        );
        assert_eq!(set.apply("the theater"), "da theater");
    }

    #[test]
    fn char_mode_hits_inside_words() {
        let set = rules(&[("th", "d")], MatchMode::Chars);
        assert_eq!(set.apply("the theater"), "de deater");
    }

    #[test]
    fn replacement_output_is_not_rescanned() {
        // "da" appears only as the output of the first rule; the second
        // rule must not pick it up within the same pass.
        let set = rules(
            &[("the", "da"), ("da", "XX")],
            MatchMode::Words {
                word_boundary: true,
            },
        );
        assert_eq!(set.apply("the"), "da");
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = RuleSet::compile(
            vec![(String::new(), "x".into())],
            MatchMode::Chars,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRule { .. }));
    }
}
