//! Pipeline construction from configuration
//!
//! Turns a [`FilterConfig`] into a [`Pipeline`] with one stage per
//! non-empty rule table, in the fixed canonical order. Absent or empty
//! tables produce no stage at all rather than a no-op.

use crate::affix::{PrefixReplacer, SuffixReplacer};
use crate::augment::SentenceAugmenter;
use crate::config::FilterConfig;
use crate::error::{CoreError, Result};
use crate::glitch::{GlitchCorruption, DEFAULT_GLITCH_PERCENTAGE, DEFAULT_SEED};
use crate::pipeline::{Pipeline, StatePolicy};
use crate::random_case::{CaseScrambler, DEFAULT_UPPER_PERCENTAGE};
use crate::substitute::{CharacterSubstitution, Substitution};
use crate::wordlen::{LengthBand, WordLengthReplacer};

/// Build a pipeline with the default persistent state policy.
pub fn build(config: &FilterConfig) -> Result<Pipeline> {
    build_with_policy(config, StatePolicy::Persistent)
}

/// Build a pipeline with an explicit state policy.
///
/// Canonical stage order: substitution, character substitution, suffix
/// replacement, prefix replacement, word-length replacement, sentence
/// augmentation, case scrambling, corruption; finally the literal
/// prefix/suffix wrapping.
pub fn build_with_policy(config: &FilterConfig, policy: StatePolicy) -> Result<Pipeline> {
    let mut pipeline = Pipeline::new(policy);

    let merged = config.merged_substitutions();
    if !merged.is_empty() {
        let stage = Substitution::new(
            merged.into_iter().collect(),
            config.word_boundary,
            config.preserve_case,
        )?;
        tracing::debug!(rules = stage.len(), "compiled substitution stage");
        pipeline.push(Box::new(stage));
    }

    if !config.characters.is_empty() {
        let mappings = config
            .characters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let stage = CharacterSubstitution::new(mappings, config.preserve_case)?;
        tracing::debug!(rules = stage.len(), "compiled character stage");
        pipeline.push(Box::new(stage));
    }

    if !config.suffixes.is_empty() {
        let mut stage = SuffixReplacer::new();
        for (suffix, spec) in &config.suffixes {
            stage.add_rule(suffix, spec.replacement(), spec.min_stem())?;
        }
        tracing::debug!(rules = stage.len(), "compiled suffix stage");
        pipeline.push(Box::new(stage));
    }

    if !config.prefixes.is_empty() {
        let mut stage = PrefixReplacer::new();
        for (prefix, replacement) in &config.prefixes {
            stage.add_rule(prefix, replacement)?;
        }
        tracing::debug!(rules = stage.len(), "compiled prefix stage");
        pipeline.push(Box::new(stage));
    }

    if !config.word_lengths.is_empty() {
        let bands = config
            .word_lengths
            .iter()
            .map(|spec| LengthBand {
                min_len: spec.min_len,
                max_len: spec.max_len,
                replacement: spec.replacement.clone(),
            })
            .collect();
        let stage = WordLengthReplacer::new(bands)?;
        tracing::debug!(bands = stage.len(), "compiled word-length stage");
        pipeline.push(Box::new(stage));
    }

    if !config.sentence_augmentation.is_empty() {
        let mut stage = SentenceAugmenter::new();
        for spec in &config.sentence_augmentation {
            let punctuation = single_char(&spec.punctuation)?;
            stage.add_rule(punctuation, spec.additions.clone(), spec.frequency)?;
        }
        tracing::debug!(rules = stage.len(), "compiled augmentation stage");
        pipeline.push(Box::new(stage));
    }

    if let Some(spec) = &config.random_case {
        let stage = CaseScrambler::new(
            spec.percentage_or(DEFAULT_UPPER_PERCENTAGE),
            spec.seed_or(DEFAULT_SEED),
        );
        tracing::debug!("compiled case-scrambling stage");
        pipeline.push(Box::new(stage));
    }

    if let Some(spec) = &config.glitch {
        let stage = GlitchCorruption::new(
            spec.percentage_or(DEFAULT_GLITCH_PERCENTAGE),
            spec.seed_or(DEFAULT_SEED),
        );
        tracing::debug!(percentage = stage.percentage(), "compiled glitch stage");
        pipeline.push(Box::new(stage));
    }

    if !config.prefix_text.is_empty() {
        pipeline.set_prefix(config.prefix_text.clone());
    }
    if !config.suffix_text.is_empty() {
        pipeline.set_suffix(config.suffix_text.clone());
    }

    tracing::debug!(stages = pipeline.len(), "pipeline built");
    Ok(pipeline)
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CoreError::InvalidRule {
            key: s.to_string(),
            reason: "punctuation trigger must be a single character".into(),
        }),
    }
}
