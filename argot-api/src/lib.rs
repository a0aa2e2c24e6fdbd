//! Public API for the argot text stylization engine
//!
//! This crate provides a stable facade over the rule-stage engine:
//! load a filter document (JSON or TOML), get a [`TextFilter`] back and
//! feed text through it.

#![warn(missing_docs)]

pub mod error;

use argot_core::{build_with_policy, FilterConfig, Pipeline, StatePolicy};
use error::Result;
use std::path::Path;

// Re-export key types
pub use argot_core::{CoreError, FilterConfig as Config, StatePolicy as Policy};
pub use error::ApiError;

/// A configured text filter.
///
/// Wraps a compiled pipeline; `rewrite` takes `&mut self` because the
/// augmentation counters and generator cursors live in the stages. One
/// instance is meant for sequential reuse; construct one per thread for
/// concurrent use.
pub struct TextFilter {
    pipeline: Pipeline,
    name: Option<String>,
}

impl TextFilter {
    /// Build a filter from a parsed configuration with the default
    /// persistent state policy.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Self::with_policy(config, StatePolicy::Persistent)
    }

    /// Build a filter with an explicit state policy.
    ///
    /// [`StatePolicy::PerCall`] makes every call independent and
    /// reproducible; [`StatePolicy::Persistent`] lets counters and
    /// generators advance across calls.
    pub fn with_policy(config: &FilterConfig, policy: StatePolicy) -> Result<Self> {
        let pipeline = build_with_policy(config, policy)?;
        tracing::debug!(
            name = config.name.as_deref().unwrap_or("<unnamed>"),
            stages = pipeline.len(),
            "filter ready"
        );
        Ok(Self {
            pipeline,
            name: config.name.clone(),
        })
    }

    /// Build a filter from a JSON document.
    pub fn from_json_str(document: &str) -> Result<Self> {
        let config: FilterConfig = serde_json::from_str(document)?;
        Self::from_config(&config)
    }

    /// Build a filter from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: FilterConfig = toml::from_str(document)?;
        Self::from_config(&config)
    }

    /// Build a filter from a JSON file at an explicit path.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json_str(&document)
    }

    /// Build a filter from a TOML file at an explicit path.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Rewrite one input string.
    pub fn rewrite(&mut self, text: &str) -> String {
        self.pipeline.rewrite(text)
    }

    /// Restore all stage state to its freshly-built value.
    pub fn reset(&mut self) {
        self.pipeline.reset();
    }

    /// The filter's display name, when the document carries one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of active stages.
    pub fn stage_count(&self) -> usize {
        self.pipeline.len()
    }
}

impl std::fmt::Debug for TextFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFilter")
            .field("name", &self.name)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

// Convenience functions

/// Rewrite `text` with a filter defined by a JSON document.
pub fn rewrite_with_json(document: &str, text: &str) -> Result<String> {
    let mut filter = TextFilter::from_json_str(document)?;
    Ok(filter.rewrite(text))
}

/// Rewrite `text` with a filter defined by a TOML document.
pub fn rewrite_with_toml(document: &str, text: &str) -> Result<String> {
    let mut filter = TextFilter::from_toml_str(document)?;
    Ok(filter.rewrite(text))
}
