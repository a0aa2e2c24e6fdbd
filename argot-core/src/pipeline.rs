//! Stage composition
//!
//! A pipeline is an ordered list of stages plus optional literal prefix
//! and suffix text applied once, outside the stage loop.

use crate::stage::Stage;

/// How a pipeline treats the cross-call state of its stateful stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatePolicy {
    /// Counters and generators advance monotonically across calls; the
    /// expected mode when streaming many lines through one pipeline.
    #[default]
    Persistent,
    /// Every stage is reset before each call, making output a pure
    /// function of the input text.
    PerCall,
}

/// An ordered composition of rewrite stages.
///
/// Not safe for concurrent invocation from multiple threads: the
/// augmentation counters and generator cursors are mutable instance
/// state. Sequential reuse of one instance is the expected usage.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    prefix: String,
    suffix: String,
    policy: StatePolicy,
}

impl Pipeline {
    /// Create an empty pipeline with the given state policy.
    pub fn new(policy: StatePolicy) -> Self {
        Self {
            stages: Vec::new(),
            prefix: String::new(),
            suffix: String::new(),
            policy,
        }
    }

    /// Append a stage; stages run in insertion order.
    pub fn push(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    /// Set literal text emitted before the final stage output.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Set literal text emitted after the final stage output.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the pipeline holds no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The configured state policy.
    pub fn policy(&self) -> StatePolicy {
        self.policy
    }

    /// Reset every stage to its freshly-constructed state.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }

    /// Feed `text` through every stage in order, then wrap the result in
    /// the literal prefix and suffix.
    pub fn rewrite(&mut self, text: &str) -> String {
        if self.policy == StatePolicy::PerCall {
            self.reset();
        }

        let mut current = text.to_string();
        for stage in &mut self.stages {
            tracing::trace!(stage = stage.name(), "applying stage");
            current = stage.rewrite(&current);
        }

        let mut out = String::with_capacity(self.prefix.len() + current.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&current);
        out.push_str(&self.suffix);
        out
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitute::Substitution;

    fn word_stage(pairs: &[(&str, &str)]) -> Box<dyn Stage> {
        let mappings = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Box::new(Substitution::new(mappings, true, true).unwrap())
    }

    #[test]
    fn stages_thread_output_in_order() {
        let mut pipeline = Pipeline::new(StatePolicy::Persistent);
        pipeline.push(word_stage(&[("hello", "goodbye")]));
        pipeline.push(word_stage(&[("goodbye", "farewell")]));
        // The second stage sees the first stage's output
        assert_eq!(pipeline.rewrite("hello"), "farewell");
    }

    #[test]
    fn wrapping_applies_outside_the_stage_loop() {
        let mut pipeline = Pipeline::new(StatePolicy::Persistent);
        pipeline.push(word_stage(&[("a", "b")]));
        pipeline.set_prefix(">> ");
        pipeline.set_suffix(" <<");
        assert_eq!(pipeline.rewrite("a"), ">> b <<");
    }

    #[test]
    fn empty_pipeline_only_wraps() {
        let mut pipeline = Pipeline::new(StatePolicy::Persistent);
        pipeline.set_prefix("[");
        pipeline.set_suffix("]");
        assert_eq!(pipeline.rewrite("text"), "[text]");
    }
}
