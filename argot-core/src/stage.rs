//! The stage capability trait
//!
//! Every unit of the rewrite pipeline implements exactly one capability:
//! take text, return rewritten text. Stages are a closed set of concrete
//! types held behind trait objects by the pipeline.

/// One unit of the rewrite pipeline.
///
/// `rewrite` takes `&mut self` because two stage kinds carry cross-call
/// state: sentence augmentation owns persistent occurrence counters and
/// the seeded stages own a generator cursor. All other stages are
/// stateless and never touch `self` mutably.
pub trait Stage: Send {
    /// Rewrite the input text and return the result.
    fn rewrite(&mut self, text: &str) -> String;

    /// Restore the stage to its freshly-constructed state.
    ///
    /// Stateless stages keep the default no-op.
    fn reset(&mut self) {}

    /// Short stable name, used for tracing.
    fn name(&self) -> &'static str;
}
