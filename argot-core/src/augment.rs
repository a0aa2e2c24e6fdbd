//! Punctuation-triggered sentence augmentation
//!
//! Inserts supplementary text after punctuation marks, cycling through a
//! list of additions at a configurable frequency. Frequency-gated rules
//! own a persistent occurrence counter that survives across calls to the
//! same stage instance, so augmentation is history-dependent by design.

use crate::error::{CoreError, Result};
use crate::stage::Stage;

/// One augmentation rule plus its persistent occurrence counter.
#[derive(Debug, Clone)]
struct AugmentRule {
    punctuation: char,
    additions: Vec<String>,
    frequency: u32,
    counter: u64,
}

/// Appends additions after configured punctuation marks.
#[derive(Debug, Default)]
pub struct SentenceAugmenter {
    rules: Vec<AugmentRule>,
}

impl SentenceAugmenter {
    /// Create an empty augmenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for one punctuation mark.
    ///
    /// `frequency` of 1 augments every occurrence; N > 1 augments every
    /// Nth occurrence starting with the first.
    pub fn add_rule(
        &mut self,
        punctuation: char,
        additions: Vec<String>,
        frequency: u32,
    ) -> Result<()> {
        if additions.is_empty() {
            return Err(CoreError::InvalidRule {
                key: punctuation.to_string(),
                reason: "additions list is empty".into(),
            });
        }
        if frequency == 0 {
            return Err(CoreError::InvalidRule {
                key: punctuation.to_string(),
                reason: "frequency must be at least 1".into(),
            });
        }
        self.rules.push(AugmentRule {
            punctuation,
            additions,
            frequency,
            counter: 0,
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

fn apply_rule(rule: &mut AugmentRule, text: &str) -> String {
    let parts: Vec<&str> = text.split(rule.punctuation).collect();
    if parts.len() < 2 {
        return text.to_string();
    }

    let last = parts.len() - 1;
    let mut out = String::with_capacity(text.len() + 16);

    if rule.frequency == 1 {
        // Every occurrence, cycling by per-call occurrence index
        for (i, part) in parts[..last].iter().enumerate() {
            out.push_str(part);
            out.push(rule.punctuation);
            out.push_str(&rule.additions[i % rule.additions.len()]);
        }
    } else {
        // Every Nth occurrence, counted across calls
        for part in &parts[..last] {
            out.push_str(part);
            out.push(rule.punctuation);
            if rule.counter % u64::from(rule.frequency) == 0 {
                let index = (rule.counter % rule.additions.len() as u64) as usize;
                out.push_str(&rule.additions[index]);
            }
            rule.counter += 1;
        }
    }

    out.push_str(parts[last]);
    out
}

impl Stage for SentenceAugmenter {
    fn rewrite(&mut self, text: &str) -> String {
        // Rules apply independently, each re-splitting the previous
        // rule's output
        let mut current = text.to_string();
        for rule in &mut self.rules {
            current = apply_rule(rule, &current);
        }
        current
    }

    fn reset(&mut self) {
        for rule in &mut self.rules {
            rule.counter = 0;
        }
    }

    fn name(&self) -> &'static str {
        "sentence_augmenter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn additions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn frequency_one_augments_every_occurrence() {
        let mut stage = SentenceAugmenter::new();
        stage.add_rule('!', additions(&[" Wow!", " Neat!"]), 1).unwrap();
        assert_eq!(
            stage.rewrite("Go! Stop! Go again"),
            "Go! Wow! Stop! Neat! Go again"
        );
    }

    #[test]
    fn frequency_gated_counter_selects_occurrences() {
        let mut stage = SentenceAugmenter::new();
        stage.add_rule('.', additions(&["A", "B"]), 2).unwrap();
        // Counters 0..=3; additions fire at 0 and 2, both selecting
        // index counter % 2 == 0
        assert_eq!(
            stage.rewrite("One. Two. Three. Four."),
            "One.A Two. Three.A Four."
        );
    }

    #[test]
    fn counter_persists_across_calls() {
        let mut stage = SentenceAugmenter::new();
        stage.add_rule('.', additions(&["X"]), 2).unwrap();
        assert_eq!(stage.rewrite("a."), "a.X"); // counter 0
        assert_eq!(stage.rewrite("b."), "b."); // counter 1
        assert_eq!(stage.rewrite("c."), "c.X"); // counter 2
    }

    #[test]
    fn reset_restarts_counters() {
        let mut stage = SentenceAugmenter::new();
        stage.add_rule('.', additions(&["X"]), 2).unwrap();
        assert_eq!(stage.rewrite("a."), "a.X");
        stage.reset();
        assert_eq!(stage.rewrite("a."), "a.X");
    }

    #[test]
    fn text_without_trigger_is_untouched() {
        let mut stage = SentenceAugmenter::new();
        stage.add_rule('.', additions(&["X"]), 1).unwrap();
        assert_eq!(stage.rewrite("no punctuation here"), "no punctuation here");
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let mut stage = SentenceAugmenter::new();
        assert!(stage.add_rule('.', additions(&["X"]), 0).is_err());
    }
}
