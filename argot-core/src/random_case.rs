//! Seeded random re-capitalization ("StUdLy CaPs")

use crate::stage::Stage;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Default upper-case percentage when the configuration gives none.
pub const DEFAULT_UPPER_PERCENTAGE: i64 = 50;

/// Re-cases every alphabetic character at random.
///
/// Each letter consumes one draw: within the configured percentage it is
/// upper-cased, otherwise lower-cased. Non-alphabetic characters pass
/// through without a draw. Same generator and persistence semantics as
/// the corruption stage: one PCG32 stream per instance, advancing across
/// calls until [`Stage::reset`].
#[derive(Debug)]
pub struct CaseScrambler {
    percentage: u32,
    seed: u64,
    rng: Pcg32,
}

impl CaseScrambler {
    /// Create a scrambler. `percentage` is clamped to 0..=100.
    pub fn new(percentage: i64, seed: u64) -> Self {
        Self {
            percentage: percentage.clamp(0, 100) as u32,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Stage for CaseScrambler {
    fn rewrite(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_alphabetic() {
                let roll: u32 = self.rng.gen_range(1..=100);
                if roll <= self.percentage {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    fn name(&self) -> &'static str {
        "case_scrambler"
    }
}
