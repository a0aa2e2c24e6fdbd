//! Seeded character corruption
//!
//! Replaces a pseudo-randomly chosen share of alphanumeric characters
//! with block and shape glyphs. The generator is PCG32 seeded from a
//! caller-supplied integer: PCG32 is a documented, portable algorithm,
//! so the same seed produces the same stream on every platform and the
//! output of a freshly-seeded stage is a pure function of
//! (input, percentage, seed).

use crate::stage::Stage;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Default corruption percentage when the configuration gives none.
pub const DEFAULT_GLITCH_PERCENTAGE: i64 = 100;

/// Default seed shared by the seeded stages.
pub const DEFAULT_SEED: u64 = 42;

/// Block and shape glyphs used for the corruption effect, in a fixed
/// order shared read-only by every stage instance.
pub const GLITCH_PALETTE: [char; 80] = [
    '█', '▓', '▒', '░', '▀', '▄', '▌', '▐', '■', '□', //
    '▪', '▫', '▬', '▭', '▮', '▯', '▰', '▱', '▲', '△', //
    '▴', '▵', '▶', '▷', '▸', '▹', '►', '▻', '▼', '▽', //
    '▾', '▿', '◀', '◁', '◂', '◃', '◄', '◅', '◆', '◇', //
    '◈', '◉', '◊', '○', '◌', '◍', '◎', '●', '◐', '◑', //
    '◒', '◓', '◔', '◕', '◖', '◗', '◘', '◙', '◚', '◛', //
    '◜', '◝', '◞', '◟', '◠', '◡', '◢', '◣', '◤', '◥', //
    '◦', '◧', '◨', '◩', '◪', '◫', '◬', '◭', '◮', '◯', //
];

/// Deterministic pseudo-random corruption of alphanumeric characters.
///
/// One draw is consumed per alphanumeric input character, left to right;
/// a second draw selects the glyph only when the first falls within the
/// configured percentage. Non-alphanumeric characters pass through and
/// consume no draw. Reusing the same instance continues the generator
/// sequence; [`Stage::reset`] reseeds it.
#[derive(Debug)]
pub struct GlitchCorruption {
    percentage: u32,
    seed: u64,
    rng: Pcg32,
}

impl GlitchCorruption {
    /// Create a corruption stage.
    ///
    /// `percentage` is clamped to the range 0..=100.
    pub fn new(percentage: i64, seed: u64) -> Self {
        Self {
            percentage: percentage.clamp(0, 100) as u32,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The clamped corruption percentage.
    pub fn percentage(&self) -> u32 {
        self.percentage
    }
}

impl Stage for GlitchCorruption {
    fn rewrite(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_alphanumeric() {
                let roll: u32 = self.rng.gen_range(1..=100);
                if roll <= self.percentage {
                    let index = self.rng.gen_range(0..GLITCH_PALETTE.len());
                    out.push(GLITCH_PALETTE[index]);
                } else {
                    out.push(ch);
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
        "glitch_corruption"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let mut a = GlitchCorruption::new(60, 7);
        let mut b = GlitchCorruption::new(60, 7);
        assert_eq!(a.rewrite("Hello world 123"), b.rewrite("Hello world 123"));
    }

    #[test]
    fn different_seed_diverges() {
        let mut a = GlitchCorruption::new(100, 1);
        let mut b = GlitchCorruption::new(100, 2);
        let text = "a fairly long line of text to corrupt";
        assert_ne!(a.rewrite(text), b.rewrite(text));
    }

    #[test]
    fn zero_percentage_is_identity() {
        let mut stage = GlitchCorruption::new(0, 42);
        assert_eq!(stage.rewrite("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn full_percentage_replaces_every_alphanumeric() {
        let mut stage = GlitchCorruption::new(100, 42);
        let out = stage.rewrite("ab, cd!");
        assert_eq!(out.chars().count(), 7);
        for (original, glitched) in "ab, cd!".chars().zip(out.chars()) {
            if original.is_alphanumeric() {
                assert!(GLITCH_PALETTE.contains(&glitched));
            } else {
                assert_eq!(original, glitched);
            }
        }
    }

    #[test]
    fn out_of_range_percentage_is_clamped() {
        assert_eq!(GlitchCorruption::new(250, 0).percentage(), 100);
        assert_eq!(GlitchCorruption::new(-5, 0).percentage(), 0);
    }

    #[test]
    fn reused_instance_advances_reset_restores() {
        let mut stage = GlitchCorruption::new(100, 9);
        let first = stage.rewrite("corrupt me");
        let second = stage.rewrite("corrupt me");
        assert_ne!(first, second);
        stage.reset();
        assert_eq!(stage.rewrite("corrupt me"), first);
    }
}
