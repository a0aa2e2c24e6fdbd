//! Property-based tests for casing and the seeded stages

use argot_core::casing::match_case;
use argot_core::glitch::{GlitchCorruption, GLITCH_PALETTE};
use argot_core::Stage;
use proptest::prelude::*;

proptest! {
    /// Case adaptation never changes which letters the replacement
    /// contains, only their case.
    #[test]
    fn match_case_is_case_insensitively_identity(
        original in "[a-zA-Z]{1,12}",
        replacement in "[a-zA-Z]{1,12}",
    ) {
        let shaped = match_case(&original, &replacement);
        prop_assert!(shaped.eq_ignore_ascii_case(&replacement));
    }

    /// An all-upper original always shouts the replacement.
    #[test]
    fn match_case_shouts_for_upper_originals(
        original in "[A-Z]{1,12}",
        replacement in "[a-zA-Z]{1,12}",
    ) {
        let shaped = match_case(&original, &replacement);
        prop_assert_eq!(shaped, replacement.to_uppercase());
    }

    /// Corruption preserves the character count and leaves every
    /// non-alphanumeric character untouched.
    #[test]
    fn glitch_preserves_shape(
        text in "[ -~]{0,64}",
        percentage in 0i64..=100,
        seed in any::<u64>(),
    ) {
        let mut stage = GlitchCorruption::new(percentage, seed);
        let out = stage.rewrite(&text);
        prop_assert_eq!(out.chars().count(), text.chars().count());
        for (original, rewritten) in text.chars().zip(out.chars()) {
            if original.is_alphanumeric() {
                prop_assert!(
                    rewritten == original || GLITCH_PALETTE.contains(&rewritten)
                );
            } else {
                prop_assert_eq!(original, rewritten);
            }
        }
    }

    /// A freshly-seeded stage is a pure function of its parameters.
    #[test]
    fn glitch_is_reproducible(
        text in "[ -~]{0,64}",
        percentage in 0i64..=100,
        seed in any::<u64>(),
    ) {
        let mut a = GlitchCorruption::new(percentage, seed);
        let mut b = GlitchCorruption::new(percentage, seed);
        prop_assert_eq!(a.rewrite(&text), b.rewrite(&text));
    }
}
