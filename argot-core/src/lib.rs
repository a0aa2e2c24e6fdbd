//! Rule-stage engine and pipeline composer for text stylization
//!
//! This crate turns a declarative filter configuration into an ordered
//! set of deterministic text-rewrite stages and applies them in a fixed
//! sequence: word/phrase substitution, character substitution, affix
//! replacement, word-length replacement, punctuation augmentation,
//! random re-casing and seeded corruption, wrapped in optional literal
//! prefix/suffix text.
//!
//! ```
//! use argot_core::{build, FilterConfig};
//!
//! let config: FilterConfig = toml::from_str(
//!     r#"
//!     [phrases]
//!     "going to" = "gonna"
//!     "#,
//! )
//! .unwrap();
//!
//! let mut pipeline = build(&config).unwrap();
//! assert_eq!(pipeline.rewrite("I am going to run"), "I am gonna run");
//! ```

#![warn(missing_docs)]

pub mod affix;
pub mod augment;
pub mod builder;
pub mod casing;
pub mod config;
pub mod error;
pub mod glitch;
pub mod matcher;
pub mod pipeline;
pub mod random_case;
pub mod stage;
pub mod substitute;
pub mod wordlen;

// Re-export key types
pub use affix::{PrefixReplacer, SuffixReplacer, DEFAULT_MIN_STEM};
pub use augment::SentenceAugmenter;
pub use builder::{build, build_with_policy};
pub use casing::match_case;
pub use config::{AugmentSpec, FilterConfig, LengthBandSpec, SeededSpec, SuffixSpec};
pub use error::{CoreError, Result};
pub use glitch::{GlitchCorruption, GLITCH_PALETTE};
pub use pipeline::{Pipeline, StatePolicy};
pub use random_case::CaseScrambler;
pub use stage::Stage;
pub use substitute::{CharacterSubstitution, Substitution};
pub use wordlen::{LengthBand, WordLengthReplacer};
