//! Vocabulary loading and phrase matching.
//!
//! This crate provides:
//! - [`Vocabulary`]: the controlled term list, loaded once per run
//! - [`TermMatcher`]: the seam the keyword extractor talks to
//! - [`PhraseMatcher`]: token-sequence matcher compiled from a vocabulary

pub mod phrase;
pub mod vocabulary;

pub use phrase::{PhraseMatcher, TermMatcher, tokenize};
pub use vocabulary::Vocabulary;
