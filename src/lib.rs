//! Randomized word-combination poetry with rating history
//!
//! Combinations are drawn from a fixed vocabulary without replacement (or from
//! the user's active selection, shuffled), rated on a 0 to 10 scale and kept in
//! an ordered history whose statistics are recomputed on demand.

#![forbid(unsafe_code)]

/// Random sources, word sampling and sentence formatting
pub mod algorithm;
/// Rating statistics and feedback
pub mod analysis;
/// Input/output operations, persistence and error handling
pub mod io;
/// Vocabulary, selection, history and session state
pub mod model;

pub use io::error::{PoetryError, Result};
