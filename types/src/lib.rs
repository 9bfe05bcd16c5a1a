//! Common types for the wordshift cipher game.
//!
//! Defines the error kinds, guess comparison, and statistics counters shared
//! by the engine and its callers.

mod error;
mod stats;

pub use error::{GameError, StateError, ValidationError};
pub use stats::{Comparison, GuessStats, Statistics};
