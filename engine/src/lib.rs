//! Wordshift engine.
//!
//! A [`CipherGame`] session encodes a single word with a randomly drawn
//! Caesar shift, tracks guesses at the shift value, and decodes the word back
//! on demand. The session is a two-state machine (OFF/ON) documented on
//! [`CipherGame`]; everything is synchronous and in-process.
//!
//! # Example
//!
//! ```
//! use wordshift_engine::{CipherGame, ShiftSource};
//! use wordshift_types::Comparison;
//!
//! let source = ShiftSource::fixed(3)?;
//! let mut game = CipherGame::with_source(source);
//!
//! let ciphertext = game.encode("dogs")?;
//! assert_eq!(ciphertext, "grjv");
//!
//! assert_eq!(game.guess(1)?, Comparison::TooLow);
//! assert_eq!(game.guess(3)?, Comparison::Correct);
//!
//! assert_eq!(game.decode()?, "dogs");
//! assert!(!game.is_active());
//! # Ok::<(), wordshift_types::GameError>(())
//! ```

mod alphabet;
mod game;
mod source;

pub use game::{CipherGame, MIN_WORD_CHARS};
pub use source::{ShiftSource, MAX_SHIFT, MIN_SHIFT};
