//! Cipher session state machine.
//!
//! A session is either OFF (no ciphertext pending, a new word may be encoded)
//! or ON (exactly one encoded word awaiting decode). Transitions:
//!
//! - OFF --encode(word)--> ON, storing the ciphertext
//! - ON  --decode()-----> OFF, returning the plaintext and fully resetting
//! - any --reset()------> OFF, re-rolling the shift and zeroing statistics
//!
//! `guess` and `statistics` never change state. Every failing call leaves the
//! session exactly as it was.

use tracing::debug;
use wordshift_types::{Comparison, GameError, GuessStats, StateError, Statistics, ValidationError};

use crate::alphabet;
use crate::source::ShiftSource;

/// Minimum number of characters a word needs before it can be encoded.
///
/// A character count, not an alphabet check: `"a b"` is too short, `"a  b"`
/// is accepted.
pub const MIN_WORD_CHARS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Off,
    On { ciphertext: String },
}

/// One Caesar-shift game session.
///
/// Owns its shift source, the current shift, the lifecycle phase, and the
/// guess counters. Single-threaded by contract; wrap in a lock for shared
/// access.
#[derive(Clone, Debug)]
pub struct CipherGame {
    source: ShiftSource,
    shift: u8,
    phase: Phase,
    stats: GuessStats,
}

impl CipherGame {
    /// New OFF session with an entropy-seeded shift source.
    pub fn new() -> Self {
        Self::with_source(ShiftSource::from_entropy())
    }

    /// New OFF session drawing shifts from `source`.
    pub fn with_source(mut source: ShiftSource) -> Self {
        let shift = source.draw();
        Self {
            source,
            shift,
            phase: Phase::Off,
            stats: GuessStats::default(),
        }
    }

    /// New session that immediately encodes `word`.
    ///
    /// The ciphertext is retrievable via [`encoded_word`](Self::encoded_word).
    pub fn with_word(word: &str) -> Result<Self, GameError> {
        let mut game = Self::new();
        game.encode(word)?;
        Ok(game)
    }

    /// True while a ciphertext is pending decode.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::On { .. })
    }

    /// The pending ciphertext, if any.
    pub fn encoded_word(&self) -> Option<&str> {
        match &self.phase {
            Phase::On { ciphertext } => Some(ciphertext),
            Phase::Off => None,
        }
    }

    /// The current shift value.
    ///
    /// Revealed so a driver can show it once a round ends; guessing it through
    /// [`guess`](Self::guess) is the game.
    pub fn shift_value(&self) -> u8 {
        self.shift
    }

    /// Encodes `word` and transitions OFF -> ON.
    ///
    /// Fails with [`StateError::AlreadyEncoding`] while ON, and with
    /// [`ValidationError::WordTooShort`] for words under
    /// [`MIN_WORD_CHARS`] characters.
    pub fn encode(&mut self, word: &str) -> Result<String, GameError> {
        if self.is_active() {
            return Err(StateError::AlreadyEncoding.into());
        }
        let len = word.chars().count();
        if len < MIN_WORD_CHARS {
            return Err(ValidationError::WordTooShort {
                len,
                min: MIN_WORD_CHARS,
            }
            .into());
        }

        let ciphertext = alphabet::rotate_word(word, self.shift as i8);
        debug!(shift = self.shift, len, "encoded word");
        self.phase = Phase::On {
            ciphertext: ciphertext.clone(),
        };
        Ok(ciphertext)
    }

    /// Decodes the pending ciphertext, fully resets, and returns the
    /// plaintext.
    ///
    /// The reset re-rolls the shift, zeroes the statistics, and clears the
    /// ciphertext, so the returned word is the only trace of the round.
    /// Fails with [`StateError::NothingEncoded`] while OFF.
    pub fn decode(&mut self) -> Result<String, GameError> {
        let Phase::On { ciphertext } = &self.phase else {
            return Err(StateError::NothingEncoded.into());
        };
        let plaintext = alphabet::rotate_word(ciphertext, -(self.shift as i8));
        debug!(shift = self.shift, "decoded word");
        self.reset();
        Ok(plaintext)
    }

    /// Records `value` into the statistics and compares it against the shift.
    ///
    /// Any integer is accepted; values outside 1..=9 simply land in the
    /// high/low counters. Fails with [`StateError::NothingEncoded`] while OFF.
    pub fn guess(&mut self, value: i64) -> Result<Comparison, GameError> {
        if !self.is_active() {
            return Err(StateError::NothingEncoded.into());
        }
        Ok(self.stats.record(value, self.shift))
    }

    /// Current guess counters. Meaningful in any state, including before the
    /// first guess.
    pub fn statistics(&self) -> Statistics {
        self.stats.snapshot()
    }

    /// Unconditionally returns to OFF: re-rolls the shift, zeroes the
    /// statistics, clears any pending ciphertext.
    pub fn reset(&mut self) {
        self.shift = self.source.draw();
        self.phase = Phase::Off;
        self.stats.reset();
        debug!(shift = self.shift, "session reset");
    }
}

impl Default for CipherGame {
    fn default() -> Self {
        Self::new()
    }
}
