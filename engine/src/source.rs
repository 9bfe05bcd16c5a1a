//! Shift generation.

use rand::{rngs::StdRng, Rng, SeedableRng};
use wordshift_types::ValidationError;

/// Smallest shift a session will draw.
pub const MIN_SHIFT: u8 = 1;

/// Largest shift a session will draw.
pub const MAX_SHIFT: u8 = 9;

/// Source of shift values for a cipher session.
///
/// Sessions own their source instead of reaching for a process-global RNG, so
/// callers can seed the stream or pin the shift outright.
#[derive(Clone, Debug)]
pub enum ShiftSource {
    /// Draws uniformly from `MIN_SHIFT..=MAX_SHIFT`.
    Rng(StdRng),
    /// Always yields the same shift.
    Fixed(u8),
}

impl ShiftSource {
    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::Rng(StdRng::from_entropy())
    }

    /// Deterministic source; the same seed yields the same shift stream.
    pub fn seeded(seed: u64) -> Self {
        Self::Rng(StdRng::seed_from_u64(seed))
    }

    /// Source pinned to a single shift value.
    pub fn fixed(shift: u8) -> Result<Self, ValidationError> {
        if !(MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
            return Err(ValidationError::ShiftOutOfRange {
                got: shift,
                min: MIN_SHIFT,
                max: MAX_SHIFT,
            });
        }
        Ok(Self::Fixed(shift))
    }

    /// Draws the next shift value.
    pub(crate) fn draw(&mut self) -> u8 {
        match self {
            Self::Rng(rng) => rng.gen_range(MIN_SHIFT..=MAX_SHIFT),
            Self::Fixed(shift) => *shift,
        }
    }
}
