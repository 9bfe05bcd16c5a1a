use thiserror::Error as ThisError;

/// Input failed a static precondition. The session state is unchanged and the
/// caller may retry with different input.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
pub enum ValidationError {
    #[error("word too short (len={len}, min={min})")]
    WordTooShort { len: usize, min: usize },
    #[error("shift out of range (got={got}, range={min}..={max})")]
    ShiftOutOfRange { got: u8, min: u8, max: u8 },
}

/// Operation invoked in the wrong lifecycle state. The session state is
/// unchanged; the caller must decode or reset first.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
pub enum StateError {
    #[error("a word is already encoded and awaiting decode")]
    AlreadyEncoding,
    #[error("no word is encoded")]
    NothingEncoded,
}

/// Union of everything a session operation can fail with.
///
/// Both kinds are recoverable: every failed call leaves the session exactly as
/// it was.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    State(#[from] StateError),
}
