//! Error type shared by the transform and the stepper.

use thiserror::Error;

/// Failures reported by [`transform`](crate::transform::transform) and
/// [`Stepper`](crate::stepper::Stepper).
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ManacherError {
    /// The input contains one of the sentinel characters.
    #[error("reserved character {ch:?} in input at position {position}")]
    ReservedCharacter {
        /// The offending character.
        ch: char,
        /// Character offset in the input string.
        position: usize,
    },
    /// Two sentinel roles were assigned the same character.
    #[error("invalid sentinels: {reason}")]
    InvalidSentinels {
        /// Which roles collide.
        reason: &'static str,
    },
    /// `advance` was called with an index other than the next one.
    #[error("index out of sequence: expected {expected}, got {requested}")]
    OutOfSequence {
        /// Next index the stepper will accept.
        expected: usize,
        /// Index passed by the caller.
        requested: usize,
    },
    /// Every interior index has already been finalized.
    #[error("pass already complete, cannot advance to {requested}")]
    PassComplete {
        /// Index passed by the caller.
        requested: usize,
    },
}
