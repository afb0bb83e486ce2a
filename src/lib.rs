//! Step-observable Manacher longest-palindromic-substring engine.
//!
//! The crate splits Manacher's algorithm into two parts:
//! 1. [`transform`](transform::transform) builds the delimiter-interleaved,
//!    guard-bounded working sequence for an input string.
//! 2. [`Stepper`] owns the radius array and the `(C, R)` pair and finalizes
//!    one index per [`advance`](Stepper::advance) call, publishing a
//!    [`StepSnapshot`] after each one.
//!
//! An interactive consumer (visualizer, instrumented test, logger) drives the
//! stepper one index at a time and reads the snapshots; everything else calls
//! [`Stepper::run_to_completion`] or the [`manacher`] shortcut.
//!
//! ## Quick start
//! ```
//! use manacher_step::{longest_palindrome, Stepper};
//!
//! let longest = longest_palindrome("forgeeksskeegfor").unwrap();
//! assert_eq!(longest.text, "geeksskeeg");
//! assert_eq!(longest.start, 3);
//!
//! // Step through the same pass and watch the right boundary grow.
//! let mut stepper = Stepper::for_input("abba").unwrap();
//! let mut last_right = 0;
//! while let Some(index) = stepper.next_index() {
//!     let snap = stepper.advance(index).unwrap();
//!     assert!(snap.right >= last_right);
//!     last_right = snap.right;
//! }
//! ```
//!
//! ## Observers
//! [`Stepper::drive`] feeds every snapshot to a [`StepObserver`]: a closure,
//! a [`SnapshotLog`](traits::SnapshotLog) or a
//! [`ChannelObserver`](traits::ChannelObserver) wrapping an `mpsc` sender.
//!
//! ## Features
//! - `tracing`: spans around runs and trace events for every boundary move.
//! - `parallel`: [`batch::longest_palindromes`] fans out over rayon.

pub mod batch;
pub mod builder;
pub mod error;
pub mod longest;
pub mod snapshot;
pub mod stepper;
pub mod traits;
pub mod transform;
pub mod utils;

pub use crate::builder::StepperBuilder;
pub use crate::error::ManacherError;
pub use crate::longest::{Completion, Longest};
pub use crate::snapshot::{PassStats, StepSnapshot};
pub use crate::stepper::Stepper;
pub use crate::traits::StepObserver;
pub use crate::transform::{transform, Center, Sentinels, WorkingSequence};

/// Transform `input` and run the whole pass.
pub fn manacher(input: &str) -> Result<Completion, ManacherError> {
    Ok(Stepper::for_input(input)?.run_to_completion())
}

/// Longest palindromic substring of `input`.
pub fn longest_palindrome(input: &str) -> Result<Longest, ManacherError> {
    manacher(input).map(|done| done.longest)
}
