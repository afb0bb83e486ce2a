//! Many independent inputs at once.
//!
//! Each input gets its own transform and stepper; nothing is shared between
//! runs. With the `parallel` feature the inputs are spread over the rayon
//! thread pool, otherwise they are processed in order on the calling thread.
//! Either way the output is in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::ManacherError;
use crate::longest::Longest;
use crate::Stepper;

/// Longest palindrome of every input, in input order.
pub fn longest_palindromes<S>(inputs: &[S]) -> Vec<Result<Longest, ManacherError>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("batch", inputs = inputs.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    let iter = inputs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = inputs.iter();

    iter.map(|input| one(input.as_ref())).collect()
}

fn one(input: &str) -> Result<Longest, ManacherError> {
    Ok(Stepper::for_input(input)?.run_to_completion().longest)
}
