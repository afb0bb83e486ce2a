//! Published per-step state.
//!
//! A [`StepSnapshot`] owns its copy of the radius array, so it can be handed
//! to another thread or kept around after the stepper has moved on.

use std::fmt;

/// State of a pass right after index `index` was finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSnapshot {
    /// The index that was just finalized.
    pub index: usize,
    /// Full radius array; entries past `index` are still 0.
    pub radii: Vec<usize>,
    /// Center `C` of the rightmost-reaching palindrome.
    pub center: usize,
    /// Right reach `R = C + P[C]`.
    pub right: usize,
    /// Mirror index `2C - i` when the radius was seeded from it.
    pub mirror: Option<usize>,
    /// Radius inherited before expansion.
    pub seed: usize,
    /// Successful comparisons performed by the expansion loop.
    pub expansions: usize,
    /// Whether this step moved `(C, R)`.
    pub center_moved: bool,
}

impl StepSnapshot {
    /// Finalized radius at [`index`](Self::index), or `None` if `index` lies
    /// outside `radii`.
    #[inline]
    pub fn radius(&self) -> Option<usize> {
        self.radii.get(self.index).copied()
    }
}

impl fmt::Display for StepSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i: {}, C: {}, R: {}", self.index, self.center, self.right)
    }
}

/// Counters accumulated over a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Indices finalized so far.
    pub steps: usize,
    /// Sum of `expansions` over every step; bounded by `n`.
    pub total_expansions: usize,
    /// Number of steps that moved `(C, R)`.
    pub center_moves: usize,
    /// Steps whose radius came from a mirror.
    pub mirror_seeds: usize,
}

impl PassStats {
    pub(crate) fn record(&mut self, seeded: bool, expansions: usize, moved: bool) {
        self.steps += 1;
        self.total_expansions += expansions;
        self.center_moves += usize::from(moved);
        self.mirror_seeds += usize::from(seeded);
    }
}
