//! Resumable Manacher pass.
//!
//! A [`Stepper`] owns the working sequence, the radius array `P` and the
//! `(C, R)` pair. Each call to [`Stepper::advance`] finalizes exactly one
//! interior index and publishes a [`StepSnapshot`]:
//!
//! 1. *Mirror seed*: if `R > i`, start from `min(R - i, P[2C - i])`.
//! 2. *Expansion*: grow while `T[i + P[i] + 1] == T[i - P[i] - 1]`; the guards
//!    stop the loop at either end.
//! 3. *Boundary update*: if `i + P[i] > R`, move `C` to `i` and `R` to
//!    `i + P[i]`.
//!
//! Indices must be visited in order `1, 2, …, n - 2`. Anything else is
//! rejected with [`ManacherError::OutOfSequence`] (or
//! [`ManacherError::PassComplete`] once the pass is over) and leaves the state
//! untouched.
//!
//! ```
//! use manacher_step::{transform::transform, Stepper};
//!
//! let mut stepper = Stepper::new(transform("aba").unwrap());
//! let first = stepper.advance(1).unwrap();
//! assert_eq!((first.index, first.center, first.right), (1, 1, 1));
//!
//! let done = stepper.run_to_completion();
//! assert_eq!(done.longest.text, "aba");
//! ```

use crate::error::ManacherError;
use crate::longest::{extract_longest, Completion};
use crate::snapshot::{PassStats, StepSnapshot};
use crate::traits::StepObserver;
use crate::transform::{transform, WorkingSequence};

/// Incremental Manacher pass over one working sequence.
#[derive(Debug, Clone)]
pub struct Stepper {
    sequence: WorkingSequence,
    radii: Vec<usize>,
    center: usize,
    right: usize,
    next: usize,
    stats: PassStats,
}

/// What a single finalized index did, before it is turned into a snapshot.
#[derive(Debug, Clone, Copy)]
struct Finalized {
    index: usize,
    mirror: Option<usize>,
    seed: usize,
    expansions: usize,
    center_moved: bool,
}

impl Stepper {
    /// Start a pass with `P` all zeros, `C = R = 0` and next index 1.
    pub fn new(sequence: WorkingSequence) -> Self {
        let n = sequence.len();
        Self {
            sequence,
            radii: vec![0; n],
            center: 0,
            right: 0,
            next: 1,
            stats: PassStats::default(),
        }
    }

    /// Transform `input` with the default sentinels and start a pass.
    pub fn for_input(input: &str) -> Result<Self, ManacherError> {
        Ok(Self::new(transform(input)?))
    }

    pub fn sequence(&self) -> &WorkingSequence {
        &self.sequence
    }

    /// Current radius array. Entries past [`completed`](Self::completed) are 0.
    pub fn radii(&self) -> &[usize] {
        &self.radii
    }

    /// Center `C` of the rightmost-reaching palindrome so far.
    pub fn center(&self) -> usize {
        self.center
    }

    /// Right reach `R`.
    pub fn right(&self) -> usize {
        self.right
    }

    pub fn stats(&self) -> PassStats {
        self.stats
    }

    /// Index the next `advance` call must use, or `None` once the pass is over.
    pub fn next_index(&self) -> Option<usize> {
        (self.next <= self.sequence.last_interior()).then_some(self.next)
    }

    /// Last finalized index, or `None` before the first step.
    pub fn completed(&self) -> Option<usize> {
        (self.next > 1).then(|| self.next - 1)
    }

    pub fn is_complete(&self) -> bool {
        self.next_index().is_none()
    }

    /// Finalize index `index` and publish the resulting state.
    ///
    /// `index` must equal [`next_index`](Self::next_index).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn advance(&mut self, index: usize) -> Result<StepSnapshot, ManacherError> {
        self.check_sequence(index)?;
        let step = self.finalize(index);
        Ok(self.snapshot(step))
    }

    /// Finalize the next index, if any.
    pub fn step(&mut self) -> Option<StepSnapshot> {
        let index = self.next_index()?;
        let step = self.finalize(index);
        Some(self.snapshot(step))
    }

    /// Finalize every remaining index and extract the longest palindrome.
    ///
    /// No snapshots are built on this path, so it stays linear in `n`.
    pub fn run_to_completion(mut self) -> Completion {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "manacher_run",
            n = self.sequence.len(),
            resume_at = self.next
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        while let Some(index) = self.next_index() {
            self.finalize(index);
        }
        self.into_completion()
    }

    /// Finalize every remaining index, publishing a snapshot for each one.
    ///
    /// Once the observer breaks, no more snapshots are built and the rest of
    /// the pass runs as in [`run_to_completion`](Self::run_to_completion).
    pub fn drive<O>(mut self, observer: &mut O) -> Completion
    where
        O: StepObserver + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("manacher_drive", n = self.sequence.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        while let Some(snapshot) = self.step() {
            if observer.on_step(&snapshot).is_break() {
                #[cfg(feature = "tracing")]
                tracing::debug!(index = snapshot.index, "observer detached");
                break;
            }
        }
        while let Some(index) = self.next_index() {
            self.finalize(index);
        }
        self.into_completion()
    }

    fn check_sequence(&self, requested: usize) -> Result<(), ManacherError> {
        let err = match self.next_index() {
            Some(expected) if expected == requested => return Ok(()),
            Some(expected) => ManacherError::OutOfSequence {
                expected,
                requested,
            },
            None => ManacherError::PassComplete { requested },
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "rejected advance");
        Err(err)
    }

    fn finalize(&mut self, i: usize) -> Finalized {
        let t = self.sequence.symbols();

        let (mirror, seed) = if self.right > i {
            let m = 2 * self.center - i;
            (Some(m), (self.right - i).min(self.radii[m]))
        } else {
            (None, 0)
        };

        let mut r = seed;
        while t[i + r + 1] == t[i - r - 1] {
            r += 1;
        }
        self.radii[i] = r;

        let center_moved = i + r > self.right;
        if center_moved {
            self.center = i;
            self.right = i + r;
            #[cfg(feature = "tracing")]
            tracing::trace!(center = i, right = self.right, "boundary moved");
        }

        self.next = i + 1;
        self.stats.record(mirror.is_some(), r - seed, center_moved);

        Finalized {
            index: i,
            mirror,
            seed,
            expansions: r - seed,
            center_moved,
        }
    }

    fn snapshot(&self, step: Finalized) -> StepSnapshot {
        StepSnapshot {
            index: step.index,
            radii: self.radii.clone(),
            center: self.center,
            right: self.right,
            mirror: step.mirror,
            seed: step.seed,
            expansions: step.expansions,
            center_moved: step.center_moved,
        }
    }

    fn into_completion(self) -> Completion {
        // Radii finalized by the pass always map back to the input.
        let longest = extract_longest(&self.sequence, &self.radii).unwrap_or_default();
        Completion {
            radii: self.radii,
            longest,
            stats: self.stats,
            sequence: self.sequence,
        }
    }
}

impl Iterator for Stepper {
    type Item = StepSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequence.last_interior() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SnapshotLog;
    use std::ops::ControlFlow;

    #[test]
    fn empty_input_single_step() {
        let mut stepper = Stepper::for_input("").unwrap();
        assert_eq!(stepper.next_index(), Some(1));
        let snap = stepper.advance(1).unwrap();
        assert_eq!(snap.radii, vec![0, 0, 0]);
        assert_eq!((snap.center, snap.right), (1, 1));
        assert!(stepper.is_complete());
        let done = stepper.run_to_completion();
        assert_eq!(done.longest.text, "");
        assert_eq!(done.radii, vec![0, 0, 0]);
    }

    #[test]
    fn aba_radii_and_boundaries() {
        // ^ # a # b # a # $
        let mut stepper = Stepper::for_input("aba").unwrap();
        let trace: Vec<_> = stepper
            .by_ref()
            .map(|s| (s.index, s.radii[s.index], s.center, s.right))
            .collect();
        assert_eq!(
            trace,
            vec![
                (1, 0, 1, 1),
                (2, 1, 2, 3),
                (3, 0, 2, 3),
                (4, 3, 4, 7),
                (5, 0, 4, 7),
                (6, 1, 4, 7),
                (7, 0, 4, 7),
            ]
        );
        assert_eq!(stepper.radii(), &[0, 0, 1, 0, 3, 0, 1, 0, 0]);
    }

    #[test]
    fn mirror_seed_is_reported() {
        let mut stepper = Stepper::for_input("aba").unwrap();
        let snaps: Vec<_> = stepper.by_ref().collect();
        // i = 6 mirrors i = 2 across C = 4 and inherits radius 1.
        let six = &snaps[5];
        assert_eq!(six.mirror, Some(2));
        assert_eq!(six.seed, 1);
        assert_eq!(six.expansions, 0);
        assert!(!six.center_moved);
    }

    #[test]
    fn rejects_out_of_sequence_without_mutating() {
        let mut stepper = Stepper::for_input("abc").unwrap();
        stepper.advance(1).unwrap();
        let before = stepper.clone();
        assert_eq!(
            stepper.advance(3),
            Err(ManacherError::OutOfSequence {
                expected: 2,
                requested: 3
            })
        );
        assert_eq!(
            stepper.advance(1),
            Err(ManacherError::OutOfSequence {
                expected: 2,
                requested: 1
            })
        );
        assert_eq!(stepper.radii(), before.radii());
        assert_eq!(stepper.next_index(), Some(2));
        assert_eq!(stepper.completed(), Some(1));
    }

    #[test]
    fn rejects_advance_after_completion() {
        let mut stepper = Stepper::for_input("a").unwrap();
        for i in 1..=3 {
            stepper.advance(i).unwrap();
        }
        assert_eq!(
            stepper.advance(4),
            Err(ManacherError::PassComplete { requested: 4 })
        );
    }

    #[test]
    fn resume_after_partial_pass() {
        let mut stepper = Stepper::for_input("xabbay").unwrap();
        for i in 1..=5 {
            stepper.advance(i).unwrap();
        }
        let done = stepper.run_to_completion();
        assert_eq!(done.longest.text, "abba");
        assert_eq!(done.longest.start, 1);
    }

    #[test]
    fn drive_publishes_every_index() {
        let stepper = Stepper::for_input("abacaba").unwrap();
        let n = stepper.sequence().len();
        let mut log = SnapshotLog::new();
        let done = stepper.drive(&mut log);
        assert_eq!(log.len(), n - 2);
        assert_eq!(done.longest.text, "abacaba");
        assert_eq!(log.snapshots().last().unwrap().radii, done.radii);
    }

    #[test]
    fn drive_stops_publishing_after_break() {
        let mut calls = 0;
        let mut observer = |_: &StepSnapshot| {
            calls += 1;
            if calls == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let done = Stepper::for_input("xabbay").unwrap().drive(&mut observer);
        assert_eq!(calls, 3);
        assert_eq!(done.longest.text, "abba");
        assert_eq!(done.stats.steps, done.radii.len() - 2);
    }

    #[test]
    fn size_hint_counts_remaining_steps() {
        let mut stepper = Stepper::for_input("ab").unwrap();
        assert_eq!(stepper.size_hint(), (5, Some(5)));
        stepper.step();
        assert_eq!(stepper.size_hint(), (4, Some(4)));
    }

    #[test]
    fn expansions_are_linear() {
        let input = "a".repeat(200);
        let done = Stepper::for_input(&input).unwrap().run_to_completion();
        assert!(done.stats.total_expansions <= done.radii.len());
        assert_eq!(done.stats.steps, done.radii.len() - 2);
    }
}
