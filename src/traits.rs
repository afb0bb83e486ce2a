//! Observer seam between the stepper and whatever consumes its progress.
//!
//! The stepper never renders, sleeps or schedules anything. It finalizes one
//! index, builds a [`StepSnapshot`] and hands it to a [`StepObserver`]. A UI,
//! a logger or a test harness implements the trait (or passes a closure) and
//! decides what to do with each snapshot. Returning
//! [`ControlFlow::Break`] detaches the observer: the driver finishes the pass
//! without building further snapshots.
//!
//! Three implementations ship with the crate:
//! - any `FnMut(&StepSnapshot) -> ControlFlow<()>` closure,
//! - [`SnapshotLog`], which records every snapshot in memory,
//! - [`ChannelObserver`], which forwards snapshots to an observer running on
//!   another thread.

use std::ops::ControlFlow;
use std::sync::mpsc::Sender;

use crate::snapshot::StepSnapshot;

/// Receives one snapshot per finalized index, in index order.
pub trait StepObserver {
    /// Called after index `snapshot.index` has been finalized.
    fn on_step(&mut self, snapshot: &StepSnapshot) -> ControlFlow<()>;
}

impl<F> StepObserver for F
where
    F: FnMut(&StepSnapshot) -> ControlFlow<()>,
{
    fn on_step(&mut self, snapshot: &StepSnapshot) -> ControlFlow<()> {
        self(snapshot)
    }
}

/// Forwards snapshots over a channel.
///
/// Breaks once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelObserver(pub Sender<StepSnapshot>);

impl From<Sender<StepSnapshot>> for ChannelObserver {
    fn from(tx: Sender<StepSnapshot>) -> Self {
        Self(tx)
    }
}

impl StepObserver for ChannelObserver {
    fn on_step(&mut self, snapshot: &StepSnapshot) -> ControlFlow<()> {
        match self.0.send(snapshot.clone()) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    }
}

/// In-memory recorder of every published snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLog {
    snapshots: Vec<StepSnapshot>,
}

impl SnapshotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots recorded so far, in publication order.
    pub fn snapshots(&self) -> &[StepSnapshot] {
        &self.snapshots
    }

    /// `(index, C, R)` for every recorded step.
    pub fn rightmost_trace(&self) -> Vec<(usize, usize, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.index, s.center, s.right))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn into_inner(self) -> Vec<StepSnapshot> {
        self.snapshots
    }
}

impl StepObserver for SnapshotLog {
    fn on_step(&mut self, snapshot: &StepSnapshot) -> ControlFlow<()> {
        self.snapshots.push(snapshot.clone());
        ControlFlow::Continue(())
    }
}
