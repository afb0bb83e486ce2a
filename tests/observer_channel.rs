use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use manacher_step::{traits::ChannelObserver, StepSnapshot, Stepper};

#[test]
fn snapshots_cross_threads_in_order() {
    let (tx, rx) = mpsc::channel::<StepSnapshot>();

    let renderer = thread::spawn(move || {
        let mut lines = Vec::new();
        let mut last_index = 0;
        for snap in rx {
            assert_eq!(snap.index, last_index + 1);
            last_index = snap.index;
            lines.push(snap.to_string());
        }
        lines
    });

    let stepper = Stepper::for_input("abacaba").unwrap();
    let mut observer = ChannelObserver::from(tx);
    let done = stepper.drive(&mut observer);
    drop(observer);

    let lines = renderer.join().unwrap();
    assert_eq!(lines.len(), done.radii.len() - 2);
    assert_eq!(lines.first().map(String::as_str), Some("i: 1, C: 1, R: 1"));
    assert_eq!(done.longest.text, "abacaba");
}

#[test]
fn closure_observer_sees_partial_state_only() {
    let stepper = Stepper::for_input("noon").unwrap();
    let mut seen = 0usize;
    let mut check = |snap: &StepSnapshot| {
        seen += 1;
        assert!(snap.radii[snap.index + 1..].iter().all(|&r| r == 0));
        ControlFlow::Continue(())
    };
    let done = stepper.drive(&mut check);
    assert_eq!(seen, done.radii.len() - 2);
    assert_eq!(done.longest.text, "noon");
}

#[test]
fn dropped_receiver_detaches_observer() {
    let (tx, rx) = mpsc::channel::<StepSnapshot>();
    drop(rx);

    let stepper = Stepper::for_input("forgeeksskeegfor").unwrap();
    let steps = stepper.sequence().len() - 2;
    let mut observer = ChannelObserver::from(tx);
    let done = stepper.drive(&mut observer);

    assert_eq!(done.longest.text, "geeksskeeg");
    assert_eq!(done.longest.start, 3);
    assert_eq!(done.stats.steps, steps);
}

#[test]
fn halting_leaves_prefix_defined() {
    let mut stepper = Stepper::for_input("abcbaxyz").unwrap();
    let taken: Vec<_> = stepper.by_ref().take(6).collect();
    assert_eq!(taken.len(), 6);
    assert_eq!(stepper.completed(), Some(6));
    assert_eq!(stepper.next_index(), Some(7));
    assert!(stepper.radii()[7..].iter().all(|&r| r == 0));
}
