//! Cost of publishing a snapshot per step versus the bare pass.

use std::ops::ControlFlow;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use manacher_step::{traits::SnapshotLog, StepSnapshot, Stepper};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abc";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

fn bench_step_overhead(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let s = random_text(&mut rng, 512);

    let mut group = c.benchmark_group("step_overhead");
    group.bench_function("run_to_completion", |b| {
        b.iter(|| {
            let done = Stepper::for_input(black_box(&s)).unwrap().run_to_completion();
            black_box(done);
        });
    });
    group.bench_function("drive_closure", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let mut observer = |snap: &StepSnapshot| {
                count += snap.expansions;
                ControlFlow::Continue(())
            };
            let done = Stepper::for_input(black_box(&s))
                .unwrap()
                .drive(&mut observer);
            black_box((done, count));
        });
    });
    group.bench_function("drive_log", |b| {
        b.iter(|| {
            let mut log = SnapshotLog::new();
            let done = Stepper::for_input(black_box(&s)).unwrap().drive(&mut log);
            black_box((done, log.len()));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_step_overhead);
criterion_main!(benches);
