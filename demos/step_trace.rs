//! Example: watch a Manacher pass one index at a time.
//!
//! Run with:
//! `cargo run --example step_trace -- babbabbabc`
//!
//! Each step prints the status line and a sideways bar chart of the radius
//! array, with `C` and `R` marked. This is the rendering side; the stepper
//! itself only publishes snapshots.

use std::env;
use std::ops::ControlFlow;

use manacher_step::{Sentinels, StepSnapshot, StepperBuilder};

fn main() {
    let input = env::args().nth(1).unwrap_or_else(|| "babbabbabc".to_string());

    let stepper = match StepperBuilder::new()
        .with_sentinels(Sentinels::ascii())
        .build(&input)
    {
        Ok(stepper) => stepper,
        Err(err) => {
            eprintln!("step_trace: {err}");
            std::process::exit(2);
        }
    };

    let labels: Vec<char> = stepper.sequence().symbols().to_vec();
    println!("T = {}", stepper.sequence());

    let mut render = |snap: &StepSnapshot| {
        println!();
        println!("{snap}");
        for (j, (&label, &radius)) in labels.iter().zip(&snap.radii).enumerate() {
            let marker = match (j == snap.center, j == snap.right) {
                (true, true) => "C R",
                (true, false) => "C  ",
                (false, true) => "  R",
                (false, false) => "   ",
            };
            let cursor = if j == snap.index { '>' } else { ' ' };
            println!("{cursor}{j:>3} {label} {marker} |{}", "#".repeat(radius));
        }
        ControlFlow::Continue(())
    };

    let done = stepper.drive(&mut render);

    println!();
    println!(
        "Longest palindrome: {:?} (start {}, length {})",
        done.longest.text, done.longest.start, done.longest.len
    );
    println!(
        "steps={}, expansions={}, center moves={}, mirror seeds={}",
        done.stats.steps,
        done.stats.total_expansions,
        done.stats.center_moves,
        done.stats.mirror_seeds
    );
}
