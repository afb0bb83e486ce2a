//! Example: longest palindromic substring of each command-line argument.
//!
//! Run with:
//! `cargo run --example longest -- racecar forgeeksskeegfor`

use manacher_step::batch::longest_palindromes;

fn main() {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: longest <text>...");
        std::process::exit(2);
    }

    for (input, result) in inputs.iter().zip(longest_palindromes(&inputs)) {
        match result {
            Ok(longest) => println!(
                "{input:?}: {:?} at {} (length {})",
                longest.text, longest.start, longest.len
            ),
            Err(err) => println!("{input:?}: error: {err}"),
        }
    }
}
