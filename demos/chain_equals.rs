//! Chained Equals
//!
//! This example contrasts the two input policies on the same keystrokes.
//!
//! Key concepts:
//! - Immutable calculator handles: every keystroke returns a new one
//! - Repeated `=` re-applying the last operation (extended policy)
//! - Strict rejection of ambiguous sequences (basic policy)
//!
//! Run with: cargo run --example chain_equals

use keycalc::{Calculator, Policy};

fn main() {
    println!("=== Chained Equals Example ===\n");

    for policy in [Policy::Basic, Policy::Extended] {
        println!("--- {} policy ---", policy);

        let mut calculator = Calculator::new(policy);
        for symbol in "9-2===".chars() {
            match calculator.input(symbol) {
                Ok(next) => {
                    calculator = next;
                    println!(
                        "  {} -> {:>4} ({})",
                        symbol,
                        calculator.result(),
                        calculator.phase().name()
                    );
                }
                Err(error) => println!("  {} rejected: {}", symbol, error),
            }
        }

        match calculator.feed("+*") {
            Ok(next) => println!("  +* -> {}", next.result()),
            Err(error) => println!("  +* rejected: {}", error),
        }

        println!("  tape: {}\n", calculator.tape().keys());
    }

    println!("=== Example Complete ===");
}
