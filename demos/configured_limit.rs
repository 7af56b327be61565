//! Configured Operand Limit
//!
//! This example loads a calculator from a JSON configuration and shows how
//! the operand limit bounds typed values and clamps results.
//!
//! Run with: cargo run --example configured_limit

use keycalc::{CalculatorBuilder, CalculatorConfig};

fn main() {
    println!("=== Configured Limit Example ===\n");

    let config = CalculatorConfig::from_json(r#"{ "policy": "extended", "operand_limit": 100 }"#)
        .unwrap();
    println!("Loaded config: {:?}", config);

    let calculator = CalculatorBuilder::from_config(config).build().unwrap();

    match calculator.feed("101") {
        Ok(next) => println!("101 accepted: {}", next.result()),
        Err(error) => println!("101 rejected: {}", error),
    }

    let calculator = calculator.feed("60+50=").unwrap();
    println!("60+50= -> {} (out of range, clamped)", calculator.result());

    let replayed = calculator.tape().replay(calculator.policy()).unwrap();
    println!("Replayed {} keys -> {}", calculator.tape().len(), replayed.display());

    println!("\n=== Example Complete ===");
}
