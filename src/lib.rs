//! Keycalc: an immutable keystroke-driven calculator engine
//!
//! Keycalc consumes one input symbol at a time (a digit, `+`, `-`, `*`, `=`
//! or `C`) and produces a brand-new calculator state for each accepted
//! symbol. Nothing is mutated in place: a rejected symbol leaves the
//! caller's state exactly as it was.
//!
//! # Core Concepts
//!
//! - **State**: Immutable calculator memory via [`CalculatorState`]
//! - **Policy**: Strict ([`Policy::Basic`]) or forgiving ([`Policy::Extended`])
//!   reconciliation of repeated and chained keys
//! - **Calculator**: A handle exposing `input` and `result`, recording a tape
//!   of accepted keystrokes
//!
//! Arithmetic is whole-number only. Typed operands are bounded by the 32-bit
//! signed maximum; calculated results outside the 32-bit range become zero.
//!
//! # Example
//!
//! ```rust
//! use keycalc::{Calculator, Policy};
//!
//! let calculator = Calculator::new(Policy::Extended).feed("9-2=").unwrap();
//! assert_eq!(calculator.result(), "7");
//!
//! let calculator = calculator.feed("==").unwrap();
//! assert_eq!(calculator.result(), "3");
//! ```

pub mod builder;
pub mod core;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use crate::core::{CalculatorError, CalculatorState, Key, Operator, OPERAND_LIMIT};
pub use policy::{apply, Policy};
pub use session::Calculator;
