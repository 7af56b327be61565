//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Keystroke classification via [`Key`]
//! - Immutable memory via [`CalculatorState`]
//! - Transition primitives shared by every policy
//! - The keystroke [`Tape`]
//!
//! Nothing in this module mutates a state in place; every transition
//! returns a new value.

mod error;
mod key;
pub(crate) mod primitives;
mod state;
mod tape;

pub use error::CalculatorError;
pub use key::{Key, Operator};
pub use state::{CalculatorState, Phase, OPERAND_LIMIT};
pub(crate) use state::is_valid_operand_limit;
pub use tape::{Tape, TapeEntry};
