//! Caller-facing calculator handle.
//!
//! [`Calculator`] pairs a [`crate::core::CalculatorState`] with its
//! [`crate::policy::Policy`] and the keystroke tape, and exposes the
//! two-operation contract: `input` a symbol, read the `result`.

mod calculator;

pub use calculator::Calculator;
