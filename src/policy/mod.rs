//! Input policies and keystroke dispatch.
//!
//! Both policies share the primitives in [`crate::core`] and disagree only on
//! how repeated keys and chained operations are reconciled:
//!
//! - [`Policy::Basic`] rejects ambiguous sequences (two operators in a row,
//!   `=` with no operand) and treats a repeated `=` as a no-op.
//! - [`Policy::Extended`] forgives them: a second operator replaces the
//!   first, `=` after an operator operates the value on itself, and repeated
//!   `=` re-applies the last operation.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{CalculatorError, CalculatorState};
//! use keycalc::policy::{apply, Policy};
//!
//! let state = CalculatorState::new();
//! let state = apply(&state, '2', Policy::Extended).unwrap();
//! let state = apply(&state, '+', Policy::Extended).unwrap();
//! let replaced = apply(&state, '*', Policy::Extended).unwrap();
//! assert_eq!(replaced.display(), "2*");
//!
//! assert_eq!(
//!     apply(&state, '*', Policy::Basic),
//!     Err(CalculatorError::ConsecutiveOperator(keycalc::core::Operator::Multiply))
//! );
//! ```

mod basic;
mod extended;

use crate::core::primitives;
use crate::core::{CalculatorError, CalculatorState, Key};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reconciliation rules applied to the keystroke stream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Strict validation, no surprises
    #[default]
    Basic,
    /// Forgiving, chain-friendly behavior of a consumer calculator
    Extended,
}

impl Policy {
    /// Get the policy's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown policy '{0}', expected 'basic' or 'extended'")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "extended" => Ok(Self::Extended),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Classify `symbol` and apply it to `state` under `policy`.
///
/// On success the returned state replaces the caller's; on failure the
/// caller's state is untouched and the keystroke is discarded.
pub fn apply(
    state: &CalculatorState,
    symbol: char,
    policy: Policy,
) -> Result<CalculatorState, CalculatorError> {
    let key = Key::parse(symbol)?;
    apply_key(state, key, policy)
}

/// Apply an already classified keystroke.
pub fn apply_key(
    state: &CalculatorState,
    key: Key,
    policy: Policy,
) -> Result<CalculatorState, CalculatorError> {
    if primitives::swallows_leading_zero(state, key) {
        return Ok(primitives::swallow_leading_zero(state));
    }
    match policy {
        Policy::Basic => basic::apply(state, key),
        Policy::Extended => extended::apply(state, key),
    }
}

/// Digits typed right after `=` start a new session seeded by that digit.
fn enter_digit(state: &CalculatorState, digit: u8) -> Result<CalculatorState, CalculatorError> {
    if state.last_action_was_equals {
        primitives::enter_digit(&state.cleared(), digit)
    } else {
        primitives::enter_digit(state, digit)
    }
}
