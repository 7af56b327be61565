//! Immutable calculator memory.
//!
//! A [`CalculatorState`] is a value: every accepted keystroke produces a new
//! one and no method mutates an existing instance. The transition logic lives
//! in [`crate::core::primitives`] and [`crate::policy`]; this module only
//! defines the data and read-only views of it.

use super::key::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive magnitude bound for typed operands: the 32-bit signed maximum.
pub const OPERAND_LIMIT: i64 = i32::MAX as i64;

/// Whether `limit` can bound a state: positive and within the 32-bit range.
pub(crate) fn is_valid_operand_limit(limit: i64) -> bool {
    (1..=OPERAND_LIMIT).contains(&limit)
}

/// Coarse position of a state in the keystroke state machine.
///
/// Derived from the state's flags; useful for logging and for the tape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing on the display
    Idle,
    /// Typing the running value, no operator staged
    EnteringValue,
    /// An operator was just pressed
    AwaitingOperand,
    /// Typing the operand of a staged operator
    EnteringOperand,
    /// `=` was just pressed
    Evaluated,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::EnteringValue => "EnteringValue",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
            Self::Evaluated => "Evaluated",
        }
    }
}

/// Snapshot of calculator memory.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase, OPERAND_LIMIT};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display(), "");
/// assert_eq!(state.operand_limit(), OPERAND_LIMIT);
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
///
/// States serialize for inspection but never deserialize: the only way to
/// obtain one is through a transition, which keeps the display and the
/// numeric fields in step.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CalculatorState {
    pub(crate) pending_operand: i64,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) accumulated_result: i64,
    pub(crate) display: String,
    pub(crate) operand_limit: i64,
    pub(crate) last_action_was_equals: bool,
    pub(crate) last_action_was_operator: bool,
    /// Only read by the extended policy.
    pub(crate) last_operand: i64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// A fresh zero-state bounded by [`OPERAND_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(OPERAND_LIMIT)
    }

    /// A fresh zero-state with a custom operand limit.
    ///
    /// Callers must pass a limit accepted by [`is_valid_operand_limit`].
    pub(crate) fn with_limit(operand_limit: i64) -> Self {
        Self {
            pending_operand: 0,
            pending_operator: None,
            accumulated_result: 0,
            display: String::new(),
            operand_limit,
            last_action_was_equals: false,
            last_action_was_operator: false,
            last_operand: 0,
        }
    }

    /// A fresh zero-state that keeps this state's operand limit.
    pub fn cleared(&self) -> Self {
        Self::with_limit(self.operand_limit)
    }

    pub fn pending_operand(&self) -> i64 {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn accumulated_result(&self) -> i64 {
        self.accumulated_result
    }

    /// The exact on-screen text.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn operand_limit(&self) -> i64 {
        self.operand_limit
    }

    pub fn last_action_was_equals(&self) -> bool {
        self.last_action_was_equals
    }

    pub fn last_action_was_operator(&self) -> bool {
        self.last_action_was_operator
    }

    /// Second operand of the most recent calculation (extended policy).
    pub fn last_operand(&self) -> i64 {
        self.last_operand
    }

    /// Classify this state.
    pub fn phase(&self) -> Phase {
        if self.last_action_was_equals {
            Phase::Evaluated
        } else if self.last_action_was_operator {
            Phase::AwaitingOperand
        } else if self.display.is_empty() {
            Phase::Idle
        } else if self.pending_operator.is_some() {
            Phase::EnteringOperand
        } else {
            Phase::EnteringValue
        }
    }

    /// The numeric field digits currently flow into.
    pub(crate) fn live_value(&self) -> i64 {
        if self.pending_operator.is_some() {
            self.pending_operand
        } else {
            self.accumulated_result
        }
    }
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
