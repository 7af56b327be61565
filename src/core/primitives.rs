//! Transition primitives shared by both policies.
//!
//! Digit entry is strict: a digit that would push the live value past the
//! operand limit is rejected. Calculation is permissive: a result outside the
//! 32-bit signed range is replaced by zero and never fails.

use super::error::CalculatorError;
use super::key::{Key, Operator};
use super::state::CalculatorState;
use tracing::debug;

/// Append `digit` to the live numeric field.
///
/// Fails with [`CalculatorError::OperandOverflow`] if the resulting
/// magnitude exceeds the state's operand limit.
pub(crate) fn enter_digit(
    state: &CalculatorState,
    digit: u8,
) -> Result<CalculatorState, CalculatorError> {
    let limit = state.operand_limit;
    let candidate = append_digit(state.live_value(), digit)
        .filter(|value| value.unsigned_abs() <= limit.unsigned_abs())
        .ok_or(CalculatorError::OperandOverflow { limit })?;

    let (pending_operand, accumulated_result) = if state.pending_operator.is_some() {
        (candidate, state.accumulated_result)
    } else {
        (state.pending_operand, candidate)
    };

    // A lone "0" on screen is replaced rather than extended.
    let display = if state.display == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };

    Ok(CalculatorState {
        pending_operand,
        accumulated_result,
        display,
        last_action_was_equals: false,
        last_action_was_operator: false,
        ..state.clone()
    })
}

/// Decimal text of `value` with `digit` appended, as a number.
fn append_digit(value: i64, digit: u8) -> Option<i64> {
    let shifted = value.checked_mul(10)?;
    if value < 0 {
        shifted.checked_sub(i64::from(digit))
    } else {
        shifted.checked_add(i64::from(digit))
    }
}

/// Whether `key` is a leading zero typed straight after an operator on an
/// empty display. Such a keystroke is swallowed.
pub(crate) fn swallows_leading_zero(state: &CalculatorState, key: Key) -> bool {
    key == Key::Digit(0) && state.display.is_empty() && state.last_action_was_operator
}

/// Consume a swallowed leading zero: only the operator flag is cleared.
pub(crate) fn swallow_leading_zero(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        pending_operand: 0,
        last_action_was_operator: false,
        ..state.clone()
    }
}

/// Stage `operator` as pending and echo it on the display.
pub(crate) fn stage_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    CalculatorState {
        pending_operand: 0,
        pending_operator: Some(operator),
        display: format!("{}{}", state.display, operator.symbol()),
        last_action_was_equals: false,
        last_action_was_operator: true,
        ..state.clone()
    }
}

/// Combine the running total with `operand` under the pending operator.
///
/// With no operator pending the running total is returned unchanged. The
/// result is clamped with [`clamp`].
pub(crate) fn evaluate(state: &CalculatorState, operand: i64) -> i64 {
    let lhs = state.accumulated_result;
    let raw = match state.pending_operator {
        Some(operator) => operator.apply(lhs, operand),
        None => Some(lhs),
    };
    clamp(raw, state.operand_limit)
}

/// Replace any result outside `[-limit - 1, limit]` with zero.
///
/// `None` stands for a raw result that overflowed `i64` and is clamped too.
pub(crate) fn clamp(raw: Option<i64>, limit: i64) -> i64 {
    match raw {
        Some(value) if value <= limit && value >= -limit - 1 => value,
        Some(value) => {
            debug!(raw = value, limit, "calculation out of range, clamping to zero");
            0
        }
        None => {
            debug!(limit, "calculation overflowed i64, clamping to zero");
            0
        }
    }
}

/// Commit `result` as the running total and show it.
///
/// The pending operand is reset; the operator and flags are left for the
/// caller's policy to decide.
pub(crate) fn commit_result(state: &CalculatorState, result: i64) -> CalculatorState {
    CalculatorState {
        pending_operand: 0,
        accumulated_result: result,
        display: result.to_string(),
        ..state.clone()
    }
}
