//! Strict policy: ambiguous sequences are rejected.

use super::enter_digit;
use crate::core::primitives::{commit_result, evaluate, stage_operator};
use crate::core::{CalculatorError, CalculatorState, Key, Operator};

pub(super) fn apply(state: &CalculatorState, key: Key) -> Result<CalculatorState, CalculatorError> {
    match key {
        Key::Clear => Ok(state.cleared()),
        Key::Operator(operator) if state.display.is_empty() && operator.is_illegal_start() => {
            Err(CalculatorError::IllegalStartOperator(operator))
        }
        Key::Digit(digit) => enter_digit(state, digit),
        Key::Operator(operator) => press_operator(state, operator),
        Key::Equals => press_equals(state),
    }
}

fn press_operator(
    state: &CalculatorState,
    operator: Operator,
) -> Result<CalculatorState, CalculatorError> {
    if state.last_action_was_operator {
        return Err(CalculatorError::ConsecutiveOperator(operator));
    }
    if state.pending_operator.is_some() {
        return Ok(stage_operator(&calculate(state), operator));
    }
    Ok(stage_operator(state, operator))
}

fn press_equals(state: &CalculatorState) -> Result<CalculatorState, CalculatorError> {
    if state.pending_operator.is_none() && !state.last_action_was_equals {
        // Finalize the value typed so far.
        if state.display.is_empty() {
            return Err(CalculatorError::IllegalStartEquals);
        }
        return Ok(CalculatorState {
            display: state.accumulated_result.to_string(),
            last_action_was_equals: true,
            ..state.clone()
        });
    }
    if state.last_action_was_operator {
        return Err(CalculatorError::IncompleteOperation);
    }
    if state.last_action_was_equals {
        return Ok(CalculatorState {
            last_action_was_equals: true,
            last_action_was_operator: false,
            ..state.clone()
        });
    }
    Ok(CalculatorState {
        last_action_was_equals: true,
        ..calculate(state)
    })
}

/// Combine with the typed operand and drop the operator.
fn calculate(state: &CalculatorState) -> CalculatorState {
    let result = evaluate(state, state.pending_operand);
    CalculatorState {
        pending_operator: None,
        last_action_was_equals: false,
        last_action_was_operator: false,
        ..commit_result(state, result)
    }
}
