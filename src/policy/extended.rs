//! Forgiving policy modeled on a consumer desktop calculator.
//!
//! The pending operator survives `=`, and `last_operand` remembers the
//! second operand of the last calculation, so that:
//!
//! - `=` right after an operator uses the running total as the operand
//!   (`5*=` gives `25`)
//! - repeated `=` re-applies the last operation (`9-2===` gives `3`)
//! - an operator right after `=` followed by `=` reuses the total
//!   (`2+3=+=` gives `10`)
//! - a second operator in a row replaces the first

use super::enter_digit;
use crate::core::primitives::{commit_result, evaluate, stage_operator};
use crate::core::{CalculatorError, CalculatorState, Key, Operator};

pub(super) fn apply(state: &CalculatorState, key: Key) -> Result<CalculatorState, CalculatorError> {
    match key {
        Key::Clear => Ok(state.cleared()),
        Key::Equals => press_equals(state),
        Key::Operator(operator) if state.display.is_empty() && operator.is_illegal_start() => {
            Err(CalculatorError::IllegalStartOperator(operator))
        }
        Key::Digit(digit) => enter_digit(state, digit),
        Key::Operator(operator) => Ok(press_operator(state, operator)),
    }
}

fn press_equals(state: &CalculatorState) -> Result<CalculatorState, CalculatorError> {
    if state.display.is_empty() && state.accumulated_result == 0 {
        return Err(CalculatorError::IllegalStartEquals);
    }
    Ok(calculate(state))
}

fn press_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    if state.last_action_was_equals {
        // Commit the result and remember it for a following `=`.
        let committed = CalculatorState {
            last_operand: state.accumulated_result,
            ..commit_result(state, state.accumulated_result)
        };
        return stage_operator(&committed, operator);
    }
    if state.display.is_empty() {
        return CalculatorState {
            last_action_was_equals: false,
            last_action_was_operator: false,
            ..state.clone()
        };
    }
    if state.last_action_was_operator {
        return replace_operator(state, operator);
    }
    if state.pending_operator.is_some() {
        return stage_operator(&calculate(state), operator);
    }
    stage_operator(state, operator)
}

/// Swap the trailing operator symbol; no arithmetic is performed.
fn replace_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    let mut kept = state.display.chars();
    kept.next_back();
    CalculatorState {
        pending_operator: Some(operator),
        display: format!("{}{}", kept.as_str(), operator.symbol()),
        last_action_was_operator: true,
        ..state.clone()
    }
}

/// Operand for the next calculation.
///
/// Right after an operator the running total operates on itself; right
/// after `=` the remembered operand is reused; otherwise the typed operand.
fn select_operand(state: &CalculatorState) -> i64 {
    if state.last_action_was_operator {
        state.accumulated_result
    } else if state.last_action_was_equals {
        state.last_operand
    } else {
        state.pending_operand
    }
}

/// Combine with the selected operand. The operator is kept for repetition.
fn calculate(state: &CalculatorState) -> CalculatorState {
    let operand = select_operand(state);
    let result = evaluate(state, operand);
    CalculatorState {
        last_operand: operand,
        last_action_was_equals: true,
        last_action_was_operator: false,
        ..commit_result(state, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(symbols: &str) -> Result<CalculatorState, CalculatorError> {
        symbols
            .chars()
            .try_fold(CalculatorState::new(), |state, symbol| {
                let key = Key::parse(symbol)?;
                apply(&state, key)
            })
    }

    fn display(symbols: &str) -> String {
        run(symbols).unwrap().display().to_string()
    }

    #[test]
    fn operator_after_operator_replaces_it() {
        assert_eq!(display("2+"), "2+");
        assert_eq!(display("2+*"), "2*");
        assert_eq!(run("2+*").unwrap().pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn equals_after_operator_self_operates() {
        assert_eq!(display("32+="), "64");
        assert_eq!(display("24*="), "576");
        assert_eq!(display("24-="), "0");
    }

    #[test]
    fn repeated_equals_repeats_last_operation() {
        let mut state = run("9-2=").unwrap();
        assert_eq!(state.display(), "7");

        for expected in ["5", "3", "1", "-1"] {
            state = apply(&state, Key::Equals).unwrap();
            assert_eq!(state.display(), expected);
        }
        assert_eq!(state.last_operand(), 2);
    }

    #[test]
    fn operator_after_equals_remembers_total() {
        let state = run("7+2=+").unwrap();
        assert_eq!(state.display(), "9+");
        assert_eq!(state.last_operand(), 9);
        assert!(state.last_action_was_operator());
        assert_eq!(display("7+2=+="), "18");
    }

    #[test]
    fn operator_on_empty_display_is_ignored() {
        let state = run("+++").unwrap();
        assert_eq!(state, CalculatorState::new());
        assert_eq!(display("+32"), "32");
    }

    #[test]
    fn illegal_start_still_rejected() {
        assert_eq!(
            run("+-"),
            Err(CalculatorError::IllegalStartOperator(Operator::Subtract))
        );
        assert_eq!(
            run("*"),
            Err(CalculatorError::IllegalStartOperator(Operator::Multiply))
        );
    }

    #[test]
    fn equals_at_start_is_illegal() {
        assert_eq!(run("="), Err(CalculatorError::IllegalStartEquals));
        assert_eq!(run("+="), Err(CalculatorError::IllegalStartEquals));
    }

    #[test]
    fn chained_operator_calculates_then_stages() {
        let state = run("8*4-").unwrap();
        assert_eq!(state.display(), "32-");
        assert_eq!(state.accumulated_result(), 32);
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
        assert_eq!(state.last_operand(), 4);
    }

    #[test]
    fn calculation_keeps_operator() {
        let state = run("7+2=").unwrap();
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert_eq!(state.last_operand(), 2);
    }
}
