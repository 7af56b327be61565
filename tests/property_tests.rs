//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated keystroke sequences.

use keycalc::core::Phase;
use keycalc::{
    Calculator, CalculatorBuilder, CalculatorError, CalculatorState, Policy, OPERAND_LIMIT,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_policy()(extended in any::<bool>()) -> Policy {
        if extended {
            Policy::Extended
        } else {
            Policy::Basic
        }
    }
}

prop_compose! {
    fn arbitrary_operand()(value in 0..=OPERAND_LIMIT) -> i64 {
        value
    }
}

prop_compose! {
    fn arbitrary_symbols()(
        symbols in prop::collection::vec(
            prop::sample::select(vec!['0', '1', '5', '9', '+', '-', '*', '=', 'C']),
            0..24,
        )
    ) -> Vec<char> {
        symbols
    }
}

/// Feed every symbol, skipping the ones that are rejected.
fn feed_lenient(policy: Policy, symbols: &[char]) -> Calculator {
    symbols
        .iter()
        .fold(Calculator::new(policy), |calculator, symbol| {
            calculator.input(*symbol).unwrap_or(calculator)
        })
}

fn clamped(raw: i64) -> i64 {
    if raw > OPERAND_LIMIT || raw < -OPERAND_LIMIT - 1 {
        0
    } else {
        raw
    }
}

proptest! {
    #[test]
    fn typed_values_within_limit_are_accepted(
        policy in arbitrary_policy(),
        value in arbitrary_operand(),
    ) {
        let calculator = Calculator::new(policy).feed(&value.to_string()).unwrap();
        prop_assert_eq!(calculator.result(), value.to_string());
        prop_assert_eq!(calculator.state().accumulated_result(), value);
    }

    #[test]
    fn typed_values_past_limit_are_rejected(
        policy in arbitrary_policy(),
        value in (OPERAND_LIMIT + 1)..=9_999_999_999i64,
    ) {
        let result = Calculator::new(policy).feed(&value.to_string());
        prop_assert_eq!(
            result,
            Err(CalculatorError::OperandOverflow { limit: OPERAND_LIMIT })
        );
    }

    #[test]
    fn calculation_overflow_clamps_to_zero(
        policy in arbitrary_policy(),
        lhs in arbitrary_operand(),
        rhs in arbitrary_operand(),
    ) {
        for (symbol, raw) in [('+', lhs + rhs), ('-', lhs - rhs), ('*', lhs * rhs)] {
            let script = format!("{lhs}{symbol}{rhs}=");
            let calculator = Calculator::new(policy).feed(&script).unwrap();
            let expected = clamped(raw);
            prop_assert_eq!(calculator.state().accumulated_result(), expected);
            prop_assert_eq!(calculator.result(), expected.to_string());
        }
    }

    #[test]
    fn basic_repeated_equals_is_idempotent(
        lhs in 0..100_000i64,
        rhs in 0..100_000i64,
        repeats in 1..8usize,
    ) {
        let script = format!("{lhs}+{rhs}=");
        let once = Calculator::new(Policy::Basic).feed(&script).unwrap();
        let again = once.feed(&"=".repeat(repeats)).unwrap();
        prop_assert_eq!(once.result(), again.result());
    }

    #[test]
    fn extended_repeated_equals_is_arithmetic_progression(
        lhs in 0..100_000i64,
        rhs in 0..100_000i64,
        repeats in 0..8usize,
    ) {
        let script = format!("{lhs}-{rhs}={}", "=".repeat(repeats));
        let calculator = Calculator::new(Policy::Extended).feed(&script).unwrap();
        let expected = lhs - rhs * (repeats as i64 + 1);
        prop_assert_eq!(calculator.result(), expected.to_string());
    }

    #[test]
    fn clear_always_yields_fresh_state(
        policy in arbitrary_policy(),
        symbols in arbitrary_symbols(),
    ) {
        let calculator = feed_lenient(policy, &symbols).input('C').unwrap();
        prop_assert_eq!(calculator.state(), &CalculatorState::new());
        prop_assert_eq!(calculator.result(), "");
        prop_assert_eq!(calculator.input('='), Err(CalculatorError::IllegalStartEquals));
    }

    #[test]
    fn rejected_input_leaves_calculator_unchanged(
        policy in arbitrary_policy(),
        symbols in arbitrary_symbols(),
        next_symbol in prop::sample::select(vec!['0', '7', '+', '-', '*', '=', '/', 'c']),
    ) {
        let calculator = feed_lenient(policy, &symbols);
        let snapshot = calculator.clone();
        if calculator.input(next_symbol).is_err() {
            prop_assert_eq!(&calculator, &snapshot);
        }
    }

    #[test]
    fn typed_magnitudes_never_exceed_limit(
        policy in arbitrary_policy(),
        symbols in arbitrary_symbols(),
    ) {
        let mut calculator = Calculator::new(policy);
        for symbol in symbols {
            if let Ok(next) = calculator.input(symbol) {
                calculator = next;
            }
            let state = calculator.state();
            prop_assert!(state.pending_operand().abs() <= OPERAND_LIMIT);
            prop_assert!(state.accumulated_result() <= OPERAND_LIMIT);
            prop_assert!(state.accumulated_result() >= -OPERAND_LIMIT - 1);
        }
    }

    #[test]
    fn tape_replay_matches_display(
        policy in arbitrary_policy(),
        symbols in arbitrary_symbols(),
    ) {
        let calculator = feed_lenient(policy, &symbols);
        let replayed = calculator.tape().replay(policy).unwrap();
        prop_assert_eq!(&replayed, calculator.state());
        let final_phase = calculator
            .tape()
            .get_path()
            .last()
            .copied()
            .unwrap_or(Phase::Idle);
        prop_assert_eq!(final_phase, calculator.phase());
    }

    #[test]
    fn tape_replay_keeps_configured_limit(
        policy in arbitrary_policy(),
        limit in 1..=1_000i64,
        symbols in arbitrary_symbols(),
    ) {
        let start = CalculatorBuilder::new()
            .policy(policy)
            .operand_limit(limit)
            .build()
            .unwrap();
        let calculator = symbols
            .iter()
            .fold(start, |calculator, symbol| {
                calculator.input(*symbol).unwrap_or(calculator)
            });

        let replayed = calculator.tape().replay(policy).unwrap();
        prop_assert_eq!(replayed.operand_limit(), limit);
        prop_assert_eq!(&replayed, calculator.state());
    }
}
