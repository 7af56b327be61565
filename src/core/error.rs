//! Keystroke rejection errors.

use super::key::Operator;
use thiserror::Error;

/// Reasons a keystroke is rejected.
///
/// A rejected keystroke never produces a state; the caller keeps whatever
/// state it held before the call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid input: {0:?}")]
    InvalidCharacter(char),

    #[error("Operation cannot start with '{0}'")]
    IllegalStartOperator(Operator),

    #[error("Operation cannot start with '='")]
    IllegalStartEquals,

    #[error("Operand exceeds maximum limit ({limit})")]
    OperandOverflow { limit: i64 },

    #[error("Cannot input two operators in a row (got '{0}')")]
    ConsecutiveOperator(Operator),

    #[error("Incomplete operation: '=' pressed before an operand was entered")]
    IncompleteOperation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_key() {
        assert_eq!(
            CalculatorError::InvalidCharacter('/').to_string(),
            "Invalid input: '/'"
        );
        assert_eq!(
            CalculatorError::IllegalStartOperator(Operator::Multiply).to_string(),
            "Operation cannot start with '*'"
        );
        assert_eq!(
            CalculatorError::ConsecutiveOperator(Operator::Add).to_string(),
            "Cannot input two operators in a row (got '+')"
        );
    }

    #[test]
    fn overflow_message_includes_limit() {
        let error = CalculatorError::OperandOverflow { limit: 2147483647 };
        assert!(error.to_string().contains("2147483647"));
    }
}
