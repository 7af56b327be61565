//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Policy not specified. Call .policy(policy) before .build()")]
    MissingPolicy,

    #[error("Operand limit {limit} is outside 1..=2147483647")]
    InvalidOperandLimit { limit: i64 },

    #[error("Invalid calculator configuration: {0}")]
    InvalidConfig(String),
}
