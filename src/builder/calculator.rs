//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::core::{is_valid_operand_limit, CalculatorState, OPERAND_LIMIT};
use crate::policy::Policy;
use crate::session::Calculator;
use tracing::warn;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::CalculatorBuilder;
/// use keycalc::policy::Policy;
///
/// let calculator = CalculatorBuilder::new()
///     .policy(Policy::Extended)
///     .operand_limit(9999)
///     .build()
///     .unwrap();
///
/// assert!(calculator.feed("99999").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    policy: Option<Policy>,
    operand_limit: Option<i64>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            policy: None,
            operand_limit: None,
        }
    }

    /// Start from a configuration document.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            policy: Some(config.policy),
            operand_limit: Some(config.operand_limit),
        }
    }

    /// Set the input policy (required).
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the operand limit (optional, defaults to [`OPERAND_LIMIT`]).
    pub fn operand_limit(mut self, limit: i64) -> Self {
        self.operand_limit = Some(limit);
        self
    }

    /// Build the calculator.
    /// Returns an error if the policy is missing or the limit is out of range.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let policy = self.policy.ok_or(BuildError::MissingPolicy)?;
        let limit = self.operand_limit.unwrap_or(OPERAND_LIMIT);

        if !is_valid_operand_limit(limit) {
            warn!(limit, "rejecting operand limit outside the 32-bit range");
            return Err(BuildError::InvalidOperandLimit { limit });
        }

        Ok(Calculator::from_state(
            policy,
            CalculatorState::with_limit(limit),
        ))
    }
}
