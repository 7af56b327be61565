//! Serializable calculator configuration.

use crate::builder::error::BuildError;
use crate::core::OPERAND_LIMIT;
use crate::policy::Policy;
use serde::{Deserialize, Serialize};

fn default_operand_limit() -> i64 {
    OPERAND_LIMIT
}

/// Settings a host can load to configure a calculator.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::CalculatorConfig;
/// use keycalc::policy::Policy;
///
/// let config = CalculatorConfig::from_json(r#"{ "policy": "extended" }"#).unwrap();
/// assert_eq!(config.policy, Policy::Extended);
/// assert_eq!(config.operand_limit, 2147483647);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub policy: Policy,

    #[serde(default = "default_operand_limit")]
    pub operand_limit: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            operand_limit: OPERAND_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Render this configuration as JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}
