//! Builder API for constructing calculators.
//!
//! This module provides a fluent builder, a serializable configuration and
//! shortcuts for the two stock policies.

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use error::BuildError;

use crate::policy::Policy;
use crate::session::Calculator;

/// Create a strict calculator with the default operand limit.
///
/// # Example
///
/// ```
/// use keycalc::builder::basic;
///
/// assert!(basic().feed("5-+").is_err());
/// ```
pub fn basic() -> Calculator {
    Calculator::new(Policy::Basic)
}

/// Create a forgiving calculator with the default operand limit.
///
/// # Example
///
/// ```
/// use keycalc::builder::extended;
///
/// let calculator = extended().feed("5-+").unwrap();
/// assert_eq!(calculator.result(), "5+");
/// ```
pub fn extended() -> Calculator {
    Calculator::new(Policy::Extended)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_pick_policy() {
        assert_eq!(basic().policy(), Policy::Basic);
        assert_eq!(extended().policy(), Policy::Extended);
    }

    #[test]
    fn shortcuts_match_builder() {
        let built = CalculatorBuilder::new()
            .policy(Policy::Extended)
            .build()
            .unwrap();
        assert_eq!(built, extended());
    }
}
