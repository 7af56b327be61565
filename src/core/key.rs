//! Keystroke classification.
//!
//! Every input symbol is turned into a [`Key`] before any transition runs,
//! so the policies only ever see well-formed keystrokes.

use super::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators the calculator can stage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    /// The keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
        }
    }

    /// Look up the operator bound to a keypad symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            _ => None,
        }
    }

    /// Whether this operator may not open a fresh session.
    ///
    /// Only `+` can be pressed on an empty display; `-` and `*` have no
    /// left-hand side to work with.
    pub fn is_illegal_start(self) -> bool {
        matches!(self, Self::Subtract | Self::Multiply)
    }

    /// Combine two values, returning `None` if `i64` itself overflows.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single classified keystroke.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Key, Operator};
///
/// assert_eq!(Key::parse('7').unwrap(), Key::Digit(7));
/// assert_eq!(Key::parse('*').unwrap(), Key::Operator(Operator::Multiply));
/// assert!(Key::parse('c').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A decimal digit, `0..=9`
    Digit(u8),
    /// One of `+`, `-`, `*`
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl Key {
    /// Classify an input symbol.
    ///
    /// Only uppercase `C` clears; any symbol outside `0-9 + - * = C` is
    /// rejected with [`CalculatorError::InvalidCharacter`].
    pub fn parse(symbol: char) -> Result<Self, CalculatorError> {
        if let Some(digit) = symbol.to_digit(10) {
            // to_digit(10) is at most 9
            return Ok(Self::Digit(digit as u8));
        }
        if let Some(operator) = Operator::from_symbol(symbol) {
            return Ok(Self::Operator(operator));
        }
        match symbol {
            '=' => Ok(Self::Equals),
            'C' => Ok(Self::Clear),
            other => Err(CalculatorError::InvalidCharacter(other)),
        }
    }

    /// The symbol that produces this key.
    pub fn symbol(self) -> char {
        match self {
            Self::Digit(digit) => char::from(b'0' + digit),
            Self::Operator(operator) => operator.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

impl TryFrom<char> for Key {
    type Error = CalculatorError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::parse(symbol)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
