//! Immutable calculator handle that records accepted keystrokes.

use crate::core::{CalculatorError, CalculatorState, Key, Phase, Tape, TapeEntry};
use crate::policy::{self, Policy};
use chrono::Utc;
use tracing::debug;

/// A calculator session.
///
/// Every call to [`Calculator::input`] returns a new handle; the receiver is
/// never modified, so a rejected keystroke leaves the caller's handle exactly
/// as it was.
///
/// # Example
///
/// ```rust
/// use keycalc::policy::Policy;
/// use keycalc::session::Calculator;
///
/// let calculator = Calculator::new(Policy::Basic);
/// let calculator = calculator.feed("13+12").unwrap();
/// assert_eq!(calculator.result(), "13+12");
///
/// let calculator = calculator.input('=').unwrap();
/// assert_eq!(calculator.result(), "25");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    policy: Policy,
    state: CalculatorState,
    tape: Tape,
}

impl Calculator {
    /// Create a calculator with an empty display.
    pub fn new(policy: Policy) -> Self {
        Self::from_state(policy, CalculatorState::new())
    }

    pub(crate) fn from_state(policy: Policy, state: CalculatorState) -> Self {
        let tape = Tape::with_limit(state.operand_limit());
        Self {
            policy,
            state,
            tape,
        }
    }

    /// Apply one input symbol, returning the updated calculator.
    pub fn input(&self, symbol: char) -> Result<Self, CalculatorError> {
        let from = self.state.phase();
        let key = Key::parse(symbol).inspect_err(|error| {
            debug!(policy = self.policy.name(), %symbol, %error, "rejected keystroke");
        })?;

        let state = policy::apply_key(&self.state, key, self.policy).inspect_err(|error| {
            debug!(
                policy = self.policy.name(),
                %key,
                from = from.name(),
                %error,
                "rejected keystroke"
            );
        })?;

        let to = state.phase();
        debug!(
            policy = self.policy.name(),
            %key,
            from = from.name(),
            to = to.name(),
            display = state.display(),
            "accepted keystroke"
        );

        let tape = self.tape.record(TapeEntry {
            key,
            from,
            to,
            display: state.display().to_string(),
            timestamp: Utc::now(),
        });

        Ok(Self {
            policy: self.policy,
            state,
            tape,
        })
    }

    /// Apply every symbol in order, stopping at the first rejection.
    pub fn feed(&self, symbols: &str) -> Result<Self, CalculatorError> {
        symbols
            .chars()
            .try_fold(self.clone(), |calculator, symbol| calculator.input(symbol))
    }

    /// The current display text, verbatim.
    pub fn result(&self) -> &str {
        self.state.display()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Accepted keystrokes since the handle was created.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}
