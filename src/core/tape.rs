//! Keystroke tape.
//!
//! Provides immutable tracking of accepted keystrokes over time, like the
//! paper roll of a desk calculator. Rejected keystrokes never reach the tape.

use super::error::CalculatorError;
use super::key::Key;
use super::state::{is_valid_operand_limit, CalculatorState, Phase, OPERAND_LIMIT};
use crate::policy::{self, Policy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted keystroke.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Key, Phase, TapeEntry};
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     key: Key::Digit(4),
///     from: Phase::Idle,
///     to: Phase::EnteringValue,
///     display: "4".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The keystroke that was accepted
    pub key: Key,
    /// Phase before the keystroke
    pub from: Phase,
    /// Phase after the keystroke
    pub to: Phase,
    /// Display text after the keystroke
    pub display: String,
    /// When the keystroke was accepted
    pub timestamp: DateTime<Utc>,
}

/// Ordered tape of accepted keystrokes.
///
/// The tape is immutable - `record` returns a new tape with the entry
/// added.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Key, Phase, Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::new();
/// let tape = tape.record(TapeEntry {
///     key: Key::Digit(9),
///     from: Phase::Idle,
///     to: Phase::EnteringValue,
///     display: "9".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.keys(), "9");
/// assert_eq!(tape.get_path(), vec![Phase::Idle, Phase::EnteringValue]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TapeRecord")]
pub struct Tape {
    entries: Vec<TapeEntry>,
    /// Limit of the state the first entry was applied to.
    operand_limit: i64,
}

/// Unchecked wire form of a [`Tape`].
#[derive(Deserialize)]
struct TapeRecord {
    entries: Vec<TapeEntry>,
    operand_limit: i64,
}

impl TryFrom<TapeRecord> for Tape {
    type Error = String;

    fn try_from(record: TapeRecord) -> Result<Self, Self::Error> {
        if !is_valid_operand_limit(record.operand_limit) {
            return Err(format!(
                "operand limit {} is outside 1..={}",
                record.operand_limit, OPERAND_LIMIT
            ));
        }
        Ok(Self {
            entries: record.entries,
            operand_limit: record.operand_limit,
        })
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create a new empty tape for a calculator with the default limit.
    pub fn new() -> Self {
        Self::with_limit(OPERAND_LIMIT)
    }

    /// Create a new empty tape for a calculator starting from a state
    /// bounded by `operand_limit`.
    pub(crate) fn with_limit(operand_limit: i64) -> Self {
        Self {
            entries: Vec::new(),
            operand_limit,
        }
    }

    /// Operand limit replay starts from.
    pub fn operand_limit(&self) -> i64 {
        self.operand_limit
    }

    /// Record an entry, returning a new tape.
    ///
    /// This does not mutate the existing tape.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self {
            entries,
            operand_limit: self.operand_limit,
        }
    }

    /// Get all entries in the order they were accepted.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The accepted keystrokes as text.
    pub fn keys(&self) -> String {
        self.entries.iter().map(|entry| entry.key.symbol()).collect()
    }

    /// Get the phases traversed: the first entry's `from`, then every `to`.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }

    /// Time between the first and last accepted keystroke.
    ///
    /// Returns `None` for an empty tape.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Re-run the recorded keystrokes from a fresh state under `policy`.
    ///
    /// The fresh state carries the tape's operand limit, so a tape replayed
    /// under the policy it was recorded with reproduces the recorded state.
    /// Replaying under the other policy may be rejected.
    pub fn replay(&self, policy: Policy) -> Result<CalculatorState, CalculatorError> {
        let initial = CalculatorState::with_limit(self.operand_limit);
        self.entries.iter().try_fold(initial, |state, entry| {
            policy::apply_key(&state, entry.key, policy)
        })
    }
}
