//! Input switch history tracking.
//!
//! Provides immutable tracking of the switches a selector has made,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single switch.
///
/// # Example
///
/// ```rust
/// use input_selector::core::{Input, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Input::Bluetooth,
///     to: Input::Optical,
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.to, Input::Optical);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being switched away from
    pub from: S,
    /// The state being switched to
    pub to: S,
    /// When the switch occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based position of this switch within its history
    pub sequence: usize,
}

/// Ordered history of switches.
///
/// History is immutable - `record` returns a new history with the
/// transition added.
///
/// # Example
///
/// ```rust
/// use input_selector::core::{Input, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Input::Bluetooth,
///         to: Input::Optical,
///         timestamp: Utc::now(),
///         sequence: 1,
///     })
///     .record(StateTransition {
///         from: Input::Optical,
///         to: Input::Coaxial,
///         timestamp: Utc::now(),
///         sequence: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Input::Bluetooth, &Input::Optical, &Input::Coaxial]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Sequence number the next recorded transition should carry.
    pub fn next_sequence(&self) -> usize {
        self.transitions.len() + 1
    }

    /// Get the path of states traversed.
    ///
    /// Returns the starting state followed by the `to` state of each
    /// transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded switch.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
