//! The selector context: owns the current input and steps it around the cycle.

use crate::announce::{Announcer, Console};
use crate::core::{Input, State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::debug;

/// Holds the currently selected input and switches it on request.
///
/// A fresh context always starts on [`Input::Bluetooth`].
#[derive(Debug, Clone)]
pub struct InputContext<A: Announcer = Console> {
    current: Input,
    announcer: A,
    history: StateHistory<Input>,
}

impl InputContext<Console> {
    /// Create a context on Bluetooth that announces to standard output.
    pub fn new() -> Self {
        Self::with_announcer(Console)
    }
}

impl Default for InputContext<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Announcer> InputContext<A> {
    /// Create a context on Bluetooth that announces to `announcer`.
    pub fn with_announcer(announcer: A) -> Self {
        Self::from_parts(Input::default(), announcer)
    }

    pub(crate) fn from_parts(initial: Input, announcer: A) -> Self {
        Self {
            current: initial,
            announcer,
            history: StateHistory::new(),
        }
    }

    /// Get current input (pure)
    pub fn current_state(&self) -> Input {
        self.current
    }

    /// Replace the current input without announcing or recording it.
    pub fn set_state(&mut self, input: Input) {
        self.current = input;
    }

    /// Switch to the next input in the cycle and announce it.
    pub fn advance(&mut self) {
        let from = self.current;
        let to = from.successor();
        let sequence = self.history.next_sequence();

        debug!(from = %from, to = %to, sequence, "switching input");

        self.history.push(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence,
        });
        self.current = to;
        self.announcer.announce(&to.message());
    }

    /// Switches made by [`advance`](Self::advance), oldest first.
    pub fn history(&self) -> &StateHistory<Input> {
        &self.history
    }

    /// The sink receiving switch announcements.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Consume the context, handing back its announcer.
    ///
    /// ```
    /// use input_selector::InputContext;
    ///
    /// let mut context = InputContext::with_announcer(Vec::<String>::new());
    /// context.advance();
    /// assert_eq!(context.into_announcer(), vec!["Switching input to Optical..."]);
    /// ```
    pub fn into_announcer(self) -> A {
        self.announcer
    }
}
