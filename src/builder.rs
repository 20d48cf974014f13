//! Builder for constructing selector contexts.

use crate::announce::{Announcer, Console};
use crate::context::InputContext;
use crate::core::Input;

/// Builder for constructing an [`InputContext`] with a fluent API.
///
/// Every field has a default, so `build` cannot fail.
///
/// # Example
///
/// ```
/// use input_selector::builder::InputContextBuilder;
/// use input_selector::core::Input;
///
/// let mut context = InputContextBuilder::new()
///     .initial(Input::Rca)
///     .announcer(Vec::<String>::new())
///     .build();
///
/// context.advance();
/// assert_eq!(context.current_state(), Input::Usb);
/// assert_eq!(context.announcer()[0], "Switching input to USB...");
/// ```
#[derive(Debug, Clone)]
pub struct InputContextBuilder<A: Announcer = Console> {
    initial: Input,
    announcer: A,
}

impl InputContextBuilder<Console> {
    /// Create a builder for a console context starting on Bluetooth.
    pub fn new() -> Self {
        Self {
            initial: Input::default(),
            announcer: Console,
        }
    }
}

impl Default for InputContextBuilder<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Announcer> InputContextBuilder<A> {
    /// Set the input the context starts on.
    pub fn initial(mut self, input: Input) -> Self {
        self.initial = input;
        self
    }

    /// Replace the announcement sink.
    pub fn announcer<B: Announcer>(self, announcer: B) -> InputContextBuilder<B> {
        InputContextBuilder {
            initial: self.initial,
            announcer,
        }
    }

    /// Build the context.
    pub fn build(self) -> InputContext<A> {
        InputContext::from_parts(self.initial, self.announcer)
    }
}
