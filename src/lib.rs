//! Input Selector: an audio input switch modeled as a cyclic state machine
//!
//! The selector steps through a fixed ring of inputs, one per press of the
//! switch button. The core logic is a pure successor function over a closed
//! enum; the only side effect is the announcement emitted on each switch.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Input**: The five audio inputs and their fixed cycle
//! - **Context**: Holds the selected input and advances it
//! - **Announcer**: Where switch messages go (stdout, or captured)
//! - **History**: Immutable tracking of switches over time
//!
//! # Example
//!
//! ```rust
//! use input_selector::{Input, InputContext};
//!
//! let mut context = InputContext::with_announcer(Vec::<String>::new());
//! for _ in 0..5 {
//!     context.advance();
//! }
//!
//! assert_eq!(context.current_state(), Input::Bluetooth);
//! assert_eq!(context.history().len(), 5);
//! assert_eq!(context.announcer()[2], "Switching input to RCA...");
//! ```

pub mod announce;
pub mod builder;
pub mod context;
pub mod core;

// Re-export commonly used types
pub use announce::{Announcer, Console};
pub use builder::InputContextBuilder;
pub use context::InputContext;
pub use core::{Input, ParseInputError, State, StateHistory, StateTransition};
