//! Core selector types and logic.
//!
//! This module contains the pure functional core of the selector:
//! - State definitions via the `State` trait
//! - The five audio inputs and their fixed cycle
//! - Immutable switch history
//!
//! Nothing in this module performs I/O.

mod history;
mod input;
mod state;

pub use history::{StateHistory, StateTransition};
pub use input::{Input, ParseInputError};
pub use state::State;
