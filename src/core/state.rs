//! Core State trait for selector states.
//!
//! Every state type implements this trait, which provides pure methods
//! for inspecting a state and finding the one that follows it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for cyclic selector states.
///
/// All methods are pure. A state is an immutable value; the only thing it
/// knows about the machine it lives in is which state comes next.
///
/// # Required Traits
///
/// - `Copy`: states are plain tags with no owned data
/// - `PartialEq`: states must be comparable for history and tests
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states can be dumped alongside history
///
/// # Example
///
/// ```rust
/// use input_selector::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Power {
///     On,
///     Off,
/// }
///
/// impl State for Power {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
///
///     fn successor(&self) -> Self {
///         match self {
///             Self::On => Self::Off,
///             Self::Off => Self::On,
///         }
///     }
/// }
///
/// assert_eq!(Power::On.successor().successor(), Power::On);
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// The state that follows this one.
    ///
    /// Implementations must be total: every state has exactly one successor.
    fn successor(&self) -> Self;
}
