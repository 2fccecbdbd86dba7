//! The `State` trait shared by every state variant in the crate.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A behavioural mode of an entity.
///
/// Exactly one state is current per entity. Implementors are plain value
/// enums; all methods are pure. Use [`state_enum!`](crate::state_enum) to
/// derive an implementation for a fieldless enum.
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Player {
///     Playing,
///     Paused,
///     Stopped,
/// }
///
/// impl State for Player {
///     fn name(&self) -> &str {
///         match self {
///             Self::Playing => "Playing",
///             Self::Paused => "Paused",
///             Self::Stopped => "Stopped",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Stopped)
///     }
/// }
///
/// assert!(Player::Stopped.is_final());
/// assert!(!Player::Paused.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Display name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Terminal states have no outgoing transitions.
    fn is_final(&self) -> bool {
        false
    }

    /// Error states flag a restricted or failed mode. They need not be final.
    fn is_error(&self) -> bool {
        false
    }
}
