//! Flat action identifiers.
//!
//! Every action of a game is a dense integer in `[0, num_distinct_actions)`.
//! Games map these ids onto structured moves; the engine only stores and
//! compares them.

use serde::{Deserialize, Serialize};

/// A dense action identifier.
///
/// ## Example
///
/// ```
/// use abalone_engine::core::ActionId;
///
/// let action = ActionId::new(1260);
/// assert_eq!(action.index(), 1260);
/// assert_eq!(action.to_string(), "1260");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u32);

impl ActionId {
    /// Create a new action ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as an index into a policy vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every id of an action space of the given size.
    pub fn all(num_actions: usize) -> impl Iterator<Item = ActionId> {
        (0..num_actions as u32).map(ActionId)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
