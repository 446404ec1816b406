//! Domain types for the to-do list.
//!
//! A to-do list is a flat, newest-first collection of independent items that
//! can be added, toggled, and deleted. Nothing else.

use serde::{Deserialize, Serialize};

/// Unique identifier for a to-do item
///
/// Assigned once by the store's id generator and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw id value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is done
    pub done: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-done item
    #[must_use]
    pub const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }
}

/// State of the to-do list
///
/// Items are kept newest first. The only mutations are the ones the reducer
/// performs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    pub(crate) items: Vec<TodoItem>,
}

impl TodoState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items, newest first
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items marked done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Looks an item up by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Commands accepted by the to-do reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Add a task from raw user input (trimmed; blank input is ignored)
    Add {
        /// Text as typed
        text: String,
    },

    /// Set the done flag of an item
    Toggle {
        /// Item to update
        id: TodoId,
        /// New value of the done flag
        done: bool,
    },

    /// Remove an item
    Delete {
        /// Item to remove
        id: TodoId,
    },
}
