//! The to-do list store and its named operations.
//!
//! [`TodoStore`] is the generic [`Store`] specialised to the to-do reducer.
//! [`TodoList`] gives it the vocabulary the screen speaks: `add`, `toggle`,
//! `delete` and `list`.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use pawdo_core::environment::IdGenerator;
use pawdo_core::outcome::Outcome;
use pawdo_runtime::Store;
use std::sync::Arc;

/// Store owning the to-do list
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Creates an empty to-do store drawing ids from `ids`
#[must_use]
pub fn todo_store(ids: Arc<dyn IdGenerator>) -> TodoStore {
    Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment::new(ids))
}

/// Mutation and read surface of the to-do list
pub trait TodoList {
    /// Adds a task from raw input; blank input is a no-op
    fn add(&mut self, raw_text: &str) -> Outcome;

    /// Sets the done flag of `id`; unknown ids are a no-op
    fn toggle(&mut self, id: TodoId, done: bool) -> Outcome;

    /// Removes `id`; unknown ids are a no-op
    fn delete(&mut self, id: TodoId) -> Outcome;

    /// Snapshot of the items, newest first
    fn list(&self) -> Vec<TodoItem>;
}

impl TodoList for TodoStore {
    fn add(&mut self, raw_text: &str) -> Outcome {
        self.send(TodoAction::Add {
            text: raw_text.to_string(),
        })
    }

    fn toggle(&mut self, id: TodoId, done: bool) -> Outcome {
        self.send(TodoAction::Toggle { id, done })
    }

    fn delete(&mut self, id: TodoId) -> Outcome {
        self.send(TodoAction::Delete { id })
    }

    fn list(&self) -> Vec<TodoItem> {
        self.state(|s| s.items().to_vec())
    }
}
