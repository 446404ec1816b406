//! Reducer logic for the to-do list.
//!
//! Every command either applies or degrades to a silent no-op. There is no
//! error path: blank titles and unknown ids are simply ignored.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use pawdo_core::{environment::IdGenerator, outcome::Outcome, reducer::Reducer};
use std::sync::Arc;

/// Environment dependencies for the to-do reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the to-do list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut TodoState, text: &str, env: &TodoEnvironment) -> Outcome {
        let title = text.trim();
        if title.is_empty() {
            tracing::trace!("Ignoring blank title");
            return Outcome::NoOp;
        }

        let Some(raw) = env.ids.next_id() else {
            tracing::warn!(title, "No ids left, ignoring new item");
            return Outcome::NoOp;
        };

        let id = TodoId::new(raw);
        tracing::debug!(%id, title, "Adding item");
        state.items.insert(0, TodoItem::new(id, title.to_string()));
        Outcome::Applied
    }

    fn toggle(state: &mut TodoState, id: TodoId, done: bool) -> Outcome {
        let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
            tracing::trace!(%id, "Ignoring toggle of unknown item");
            return Outcome::NoOp;
        };

        tracing::debug!(%id, done, "Toggling item");
        item.done = done;
        Outcome::Applied
    }

    fn delete(state: &mut TodoState, id: TodoId) -> Outcome {
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        let removed = before - state.items.len();

        if removed == 0 {
            tracing::trace!(%id, "Ignoring delete of unknown item");
        } else {
            tracing::debug!(%id, "Deleted item");
        }
        Outcome::from_applied(removed > 0)
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Outcome {
        match action {
            TodoAction::Add { text } => Self::add(state, &text, env),
            TodoAction::Toggle { id, done } => Self::toggle(state, id, done),
            TodoAction::Delete { id } => Self::delete(state, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawdo_core::environment::SequentialIds;
    use pawdo_testing::{ReducerTest, assertions};

    fn create_test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(SequentialIds::new()))
    }

    fn state_with(items: &[(u64, &str, bool)]) -> TodoState {
        TodoState {
            items: items
                .iter()
                .map(|&(id, title, done)| TodoItem {
                    id: TodoId::new(id),
                    title: title.to_string(),
                    done,
                })
                .collect(),
        }
    }

    #[test]
    fn test_add_buy_milk() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(
                    state.items(),
                    &[TodoItem::new(TodoId::new(1), "Buy milk".to_string())]
                );
            })
            .then_outcome(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_add_trims_title() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "  \tWater plants \n".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.items()[0].title, "Water plants");
            })
            .run();
    }

    #[test]
    fn test_add_blank_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "  ".to_string(),
            })
            .then_state(|state| {
                assert!(state.is_empty());
            })
            .then_outcome(assertions::assert_noop)
            .run();
    }

    #[test]
    fn test_add_with_exhausted_ids_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(TodoEnvironment::new(Arc::new(SequentialIds::starting_at(
                u64::MAX - 1,
            ))))
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "last one".to_string(),
            })
            .when_action(TodoAction::Add {
                text: "one too many".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.items()[0].id, TodoId::new(u64::MAX - 1));
                assert_eq!(state.items()[0].title, "last one");
            })
            .then_outcome(assertions::assert_noop)
            .run();
    }

    #[test]
    fn test_add_prepends_newest_first() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "A".to_string(),
            })
            .when_action(TodoAction::Add {
                text: "B".to_string(),
            })
            .then_state(|state| {
                let titles: Vec<_> = state.items().iter().map(|i| i.title.as_str()).collect();
                assert_eq!(titles, vec!["B", "A"]);
            })
            .run();
    }

    #[test]
    fn test_toggle_existing() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&[(2, "B", false), (1, "A", false)]))
            .when_action(TodoAction::Toggle {
                id: TodoId::new(1),
                done: true,
            })
            .then_state(|state| {
                assert_eq!(state, &state_with(&[(2, "B", false), (1, "A", true)]));
            })
            .then_outcome(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&[(1, "A", false)]))
            .when_action(TodoAction::Toggle {
                id: TodoId::new(99),
                done: true,
            })
            .then_state(|state| {
                assert_eq!(state, &state_with(&[(1, "A", false)]));
            })
            .then_outcome(assertions::assert_noop)
            .run();
    }

    #[test]
    fn test_delete_existing_keeps_order() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&[(3, "C", false), (2, "B", true), (1, "A", false)]))
            .when_action(TodoAction::Delete { id: TodoId::new(2) })
            .then_state(|state| {
                assert_eq!(state, &state_with(&[(3, "C", false), (1, "A", false)]));
            })
            .then_outcome(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_delete_removes_every_match() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&[(1, "dup", false), (2, "B", false), (1, "dup", true)]))
            .when_action(TodoAction::Delete { id: TodoId::new(1) })
            .then_state(|state| {
                assert_eq!(state, &state_with(&[(2, "B", false)]));
            })
            .run();
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&[(1, "A", false)]))
            .when_action(TodoAction::Delete { id: TodoId::new(5) })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
            })
            .then_outcome(assertions::assert_noop)
            .run();
    }
}
