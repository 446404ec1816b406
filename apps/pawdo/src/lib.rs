//! A terminal to-do list.
//!
//! The list lives in a [`TodoStore`]: add a task, tick it off, delete it.
//! Commands that would change nothing (blank text, unknown ids) are silently
//! ignored and leave the list untouched. The newest task is always first.
//!
//! The screen on top of the store is a single ratatui view with a text field,
//! an add button and one row per task, drawn over a dimmed cat.
//!
//! # Quick Start
//!
//! ```
//! use pawdo::{TodoList, todo_store};
//! use pawdo_core::environment::SequentialIds;
//! use std::sync::Arc;
//!
//! let mut store = todo_store(Arc::new(SequentialIds::new()));
//!
//! assert!(store.add("  Buy milk ").is_applied());
//! assert!(store.add("   ").is_noop());
//!
//! let id = store.list()[0].id;
//! assert!(store.toggle(id, true).is_applied());
//!
//! let items = store.list();
//! assert_eq!(items[0].title, "Buy milk");
//! assert!(items[0].done);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod reducer;
pub mod screen;
pub mod terminal;
pub mod todo_list;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use screen::{Focus, ScreenEvent, ScreenState};
pub use todo_list::{TodoList, TodoStore, todo_store};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
