//! Screen-local state and the event handler that drives the store.
//!
//! The input text, focus and selection belong to the screen, not the store.
//! Commands go to the store through [`TodoList`]; the returned
//! [`Outcome`](pawdo_core::outcome::Outcome) decides what happens to the
//! input field.

use crate::todo_list::TodoList;
use crate::types::TodoId;
use crate::ui::{HitMap, HitTarget};

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text field: typing edits the input
    #[default]
    Input,
    /// The list: keys select, toggle and delete rows
    List,
}

/// Everything the user can do on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Type a character into the input field, focusing it first
    Insert(char),
    /// Remove the last character of the input field
    Backspace,
    /// Press the add button
    Submit,
    /// Give focus to the input field
    FocusInput,
    /// Take focus away from the input field
    ReleaseFocus,
    /// Move the selection down
    SelectNext,
    /// Move the selection up
    SelectPrevious,
    /// Flip the done flag of the selected row
    ToggleSelected,
    /// Delete the selected row
    DeleteSelected,
    /// Left click at a terminal cell
    Click {
        /// Column of the cell
        column: u16,
        /// Row of the cell
        row: u16,
    },
    /// Leave the application
    Quit,
}

/// Screen-local state
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// Text typed so far
    pub input: String,
    /// Current focus
    pub focus: Focus,
    /// Index of the selected row
    pub selected: Option<usize>,
    /// Index of the first visible row
    pub scroll: usize,
    /// Clickable regions of the last frame
    pub hits: HitMap,
    quit: bool,
}

impl ScreenState {
    /// Fresh screen with an empty, focused input field
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user asked to leave
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a user event
    ///
    /// Returns `true` if screen-local state changed. Store changes are
    /// reported by the store's own subscribers.
    pub fn handle<L: TodoList>(&mut self, event: ScreenEvent, list: &mut L) -> bool {
        tracing::trace!(?event, focus = ?self.focus, "Screen event");
        match event {
            ScreenEvent::Insert(c) => {
                self.focus = Focus::Input;
                self.input.push(c);
                true
            }
            ScreenEvent::Backspace => self.input.pop().is_some(),
            ScreenEvent::Submit => self.submit(list),
            ScreenEvent::FocusInput => self.set_focus(Focus::Input),
            ScreenEvent::ReleaseFocus => self.set_focus(Focus::List),
            ScreenEvent::SelectNext => {
                let len = list.list().len();
                let next = match self.selected {
                    _ if len == 0 => None,
                    None => Some(0),
                    Some(i) => Some((i + 1).min(len - 1)),
                };
                self.select(next)
            }
            ScreenEvent::SelectPrevious => {
                let len = list.list().len();
                let previous = match self.selected {
                    _ if len == 0 => None,
                    None => Some(0),
                    Some(i) => Some(i.saturating_sub(1).min(len - 1)),
                };
                self.select(previous)
            }
            ScreenEvent::ToggleSelected => {
                let item = self.selected.and_then(|i| list.list().get(i).cloned());
                if let Some(item) = item {
                    let _ = list.toggle(item.id, !item.done);
                }
                false
            }
            ScreenEvent::DeleteSelected => {
                let id = self
                    .selected
                    .and_then(|i| list.list().get(i).map(|item| item.id));
                id.is_some_and(|id| self.delete(id, list))
            }
            ScreenEvent::Click { column, row } => self.click(column, row, list),
            ScreenEvent::Quit => {
                tracing::info!("Quit requested");
                self.quit = true;
                true
            }
        }
    }

    fn submit<L: TodoList>(&mut self, list: &mut L) -> bool {
        if list.add(&self.input).is_noop() {
            return false;
        }

        self.input.clear();
        self.focus = Focus::List;
        self.selected = Some(0);
        self.scroll = 0;
        true
    }

    fn delete<L: TodoList>(&mut self, id: TodoId, list: &mut L) -> bool {
        if list.delete(id).is_noop() {
            return false;
        }

        let len = list.list().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        true
    }

    fn click<L: TodoList>(&mut self, column: u16, row: u16, list: &mut L) -> bool {
        let Some(target) = self.hits.hit(column, row) else {
            return false;
        };

        tracing::trace!(?target, column, row, "Click");
        match target {
            HitTarget::Input => self.set_focus(Focus::Input),
            HitTarget::AddButton => self.submit(list),
            HitTarget::Row(index) => {
                let focused = self.set_focus(Focus::List);
                self.select(Some(index)) || focused
            }
            HitTarget::Checkbox(id) => {
                let done = list.list().iter().find(|item| item.id == id).map(|item| item.done);
                if let Some(done) = done {
                    let _ = list.toggle(id, !done);
                }
                false
            }
            HitTarget::Delete(id) => self.delete(id, list),
        }
    }

    fn set_focus(&mut self, focus: Focus) -> bool {
        let changed = self.focus != focus;
        self.focus = focus;
        changed
    }

    fn select(&mut self, selected: Option<usize>) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }
}
