//! The running application: store, screen state and the event loop.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::keymap;
use crate::screen::ScreenState;
use crate::todo_list::{TodoStore, todo_store};
use crate::types::TodoState;
use crate::ui::{self, Background, Theme};
use pawdo_runtime::Subscription;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    crossterm::event::{self, Event},
};
use std::cell::Cell;
use std::rc::Rc;

/// Application state
pub struct App {
    store: TodoStore,
    screen: ScreenState,
    theme: Theme,
    background: Background,
    dirty: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl App {
    /// Wires a store to a fresh screen
    ///
    /// The app subscribes to the store so every applied change marks the
    /// screen for redraw before `send` returns.
    #[must_use]
    pub fn new(mut store: TodoStore, theme: Theme, background: Background) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |state: &TodoState| {
            tracing::debug!(
                items = state.len(),
                done = state.completed_count(),
                "List changed"
            );
            flag.set(true);
        });

        Self {
            store,
            screen: ScreenState::new(),
            theme,
            background,
            dirty,
            subscription,
        }
    }

    /// Builds the app described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Background`] if a configured background file
    /// cannot be read.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let background = ui::Background::load(&config.background)?;
        let theme = Theme::named(config.theme);
        let store = todo_store(config.ids.generator());
        Ok(Self::new(store, theme, background))
    }

    /// The to-do store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// The screen-local state
    #[must_use]
    pub const fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// Whether the user asked to leave
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.screen.should_quit()
    }

    /// Draws one frame
    pub fn draw(&mut self, frame: &mut Frame) {
        let screen = &mut self.screen;
        let theme = &self.theme;
        let background = &self.background;
        self.store
            .state(|state| ui::draw(frame, state, screen, theme, background));
    }

    /// Feeds one terminal event through the keymap and screen
    ///
    /// Returns `true` if the screen needs to be redrawn.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if matches!(event, Event::Resize(..)) {
            return true;
        }

        let screen_changed = keymap::screen_event(self.screen.focus, event)
            .is_some_and(|screen_event| self.screen.handle(screen_event, &mut self.store));

        self.dirty.replace(false) || screen_changed
    }

    /// Runs until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        tracing::info!("Screen started");
        let mut needs_draw = true;

        loop {
            if needs_draw || self.dirty.replace(false) {
                terminal.draw(|frame| self.draw(frame))?;
            }
            if self.should_quit() {
                break;
            }
            needs_draw = self.handle_event(&event::read()?);
        }

        self.store.unsubscribe(self.subscription);
        tracing::info!(items = self.store.state(TodoState::len), "Screen closed");
        Ok(())
    }
}
