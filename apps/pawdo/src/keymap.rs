//! Translation of terminal input into screen events.

use crate::screen::{Focus, ScreenEvent};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Maps a crossterm event to a screen event for the current focus
///
/// Key releases and repeats reported by some terminals are ignored, as are
/// events that mean nothing on this screen.
#[must_use]
pub fn screen_event(focus: Focus, event: &Event) -> Option<ScreenEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_event(focus, key),
        Event::Mouse(mouse) => mouse_event(mouse),
        _ => None,
    }
}

fn key_event(focus: Focus, key: &KeyEvent) -> Option<ScreenEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(ScreenEvent::Quit),
            _ => None,
        };
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(ScreenEvent::Submit),
            KeyCode::Backspace => Some(ScreenEvent::Backspace),
            KeyCode::Esc | KeyCode::Tab | KeyCode::Down => Some(ScreenEvent::ReleaseFocus),
            KeyCode::Char(c) => Some(ScreenEvent::Insert(c)),
            _ => None,
        },
        // Only navigation and toggling sit on printable keys; any other
        // character starts the next task. Deleting and quitting need keys
        // that cannot be typed by accident.
        Focus::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(ScreenEvent::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(ScreenEvent::SelectPrevious),
            KeyCode::Char(' ') | KeyCode::Enter => Some(ScreenEvent::ToggleSelected),
            KeyCode::Delete => Some(ScreenEvent::DeleteSelected),
            KeyCode::Tab => Some(ScreenEvent::FocusInput),
            KeyCode::Esc => Some(ScreenEvent::Quit),
            KeyCode::Char(c) => Some(ScreenEvent::Insert(c)),
            _ => None,
        },
    }
}

fn mouse_event(mouse: &MouseEvent) -> Option<ScreenEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ScreenEvent::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
