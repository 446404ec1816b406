//! Colour themes.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Styles used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header line
    pub title: Style,
    /// Background art
    pub backdrop: Style,
    /// Input field text and border when focused
    pub input_focused: Style,
    /// Input field border when not focused
    pub input_idle: Style,
    /// Placeholder text in the empty input field
    pub placeholder: Style,
    /// The add button
    pub button: Style,
    /// Empty-state message
    pub empty: Style,
    /// An item row
    pub row: Style,
    /// The selected item row
    pub row_selected: Style,
    /// Extra style applied to the title of a done item
    pub done: Style,
    /// The delete control
    pub delete: Style,
    /// Footer help line
    pub footer: Style,
}

impl Theme {
    /// Theme for a configured name
    #[must_use]
    pub const fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Cat => Self::cat(),
            ThemeName::Plain => Self::plain(),
        }
    }

    /// Warm colours; the backdrop is dimmed so rows stay readable on top
    #[must_use]
    pub const fn cat() -> Self {
        Self {
            title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            backdrop: Style::new()
                .fg(Color::Rgb(120, 96, 72))
                .add_modifier(Modifier::DIM),
            input_focused: Style::new().fg(Color::White),
            input_idle: Style::new().fg(Color::Gray),
            placeholder: Style::new().fg(Color::DarkGray),
            button: Style::new()
                .fg(Color::Black)
                .bg(Color::Rgb(255, 176, 102))
                .add_modifier(Modifier::BOLD),
            empty: Style::new().fg(Color::Gray),
            row: Style::new().fg(Color::Black).bg(Color::Rgb(245, 238, 230)),
            row_selected: Style::new()
                .fg(Color::Black)
                .bg(Color::Rgb(255, 214, 170))
                .add_modifier(Modifier::BOLD),
            done: Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            delete: Style::new().fg(Color::Red),
            footer: Style::new().fg(Color::Gray),
        }
    }

    /// Terminal default colours
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            title: Style::new().add_modifier(Modifier::BOLD),
            backdrop: Style::new().add_modifier(Modifier::DIM),
            input_focused: Style::new(),
            input_idle: Style::new().add_modifier(Modifier::DIM),
            placeholder: Style::new().add_modifier(Modifier::DIM),
            button: Style::new().add_modifier(Modifier::REVERSED),
            empty: Style::new(),
            row: Style::new(),
            row_selected: Style::new().add_modifier(Modifier::REVERSED),
            done: Style::new().add_modifier(Modifier::CROSSED_OUT),
            delete: Style::new(),
            footer: Style::new().add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::cat()
    }
}
