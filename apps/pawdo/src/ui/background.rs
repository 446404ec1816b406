//! Static background art drawn behind the list.

use crate::config::BackgroundSource;
use crate::error::AppError;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const BUILTIN_CAT: &str = include_str!("../../assets/cat_background.txt");

/// Lines of ASCII art
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Background {
    lines: Vec<String>,
}

impl Background {
    /// The cat drawing shipped with the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_CAT)
    }

    /// No background at all
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Art from arbitrary text; trailing whitespace on each line is dropped
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    /// Loads the configured background
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Background`] if a configured file cannot be read.
    pub fn load(source: &BackgroundSource) -> Result<Self, AppError> {
        match source {
            BackgroundSource::Builtin => Ok(Self::builtin()),
            BackgroundSource::None => Ok(Self::none()),
            BackgroundSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| AppError::Background {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "Loaded background");
                Ok(Self::from_text(&text))
            }
        }
    }

    /// Whether there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }

    /// Width of the widest line, in characters
    #[must_use]
    pub fn width(&self) -> u16 {
        let widest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    /// Number of lines
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Widget drawing a [`Background`] centred in its area with a dimming
/// overlay style applied to the whole area
#[derive(Debug, Clone, Copy)]
pub struct Backdrop<'a> {
    background: &'a Background,
    overlay: Style,
}

impl<'a> Backdrop<'a> {
    /// Creates the widget
    #[must_use]
    pub const fn new(background: &'a Background, overlay: Style) -> Self {
        Self {
            background,
            overlay,
        }
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.background.is_empty() {
            return;
        }

        let width = self.background.width().min(area.width);
        let height = self.background.height().min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        for (offset, line) in self
            .background
            .lines
            .iter()
            .take(usize::from(height))
            .enumerate()
        {
            let row = y + u16::try_from(offset).unwrap_or(u16::MAX);
            buf.set_stringn(x, row, line, usize::from(width), Style::default());
        }

        buf.set_style(area, self.overlay);
    }
}
