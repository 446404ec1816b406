//! Terminal presentation of the to-do list.
//!
//! Rendering is a pure projection of [`TodoState`](crate::types::TodoState)
//! plus the screen-local state; the only thing it writes back is the map of
//! clickable regions so mouse clicks can be resolved after the frame is drawn.

pub mod background;
pub mod render;
pub mod theme;

pub use background::{Backdrop, Background};
pub use render::draw;
pub use theme::Theme;

use crate::types::TodoId;
use ratatui::layout::{Position, Rect};

/// Something the user can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The text field
    Input,
    /// The add button
    AddButton,
    /// Anywhere on the row at this index
    Row(usize),
    /// The checkbox of an item
    Checkbox(TodoId),
    /// The delete control of an item
    Delete(TodoId),
}

/// Clickable regions of the last drawn frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Forgets all regions
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Registers a region; later regions take precedence over earlier ones
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// The topmost target under a terminal cell
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}
