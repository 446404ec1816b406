//! Frame layout and drawing.

use super::{Backdrop, Background, HitTarget, Theme};
use crate::screen::{Focus, ScreenState};
use crate::types::{TodoItem, TodoState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect},
    text::Span,
    widgets::{Block, Clear, Paragraph},
};

/// Header text
pub const TITLE: &str = "My To-Do List 🐾";
/// Shown in the empty input field
pub const PLACEHOLDER: &str = "Add a task…";
/// Shown instead of the list when there are no items
pub const EMPTY_MESSAGE: &str = "Nothing yet. Add your first task!";
/// Label of the add button
pub const ADD_BUTTON: &str = "[ Add ]";

const BUTTON_WIDTH: u16 = 7;
const CHECKBOX_WIDTH: u16 = 3;
const DELETE_WIDTH: u16 = 3;
// Each row is followed by one blank line
const ROW_PITCH: u16 = 2;

/// Draws the whole screen and records its clickable regions in `screen.hits`
pub fn draw(
    frame: &mut Frame,
    state: &TodoState,
    screen: &mut ScreenState,
    theme: &Theme,
    background: &Background,
) {
    let area = frame.area();
    screen.hits.clear();

    frame.render_widget(Backdrop::new(background, theme.backdrop), area);

    let content = area.inner(Margin::new(2, 1));
    let [title_area, _, input_area, _, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(content);

    frame.render_widget(Clear, title_area);
    frame.render_widget(
        Paragraph::new(TITLE)
            .style(theme.title)
            .alignment(Alignment::Center),
        title_area,
    );

    draw_input(frame, input_area, screen, theme);

    if state.is_empty() {
        draw_empty(frame, list_area, theme);
    } else {
        draw_rows(frame, list_area, state.items(), screen, theme);
    }

    draw_footer(frame, footer_area, state, screen.focus, theme);
}

fn draw_input(frame: &mut Frame, area: Rect, screen: &mut ScreenState, theme: &Theme) {
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .areas(area);

    let focused = screen.focus == Focus::Input;
    let block = Block::bordered().border_style(if focused {
        theme.input_focused
    } else {
        theme.input_idle
    });
    let inner = block.inner(field_area);

    frame.render_widget(Clear, field_area);
    frame.render_widget(block, field_area);

    if screen.input.is_empty() {
        frame.render_widget(Paragraph::new(PLACEHOLDER).style(theme.placeholder), inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
    } else {
        // Keep the end of the text in view with one cell left for the cursor
        let room = usize::from(inner.width).saturating_sub(1);
        let (visible, width) = visible_tail(&screen.input, room);

        frame.render_widget(Paragraph::new(visible).style(theme.input_focused), inner);
        if focused {
            let offset = to_u16(width).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
    screen.hits.push(field_area, HitTarget::Input);

    let label_area = Rect {
        y: button_area.y + button_area.height / 2,
        height: 1.min(button_area.height),
        ..button_area
    };
    frame.render_widget(Clear, label_area);
    frame.render_widget(Paragraph::new(ADD_BUTTON).style(theme.button), label_area);
    screen.hits.push(button_area, HitTarget::AddButton);
}

fn draw_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
    // One line of breathing room below the input row
    let [_, message_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(Clear, message_area);
    frame.render_widget(
        Paragraph::new(EMPTY_MESSAGE)
            .style(theme.empty)
            .alignment(Alignment::Center),
        message_area,
    );
}

fn draw_rows(
    frame: &mut Frame,
    area: Rect,
    items: &[TodoItem],
    screen: &mut ScreenState,
    theme: &Theme,
) {
    let visible = usize::from(area.height.saturating_add(1) / ROW_PITCH).max(1);

    if let Some(selected) = screen.selected {
        if selected < screen.scroll {
            screen.scroll = selected;
        } else if selected >= screen.scroll + visible {
            screen.scroll = selected + 1 - visible;
        }
    }
    screen.scroll = screen.scroll.min(items.len().saturating_sub(visible));

    for (slot, (index, item)) in items
        .iter()
        .enumerate()
        .skip(screen.scroll)
        .take(visible)
        .enumerate()
    {
        let y = area.y + to_u16(slot) * ROW_PITCH;
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, 1);
        let selected = screen.focus == Focus::List && screen.selected == Some(index);
        draw_row(frame, row_area, item, selected, theme);

        let [checkbox_area, _, delete_area] = row_columns(row_area);
        screen.hits.push(row_area, HitTarget::Row(index));
        screen.hits.push(checkbox_area, HitTarget::Checkbox(item.id));
        screen.hits.push(delete_area, HitTarget::Delete(item.id));
    }
}

fn draw_row(frame: &mut Frame, area: Rect, item: &TodoItem, selected: bool, theme: &Theme) {
    let base = if selected { theme.row_selected } else { theme.row };
    let title_style = if item.done { base.patch(theme.done) } else { base };
    let [checkbox_area, title_area, delete_area] = row_columns(area);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::new().style(base), area);
    frame.render_widget(
        Paragraph::new(if item.done { "[x]" } else { "[ ]" }).style(base),
        checkbox_area,
    );
    frame.render_widget(
        Paragraph::new(item.title.as_str()).style(title_style),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(" ✕ ").style(base.patch(theme.delete)),
        delete_area,
    );
}

fn row_columns(area: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Min(1),
        Constraint::Length(DELETE_WIDTH),
    ])
    .spacing(1)
    .areas(area)
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &TodoState, focus: Focus, theme: &Theme) {
    let help = match focus {
        Focus::Input => "Enter add · Esc list · Ctrl-C quit",
        Focus::List => "↑↓ select · Space toggle · Del delete · type to add · Esc quit",
    };
    let count = format!("{}/{} done", state.completed_count(), state.len());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(help).style(theme.footer), area);
    frame.render_widget(
        Paragraph::new(count)
            .style(theme.footer)
            .alignment(Alignment::Right),
        area,
    );
}

/// Longest suffix of `text` that fits in `room` cells, with its width
fn visible_tail(text: &str, room: usize) -> (&str, usize) {
    let mut start = text.len();
    let mut width = 0;
    let mut buf = [0; 4];

    for (index, c) in text.char_indices().rev() {
        let cells = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if width + cells > room {
            break;
        }
        width += cells;
        start = index;
    }
    (&text[start..], width)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
