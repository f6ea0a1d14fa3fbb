//! SearchList rendering.
//!
//! `project` is the pure view projection; `render` draws the projected rows
//! plus the search input line with ratatui.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::item::SearchItem;
use crate::selection::Selection;

use super::state::SearchList;

/// One visible row of the list: an item plus its selection indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable item ID.
    pub id: String,
    /// Display name. Items without a label render as blank.
    pub name: String,
    /// Whether the item is currently selected.
    pub selected: bool,
}

impl Row {
    /// The selection indicator text for this row.
    pub fn status_label(&self) -> &'static str {
        if self.selected {
            "Selected"
        } else {
            "Not selected"
        }
    }
}

/// Project (filtered view × selection set) into rows.
///
/// Pure function: no side effects, no internal state. Row order follows the
/// filtered view, which follows item-store order. Selection is looked up by
/// stable ID, never by position.
pub fn project<T: SearchItem>(items: &[T], filtered: &[usize], selection: &Selection) -> Vec<Row> {
    filtered
        .iter()
        .filter_map(|&index| items.get(index))
        .map(|item| {
            let id = item.search_id();
            let selected = selection.is_selected(&id);
            Row {
                id,
                name: item.search_label().unwrap_or_default(),
                selected,
            }
        })
        .collect()
}

/// Render the widget: search line on top, projected rows below.
pub fn render<T: SearchItem>(frame: &mut Frame, list: &SearchList<T>, area: Rect, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let search_area = Rect { height: 1, ..area };
    render_search_line(
        frame,
        &list.value(),
        &list.placeholder(),
        list.text_cursor(),
        focused,
        search_area,
    );

    let rows_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    render_rows(frame, &list.rows(), list.cursor(), rows_area);
}

/// Render the search input line with a `[Esc] clear` affordance.
fn render_search_line(
    frame: &mut Frame,
    value: &str,
    placeholder: &str,
    cursor: usize,
    focused: bool,
    area: Rect,
) {
    let is_empty = value.is_empty();
    let display_text = if is_empty { placeholder } else { value };

    // Placeholder gets dimmed styling
    let text_style = if is_empty {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if focused {
        // For placeholder, cursor sits at position 0
        let cursor_pos = if is_empty { 0 } else { cursor };

        let before_cursor: String = display_text
            .char_indices()
            .take_while(|(byte_idx, _)| *byte_idx < cursor_pos)
            .map(|(_, c)| c)
            .collect();
        let at_cursor: Option<char> = display_text[cursor_pos..].chars().next();
        let after_cursor: String = if let Some(c) = at_cursor {
            display_text[cursor_pos + c.len_utf8()..].to_string()
        } else {
            String::new()
        };

        let cursor_style = text_style.add_modifier(Modifier::REVERSED);
        spans.push(Span::styled(before_cursor, text_style));
        if let Some(c) = at_cursor {
            spans.push(Span::styled(c.to_string(), cursor_style));
            spans.push(Span::styled(after_cursor, text_style));
        } else {
            // Cursor at end - show a space as cursor
            spans.push(Span::styled(" ", cursor_style));
        }
    } else {
        spans.push(Span::styled(display_text.to_string(), text_style));
    }

    // Right-aligned clear affordance
    let hint = "[Esc] clear";
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width());
    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
        spans.push(Span::styled(hint, Style::default().add_modifier(Modifier::DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the projected rows, keeping the cursor row visible.
fn render_rows(frame: &mut Frame, rows: &[Row], cursor: Option<usize>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let viewport = area.height as usize;
    // Scroll so the cursor row stays inside the viewport
    let offset = match cursor {
        Some(c) if c + 1 > viewport => c + 1 - viewport,
        _ => 0,
    };

    for (line_idx, (row_idx, row)) in rows.iter().enumerate().skip(offset).take(viewport).enumerate()
    {
        let row_area = Rect {
            x: area.x,
            y: area.y + line_idx as u16,
            width: area.width,
            height: 1,
        };

        let focused = cursor == Some(row_idx);
        let name_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let status_style = if row.selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let status = row.status_label();
        let width = area.width as usize;
        let name = truncate_to_width(&row.name, width.saturating_sub(status.width() + 1));
        let padding = width.saturating_sub(name.width() + status.width());

        let line = Line::from(vec![
            Span::styled(name, name_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(status, status_style),
        ]);
        frame.render_widget(Paragraph::new(line), row_area);
    }
}

/// Truncate a string to a display width, appending nothing.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
