//! Selected rows panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::selection::SelectionSet;
use crate::ui::theme::theme;

/// Render the titles of every selected row, across all pages.
///
/// Newest selections are shown last; when the list overflows, the tail
/// stays visible.
pub fn render_selected_panel(frame: &mut Frame, area: Rect, selection: &SelectionSet) {
    let t = theme();

    let block = Block::default()
        .title(Span::styled(
            format!(" Selected Rows ({}) ", selection.len()),
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.dim));

    if selection.is_empty() {
        let empty = ListItem::new(Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(t.dim),
        )));
        frame.render_widget(List::new(vec![empty]).block(block), area);
        return;
    }

    let capacity = area.height.saturating_sub(2) as usize;
    let skip = selection.len().saturating_sub(capacity);
    let items: Vec<ListItem> = selection
        .iter()
        .skip(skip)
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(t.success)),
                Span::raw(row.title.as_str()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
