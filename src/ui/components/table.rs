//! Artwork table component.
//!
//! The table renders one page of rows with a checkbox column. It does not
//! own the selection: it reads the authoritative set on every render and,
//! when the user toggles something, reports the complete new set back as
//! [`TableAction::SelectionChanged`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::api::Artwork;
use crate::selection::SelectionSet;
use crate::ui::theme::theme;

/// Column headers, after the checkbox column.
const HEADERS: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Date Start",
    "Date End",
];

/// Actions produced by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// The full selection after a toggle.
    SelectionChanged(Vec<Artwork>),
    /// Go to the next page.
    NextPage,
    /// Go to the previous page.
    PrevPage,
    /// Go to the first page.
    FirstPage,
    /// Go to the last page.
    LastPage,
}

/// The paginated artwork table.
#[derive(Debug)]
pub struct ArtworkTable {
    /// Cursor row within the visible page.
    cursor: usize,
    /// Table state for ratatui.
    state: TableState,
}

impl ArtworkTable {
    /// Create a table with the cursor on the first row.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            state: TableState::default().with_selected(Some(0)),
        }
    }

    /// Cursor position within the visible page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to the top, e.g. after a new page arrives.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.state.select(Some(0));
        *self.state.offset_mut() = 0;
    }

    fn move_down(&mut self, len: usize) {
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
            self.state.select(Some(self.cursor));
        }
    }

    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.state.select(Some(self.cursor));
        }
    }

    /// Handle keyboard input against the visible `rows`.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        rows: &[Artwork],
        selection: &SelectionSet,
    ) -> Option<TableAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_down(rows.len());
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_up();
                None
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => rows
                .get(self.cursor)
                .map(|row| TableAction::SelectionChanged(selection.toggled(row))),
            (KeyCode::Char('a'), KeyModifiers::NONE) if !rows.is_empty() => {
                Some(TableAction::SelectionChanged(selection.toggled_all(rows)))
            }
            (KeyCode::Char('l'), KeyModifiers::NONE)
            | (KeyCode::Char('n'), KeyModifiers::NONE)
            | (KeyCode::Right, _)
            | (KeyCode::PageDown, _) => Some(TableAction::NextPage),
            (KeyCode::Char('h'), KeyModifiers::NONE)
            | (KeyCode::Char('p'), KeyModifiers::NONE)
            | (KeyCode::Left, _)
            | (KeyCode::PageUp, _) => Some(TableAction::PrevPage),
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                Some(TableAction::FirstPage)
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => Some(TableAction::LastPage),
            _ => None,
        }
    }

    /// Render the visible rows with their checked state.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[Artwork],
        selection: &SelectionSet,
        title: &str,
    ) {
        let t = theme();

        let all_checked = !rows.is_empty() && selection.count_in(rows) == rows.len();
        let header_cells = std::iter::once(Cell::from(checkbox(all_checked)))
            .chain(HEADERS.iter().map(|h| Cell::from(*h)));
        let header = Row::new(header_cells)
            .style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let table_rows: Vec<Row> = rows
            .iter()
            .map(|row| {
                let checked = selection.contains(row.id);
                let style = if checked {
                    Style::default().fg(t.success)
                } else {
                    Style::default().fg(t.fg)
                };
                Row::new(vec![
                    Cell::from(checkbox(checked)),
                    Cell::from(row.title.as_str()),
                    Cell::from(row.origin.as_str()),
                    Cell::from(row.artist.as_str()),
                    Cell::from(row.inscriptions.as_str()),
                    Cell::from(row.date_start.as_str()),
                    Cell::from(row.date_end.as_str()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
            Constraint::Percentage(10),
        ];

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.dim));

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(block)
            .highlight_style(t.highlight())
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}

impl Default for ArtworkTable {
    fn default() -> Self {
        Self::new()
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
