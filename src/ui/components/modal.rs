//! Bulk-select modal dialog.
//!
//! `Closed -> Open` when the user asks to define rows to select, then back
//! to `Closed` on Cancel (no effect) or Apply (the caller runs the merge).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::NumberInput;
use crate::ui::theme::theme;

/// Action returned from the bulk-select dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkSelectAction {
    /// Select the first N rows of the visible page.
    Apply(usize),
    /// Close without changing anything.
    Cancel,
}

/// Modal asking how many rows of the visible page to select.
#[derive(Debug)]
pub struct BulkSelectDialog {
    /// Whether the dialog is open.
    visible: bool,
    /// Rows-to-select field, bounded to `[1, page size]`.
    input: NumberInput,
}

impl BulkSelectDialog {
    /// Create a closed dialog for pages of `page_size` rows.
    pub fn new(page_size: usize) -> Self {
        Self {
            visible: false,
            input: NumberInput::new(1, page_size.max(1)),
        }
    }

    /// Open the dialog. The field keeps its previous value.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Close the dialog.
    fn close(&mut self) {
        self.visible = false;
    }

    /// Check if the dialog is open.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The resolved rows-to-select value.
    pub fn rows_to_select(&self) -> usize {
        self.input.value()
    }

    /// Handle keyboard input while open.
    ///
    /// Returns an action when the dialog closes.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BulkSelectAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.input.commit();
                self.close();
                Some(BulkSelectAction::Apply(self.input.value()))
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.close();
                Some(BulkSelectAction::Cancel)
            }
            _ => {
                self.input.handle_input(key);
                None
            }
        }
    }

    /// Render the dialog centered over `area`.
    ///
    /// `visible_rows` is shown so the user knows how far N will be clamped.
    pub fn render(&self, frame: &mut Frame, area: Rect, visible_rows: usize) {
        if !self.visible {
            return;
        }

        let t = theme();
        let dialog_width = 46u16.min(area.width.saturating_sub(4));
        let dialog_height = 9u16.min(area.height.saturating_sub(2));
        let dialog_area = centered_rect(area, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                " Select Rows ",
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Prompt
                Constraint::Length(3), // Input
                Constraint::Length(1), // Note
                Constraint::Min(1),    // Buttons
            ])
            .split(inner);

        frame.render_widget(Paragraph::new("Enter number of rows to select:"), chunks[0]);
        self.input.render_with_label(frame, chunks[1], "Rows");

        let note = format!("{} rows on this page", visible_rows);
        frame.render_widget(
            Paragraph::new(Span::styled(note, Style::default().fg(t.dim))),
            chunks[2],
        );

        let buttons = Line::from(vec![
            Span::styled("[Esc] Cancel", Style::default().fg(t.dim)),
            Span::raw("    "),
            Span::styled(
                "[Enter] Apply",
                Style::default().fg(t.success).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[3],
        );
    }
}

/// Calculate a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut BulkSelectDialog, text: &str) {
        dialog.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in text.chars() {
            dialog.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_closed() {
        let dialog = BulkSelectDialog::new(12);
        assert!(!dialog.is_visible());
        assert_eq!(dialog.rows_to_select(), 1);
    }

    #[test]
    fn test_apply_returns_count_and_closes() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        type_text(&mut dialog, "3");

        let action = dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(BulkSelectAction::Apply(3)));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_cancel_closes_without_apply() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        type_text(&mut dialog, "5");

        let action = dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(BulkSelectAction::Cancel));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_apply_clamps_to_page_size() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        type_text(&mut dialog, "50");

        let action = dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(BulkSelectAction::Apply(12)));
    }

    #[test]
    fn test_apply_with_empty_field_uses_one() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        type_text(&mut dialog, "");

        let action = dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(BulkSelectAction::Apply(1)));
    }

    #[test]
    fn test_value_kept_between_openings() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        type_text(&mut dialog, "4");
        dialog.handle_input(key(KeyCode::Enter));

        dialog.open();
        assert_eq!(dialog.rows_to_select(), 4);
    }

    #[test]
    fn test_typing_does_not_close() {
        let mut dialog = BulkSelectDialog::new(12);
        dialog.open();
        assert_eq!(dialog.handle_input(key(KeyCode::Char('2'))), None);
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(area, 40, 20);
        assert_eq!(centered, Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 30, 20);
        let centered = centered_rect(area, 50, 30);
        assert_eq!(centered.width, 30);
        assert_eq!(centered.height, 20);
    }
}
