//! Bounded numeric input component.
//!
//! Accepts digits only. The raw text may be anything the user typed, but
//! [`NumberInput::value`] always resolves to a number inside the bounds:
//! empty, zero or unparseable text falls back to the minimum and larger
//! values clamp to the maximum.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Longest accepted entry, in digits.
const MAX_DIGITS: usize = 6;

/// A numeric input bounded to `[min, max]`.
#[derive(Debug, Clone)]
pub struct NumberInput {
    /// The typed digits.
    text: String,
    /// Lower bound, also the fallback for invalid input.
    min: usize,
    /// Upper bound.
    max: usize,
}

impl NumberInput {
    /// Create an input bounded to `[min, max]`, starting at `min`.
    pub fn new(min: usize, max: usize) -> Self {
        let max = max.max(min);
        Self {
            text: min.to_string(),
            min,
            max,
        }
    }

    /// The resolved value, always within bounds.
    pub fn value(&self) -> usize {
        parse_bounded(&self.text, self.min, self.max)
    }

    /// Set the value, clamping it into bounds.
    pub fn set_value(&mut self, value: usize) {
        self.text = value.clamp(self.min, self.max).to_string();
    }

    /// Replace the text with the resolved value.
    pub fn commit(&mut self) {
        self.text = self.value().to_string();
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the text changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if c.is_ascii_digit() => {
                if self.text.len() >= MAX_DIGITS {
                    return false;
                }
                self.text.push(c);
                true
            }
            (KeyCode::Backspace, _) => self.text.pop().is_some(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.text.is_empty();
                self.text.clear();
                changed
            }
            (KeyCode::Up, _) | (KeyCode::Char('+'), _) => {
                let next = self.value().saturating_add(1);
                self.set_value(next);
                true
            }
            (KeyCode::Down, _) | (KeyCode::Char('-'), _) => {
                let next = self.value().saturating_sub(1);
                self.set_value(next);
                true
            }
            _ => false,
        }
    }

    /// Render the input with a label in its border.
    pub fn render_with_label(&self, frame: &mut Frame, area: Rect, label: &str) {
        let t = theme();

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent));

        let hint = format!("  ({}-{})", self.min, self.max);
        let input = Paragraph::new(ratatui::text::Line::from(vec![
            Span::styled(self.text.clone(), Style::default().fg(t.warning)),
            Span::styled(hint, Style::default().fg(t.dim)),
        ]))
        .block(block);

        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + self.text.len() as u16;
        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
        }
    }
}

/// Resolve typed text to a number in `[min, max]`.
pub fn parse_bounded(text: &str, min: usize, max: usize) -> usize {
    match text.trim().parse::<usize>() {
        Ok(0) | Err(_) => min,
        Ok(n) => n.clamp(min, max),
    }
}
