//! Toast notifications.
//!
//! Transient messages stacked in the bottom-right corner; used to report
//! fetch failures and bulk-selection results.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// How many toasts are shown at once.
const MAX_VISIBLE: usize = 3;

/// The type of notification, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Error message.
    Error,
}

impl NotificationType {
    /// Get the icon for this notification type.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
            NotificationType::Error => "✗",
        }
    }

    fn color(&self) -> Color {
        let t = theme();
        match self {
            NotificationType::Info => t.accent,
            NotificationType::Success => t.success,
            NotificationType::Error => t.error,
        }
    }

    /// How long notifications of this type stay on screen.
    pub fn duration(&self) -> Duration {
        match self {
            NotificationType::Error => Duration::from_secs(5),
            _ => Duration::from_secs(3),
        }
    }
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message.
    pub message: String,
    /// The type of notification.
    pub notification_type: NotificationType,
    /// When the notification was created.
    pub created_at: Instant,
}

impl Notification {
    /// Create a notification of the given type.
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
        }
    }

    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.notification_type.duration()
    }
}

/// Queue of active notifications.
#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: VecDeque<Notification>,
}

impl NotificationManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest past the visible limit.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        while self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
    }

    /// Add an info notification.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Info));
    }

    /// Add a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Success));
    }

    /// Add an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Error));
    }

    /// Remove expired notifications. Call on each tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Get an iterator over the notifications.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Render notifications stacked in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 50.min(area.width.saturating_sub(4));
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let mut bottom = area.y + area.height.saturating_sub(1);

        for notification in self.notifications.iter().rev() {
            let text_len = notification.message.chars().count() + 2;
            let height = (text_len.div_ceil(inner_width) as u16) + 2;
            if bottom < area.y + height {
                break;
            }
            bottom -= height;

            let x = area.x + area.width.saturating_sub(width + 2);
            render_notification(notification, frame, Rect::new(x, bottom, width, height));
        }
    }
}

fn render_notification(notification: &Notification, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let style = Style::default().fg(notification.notification_type.color());
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", notification.notification_type.icon()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(notification.message.as_str(), style),
    ]);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_limit() {
        let mut manager = NotificationManager::new();
        for i in 0..5 {
            manager.info(format!("message {}", i));
        }
        assert_eq!(manager.len(), MAX_VISIBLE);
        let first = manager.iter().next().unwrap();
        assert_eq!(first.message, "message 2");
    }

    #[test]
    fn test_types() {
        let mut manager = NotificationManager::new();
        manager.success("ok");
        manager.error("bad");
        let types: Vec<NotificationType> =
            manager.iter().map(|n| n.notification_type).collect();
        assert_eq!(types, vec![NotificationType::Success, NotificationType::Error]);
    }

    #[test]
    fn test_fresh_notification_not_expired() {
        let n = Notification::new("hi", NotificationType::Info);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_tick_keeps_fresh() {
        let mut manager = NotificationManager::new();
        manager.error("network down");
        manager.tick();
        assert!(!manager.is_empty());
    }

    #[test]
    fn test_error_lasts_longer() {
        assert!(NotificationType::Error.duration() > NotificationType::Info.duration());
    }
}
