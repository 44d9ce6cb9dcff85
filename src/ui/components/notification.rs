//! Toast notifications for save/update feedback.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum number of toasts kept on screen at once.
const MAX_VISIBLE: usize = 3;

/// Height of a single toast box, borders included.
const TOAST_HEIGHT: u16 = 3;

/// The type of notification, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message (blue).
    Info,
    /// Success message (green).
    Success,
    /// Error message (red).
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

    /// Get the color for this notification type.
    pub fn color(&self) -> Color {
        match self {
            NotificationType::Info => Color::Blue,
            NotificationType::Success => Color::Green,
            NotificationType::Error => Color::Red,
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message.
    pub message: String,
    /// The type of notification.
    pub notification_type: NotificationType,
    /// When the notification was created.
    created_at: Instant,
    /// How long the notification should be displayed.
    duration: Duration,
}

impl Notification {
    /// Create a new notification.
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Create an info notification (3 second lifetime).
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info, Duration::from_secs(3))
    }

    /// Create a success notification (3 second lifetime).
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success, Duration::from_secs(3))
    }

    /// Create an error notification (5 second lifetime).
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error, Duration::from_secs(5))
    }

    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Holds the active toasts and expires them over time.
#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: VecDeque<Notification>,
}

impl NotificationManager {
    /// Create a new notification manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest beyond the visible limit.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        while self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
    }

    /// Add an info notification.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(message));
    }

    /// Add a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    /// Add an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Remove expired notifications. Called on each tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Clear all notifications.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Render the toasts stacked in the bottom-right corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let width = 48.min(area.width.saturating_sub(4));
        let x = area.x + area.width.saturating_sub(width + 2);
        let mut y = area
            .y
            .saturating_add(area.height)
            .saturating_sub(self.notifications.len() as u16 * TOAST_HEIGHT + 1);

        for notification in &self.notifications {
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            render_toast(notification, frame, rect);
            y = y.saturating_add(TOAST_HEIGHT);
        }
    }
}

fn render_toast(notification: &Notification, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let style = Style::default().fg(notification.notification_type.color());
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", notification.notification_type.icon()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(&notification.message, style),
    ]);

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_icon() {
        assert_eq!(NotificationType::Info.icon(), "ℹ");
        assert_eq!(NotificationType::Success.icon(), "✓");
        assert_eq!(NotificationType::Error.icon(), "✗");
    }

    #[test]
    fn test_notification_type_color() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_notification_constructors() {
        let n = Notification::success("Member saved");
        assert_eq!(n.message, "Member saved");
        assert_eq!(n.notification_type, NotificationType::Success);

        let n = Notification::error("Save failed");
        assert_eq!(n.notification_type, NotificationType::Error);
    }

    #[test]
    fn test_notification_is_expired() {
        let n = Notification::new("Test", NotificationType::Info, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(n.is_expired());
    }

    #[test]
    fn test_notification_not_expired() {
        let n = Notification::info("Test");
        assert!(!n.is_expired());
    }

    #[test]
    fn test_manager_push_and_len() {
        let mut manager = NotificationManager::new();
        assert!(manager.is_empty());
        manager.push(Notification::info("Test"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_manager_caps_visible_toasts() {
        let mut manager = NotificationManager::new();
        manager.info("1");
        manager.success("2");
        manager.error("3");
        manager.info("4");
        assert_eq!(manager.len(), MAX_VISIBLE);
    }

    #[test]
    fn test_manager_tick_expires() {
        let mut manager = NotificationManager::new();
        manager.push(Notification::new(
            "Expires",
            NotificationType::Info,
            Duration::from_millis(1),
        ));
        std::thread::sleep(Duration::from_millis(5));
        manager.tick();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_manager_clear() {
        let mut manager = NotificationManager::new();
        manager.info("Test");
        manager.clear();
        assert!(manager.is_empty());
    }
}
