//! Presentation state and the notification list.
//!
//! None of this affects catalog or cart data; it is the slice of state a
//! renderer reads to decide what to draw. Notification auto-dismiss is a
//! presentation concern and lives with the renderer, not here.

use chrono::{DateTime, Utc};
use forge_fitness_core::NotificationId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::browse::SortOption;

/// Which page the storefront is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Product,
    Collection,
}

/// Product grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A queued notification banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// UI state for one storefront session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiState {
    pub current_page: Page,
    pub show_filters: bool,
    pub view_mode: ViewMode,
    pub sort_by: SortOption,
    pub search_query: String,
    pub menu_open: bool,
    notifications: Vec<Notification>,
}

impl UiState {
    /// Fresh UI state: home page, grid view, nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the filter panel.
    pub const fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    /// Flip the navigation menu.
    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Queued notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Queue a notification and return its generated id.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.notify_at(kind, message, Utc::now())
    }

    /// [`UiState::notify`] with an explicit timestamp.
    pub fn notify_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        at: DateTime<Utc>,
    ) -> NotificationId {
        let id = NotificationId::new(Uuid::new_v4().to_string());
        let message = message.into();
        tracing::debug!(%id, ?kind, message = %message, "notification queued");
        self.notifications.push(Notification {
            id: id.clone(),
            kind,
            message,
            timestamp: at,
        });
        id
    }

    /// Remove one notification by id; a miss is a no-op.
    pub fn dismiss(&mut self, id: &NotificationId) {
        self.notifications.retain(|n| &n.id != id);
    }

    /// Drop all queued notifications.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_queues_in_order() {
        let mut ui = UiState::new();
        ui.notify(NotificationKind::Info, "first");
        ui.notify(NotificationKind::Success, "second");

        let messages: Vec<_> = ui.notifications().iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let mut ui = UiState::new();
        let a = ui.notify(NotificationKind::Info, "a");
        let b = ui.notify(NotificationKind::Info, "b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut ui = UiState::new();
        let keep = ui.notify(NotificationKind::Warning, "keep");
        let drop = ui.notify(NotificationKind::Error, "drop");

        ui.dismiss(&drop);
        assert_eq!(ui.notifications().len(), 1);
        assert_eq!(ui.notifications()[0].id, keep);

        // Dismissing again is a no-op.
        ui.dismiss(&drop);
        assert_eq!(ui.notifications().len(), 1);
    }

    #[test]
    fn test_clear_notifications() {
        let mut ui = UiState::new();
        ui.notify(NotificationKind::Info, "a");
        ui.notify(NotificationKind::Info, "b");
        ui.clear_notifications();
        assert!(ui.notifications().is_empty());
    }

    #[test]
    fn test_toggles() {
        let mut ui = UiState::new();
        ui.toggle_filters();
        ui.toggle_menu();
        assert!(ui.show_filters);
        assert!(ui.menu_open);
        ui.toggle_filters();
        assert!(!ui.show_filters);
    }
}
