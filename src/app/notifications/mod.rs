//! Notification system for user feedback.
//!
//! Import/export results (success and failure) are surfaced as transient
//! toast notifications anchored to the bottom-right corner of the viewport.
//! Errors stay on screen until dismissed; informational notifications expire
//! automatically.

use egui::Color32;
use std::time::{Duration, Instant};

const INFO_NOTIFICATION_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationType {
    Error,
    Info,
    Success,
}

impl NotificationType {
    fn accent_color(&self) -> Color32 {
        match self {
            NotificationType::Error => Color32::from_rgb(220, 50, 50),
            NotificationType::Info => Color32::from_rgb(100, 170, 255),
            NotificationType::Success => Color32::from_rgb(110, 190, 110),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub expires_at: Option<Instant>,
}

impl Notification {
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}

/// Collects notifications and renders them as stacked toasts
#[derive(Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error notification. Errors do not expire; the user dismisses
    /// them explicitly.
    pub fn add_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let title = title.into();
        let message = message.into();
        tracing::warn!("Notification (error): {}: {}", title, message);
        self.notifications.push(Notification {
            title,
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            expires_at: None,
        });
    }

    pub fn add_success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push_transient(title.into(), message.into(), NotificationType::Success);
    }

    pub fn add_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push_transient(title.into(), message.into(), NotificationType::Info);
    }

    fn push_transient(&mut self, title: String, message: String, kind: NotificationType) {
        tracing::info!("Notification: {}: {}", title, message);
        self.notifications.push(Notification {
            title,
            message,
            notification_type: kind,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + INFO_NOTIFICATION_TTL),
        });
    }

    pub fn clear_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn has_errors(&self) -> bool {
        self.notifications
            .iter()
            .any(|n| n.notification_type == NotificationType::Error)
    }

    pub fn active_count(&self) -> usize {
        self.notifications.len()
    }

    /// Render all active notifications as toasts in the bottom-right corner
    pub fn render(&mut self, ctx: &egui::Context) {
        self.clear_expired();

        let mut dismissed = Vec::new();
        for (idx, notification) in self.notifications.iter().enumerate() {
            let offset_y = -10.0 - (idx as f32) * 80.0;
            egui::Window::new(format!("notification_{}", idx))
                .title_bar(false)
                .resizable(false)
                .collapsible(false)
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, offset_y])
                .max_width(360.0)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            notification.notification_type.accent_color(),
                            egui::RichText::new(&notification.title).strong(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            if ui.small_button("x").clicked() {
                                dismissed.push(idx);
                            }
                        });
                    });
                    ui.label(&notification.message);
                });
        }

        for idx in dismissed.into_iter().rev() {
            self.notifications.remove(idx);
        }

        // Keep repainting while transient notifications are waiting to expire
        if self.notifications.iter().any(|n| n.expires_at.is_some()) {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    #[cfg(test)]
    pub(crate) fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_do_not_expire() {
        let mut manager = NotificationManager::new();
        manager.add_error("Import failed", "bad JSON");
        assert!(manager.has_errors());

        manager.clear_expired();
        assert_eq!(manager.active_count(), 1);
        assert!(manager.notifications()[0].expires_at.is_none());
    }

    #[test]
    fn test_transient_notifications_carry_deadline() {
        let mut manager = NotificationManager::new();
        manager.add_success("Export", "saved");
        manager.add_info("Hint", "try autofill");
        assert!(!manager.has_errors());
        assert_eq!(manager.active_count(), 2);
        assert!(manager.notifications().iter().all(|n| n.expires_at.is_some()));
    }
}
