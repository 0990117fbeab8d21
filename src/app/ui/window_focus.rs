//! Window focus management.
//!
//! Windows are brought to the foreground through a small trait-based system:
//! each window implements [`FocusableWindow`], and the [`WindowFocusManager`]
//! tracks which window (if any) should be ordered in front on the next frame.
//! The Windows menu drives focus requests.

use eframe::egui;

/// Parameters for windows that can be shown without additional context
pub type SimpleShowParams = ();

/// Trait for windows that can be brought to the foreground
pub trait FocusableWindow {
    /// Parameters required by the window's show method
    type ShowParams;

    /// Unique identifier for this window type. Must match the ID used when
    /// requesting focus from the Windows menu.
    fn window_id(&self) -> &'static str;

    /// Human-readable title, as shown in the title bar and the Windows menu
    fn window_title(&self) -> String;

    /// Whether this window is currently open
    fn is_open(&self) -> bool;

    /// Render the window. When `bring_to_front` is true the window should be
    /// displayed with `egui::Order::Foreground`.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

/// Tracks pending focus requests across frames
#[derive(Default)]
pub struct WindowFocusManager {
    bring_to_front_window: Option<String>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that a window be brought to the front on the next frame
    pub fn request_focus(&mut self, window_id: String) {
        self.bring_to_front_window = Some(window_id);
    }

    pub fn should_bring_to_front(&self, window_id: &str) -> bool {
        self.bring_to_front_window.as_deref() == Some(window_id)
    }

    /// Clear the focus request once the window has processed it, so it does
    /// not stay pinned to the foreground.
    pub fn clear_bring_to_front(&mut self, window_id: &str) {
        if self.should_bring_to_front(window_id) {
            self.bring_to_front_window = None;
        }
    }

    /// Apply foreground ordering to an egui window when requested
    pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
        if bring_to_front {
            window.order(egui::Order::Foreground)
        } else {
            window
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_request_and_check() {
        let mut manager = WindowFocusManager::new();
        assert!(!manager.should_bring_to_front("generator"));

        manager.request_focus("generator".to_string());
        assert!(manager.should_bring_to_front("generator"));
        assert!(!manager.should_bring_to_front("documentation"));
    }

    #[test]
    fn test_clear_only_matching_window() {
        let mut manager = WindowFocusManager::new();
        manager.request_focus("documentation".to_string());

        // Clearing a different window leaves the request pending
        manager.clear_bring_to_front("generator");
        assert!(manager.should_bring_to_front("documentation"));

        manager.clear_bring_to_front("documentation");
        assert!(!manager.should_bring_to_front("documentation"));
    }

    #[test]
    fn test_new_request_replaces_old() {
        let mut manager = WindowFocusManager::new();
        manager.request_focus("generator".to_string());
        manager.request_focus("help".to_string());
        assert!(!manager.should_bring_to_front("generator"));
        assert!(manager.should_bring_to_front("help"));
    }
}
