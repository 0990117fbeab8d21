use super::window_focus::{FocusableWindow, WindowFocusManager};
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(520.0);
        let window_height = central_panel_size.y.min(460.0);

        let mut window_open = self.open;
        let window = egui::Window::new("Help")
            .open(&mut window_open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false);
        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            self.ui_content(ui);
        });
        self.open = window_open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Getting Started");
            ui.add_space(5.0);
            ui.label("1. Fill in the form in the App Idea Generator window");
            ui.label("2. Press Generate Prompt to assemble the prompt");
            ui.label("3. Review earlier prompts in the Prompt History tab");

            ui.add_space(15.0);

            ui.heading("Configuration Files");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Export Config").strong());
                ui.label("- saves app-idea-config.json to your download folder");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Import Config").strong());
                ui.label("- loads a previously exported configuration");
            });

            ui.add_space(15.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Close the file picker");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Enter / Arrows").strong());
                ui.label("- Navigate the file picker");
            });

            ui.add_space(15.0);

            ui.heading("About");
            ui.add_space(5.0);
            ui.label(format!("ideadash {}", env!("CARGO_PKG_VERSION")));

            ui.add_space(20.0);
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        HelpWindow::show(self, ctx, bring_to_front);
    }
}
