use crate::app::ui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    ExportConfig,
    ImportConfig,
    ShowGenerator,
    ShowDocumentation,
    ShowHelp,
    Quit,
}

/// Build the top menu bar and report the action the user picked
pub fn build_menu(ui: &mut egui::Ui, ctx: &egui::Context, theme: &mut ThemeChoice) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("File", |ui| {
        if ui.button("Export Config").clicked() {
            menu_action = MenuAction::ExportConfig;
        }
        if ui.button("Import Config").clicked() {
            menu_action = MenuAction::ImportConfig;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    ui.menu_button("Windows", |ui| {
        if ui.button("App Idea Generator").clicked() {
            menu_action = MenuAction::ShowGenerator;
        }
        if ui.button("Documentation").clicked() {
            menu_action = MenuAction::ShowDocumentation;
        }
    });

    ui.menu_button("Help", |ui| {
        if ui.button("Help").clicked() {
            menu_action = MenuAction::ShowHelp;
        }
    });

    if *theme != original_theme && menu_action == MenuAction::None {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
