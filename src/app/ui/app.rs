//! Main application coordinator.
//!
//! `IdeaDashApp` owns every window, routes menu and window actions, performs
//! config export/import, and renders notifications. The theme choice is the
//! only state persisted across runs (via eframe storage); form state, prompt
//! history, and window visibility are session-only.

use super::config_file_picker::{ConfigFilePicker, ConfigFilePickerStatus};
use super::documentation_window::DocumentationWindow;
use super::generator_window::{GeneratorAction, GeneratorWindow};
use super::help_window::HelpWindow;
use super::menu;
use super::window_focus::{FocusableWindow, WindowFocusManager};
use crate::app::generator::{default_export_path, IdeaForm};
use crate::app::notifications::NotificationManager;
use eframe::egui;
use std::path::Path;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct IdeaDashApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub generator_window: GeneratorWindow,
    #[serde(skip)]
    pub documentation_window: DocumentationWindow,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub config_picker: Option<ConfigFilePicker>,
    #[serde(skip)]
    pub notification_manager: NotificationManager,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
}

impl Default for IdeaDashApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            generator_window: GeneratorWindow::new(),
            documentation_window: DocumentationWindow::new(),
            help_window: HelpWindow::new(),
            config_picker: None,
            notification_manager: NotificationManager::new(),
            window_focus_manager: WindowFocusManager::new(),
        }
    }
}

impl IdeaDashApp {
    /// Create a new IdeaDashApp instance from creation context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Apply the selected theme to the UI context
    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        // More square window corners
        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    /// Request that a window be brought to the front, opening it if needed
    pub fn focus_window(&mut self, window_id: &str) {
        match window_id {
            "generator_window" => self.generator_window.open = true,
            "documentation_window" => self.documentation_window.open = true,
            "help_window" => self.help_window.open = true,
            other => {
                tracing::warn!("Focus requested for unknown window: {}", other);
                return;
            }
        }
        self.window_focus_manager.request_focus(window_id.to_string());
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(ui, ctx, &mut self.theme);

                match menu_action {
                    menu::MenuAction::ThemeChanged => {
                        tracing::info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::ExportConfig => {
                        self.export_config();
                    }
                    menu::MenuAction::ImportConfig => {
                        self.start_import();
                    }
                    menu::MenuAction::ShowGenerator => {
                        self.focus_window("generator_window");
                    }
                    menu::MenuAction::ShowDocumentation => {
                        self.focus_window("documentation_window");
                    }
                    menu::MenuAction::ShowHelp => {
                        self.focus_window("help_window");
                    }
                    menu::MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        tracing::info!("Quit requested from File menu");
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    /// Write the current form configuration to the default export location
    fn export_config(&mut self) {
        let path = default_export_path();
        match self.generator_window.generator.form.save_to_path(&path) {
            Ok(()) => {
                self.notification_manager
                    .add_success("Config exported", format!("Saved to {}", path.display()));
            }
            Err(e) => {
                self.notification_manager
                    .add_error("Export failed", e.to_string());
            }
        }
    }

    fn start_import(&mut self) {
        if self.config_picker.is_none() {
            self.config_picker = Some(ConfigFilePicker::new());
        }
    }

    /// Load a configuration file and overwrite the form with its contents.
    /// Parse failures are surfaced as an error notification instead of
    /// aborting the application.
    fn finish_import(&mut self, path: &Path) {
        match IdeaForm::load_from_file(path) {
            Ok(config) => {
                self.generator_window.generator.form.apply_config(config);
                self.generator_window.open = true;
                self.notification_manager
                    .add_success("Config imported", format!("Loaded {}", path.display()));
            }
            Err(e) => {
                self.notification_manager.add_error(
                    "Import failed",
                    format!("{}: {}", path.display(), e),
                );
            }
        }
    }

    fn render_config_picker(&mut self, ctx: &egui::Context) {
        if let Some(picker) = &mut self.config_picker {
            picker.show(ctx);
            match &picker.status {
                ConfigFilePickerStatus::Selected(path) => {
                    let path = path.clone();
                    self.config_picker = None;
                    self.finish_import(&path);
                }
                ConfigFilePickerStatus::Closed => {
                    self.config_picker = None;
                }
                ConfigFilePickerStatus::Open => {}
            }
        }
    }

    fn render_windows(&mut self, ctx: &egui::Context) {
        // Generator window reports export/import requests
        let generator_focus = self
            .window_focus_manager
            .should_bring_to_front(self.generator_window.window_id());
        let action = self.generator_window.show(ctx, generator_focus);
        if generator_focus {
            self.window_focus_manager
                .clear_bring_to_front("generator_window");
        }
        match action {
            Some(GeneratorAction::ExportConfig) => self.export_config(),
            Some(GeneratorAction::ImportConfig) => self.start_import(),
            None => {}
        }

        let doc_focus = self
            .window_focus_manager
            .should_bring_to_front(self.documentation_window.window_id());
        self.documentation_window.show_with_focus(ctx, (), doc_focus);
        if doc_focus {
            self.window_focus_manager
                .clear_bring_to_front("documentation_window");
        }

        let help_focus = self
            .window_focus_manager
            .should_bring_to_front(self.help_window.window_id());
        self.help_window.show_with_focus(ctx, (), help_focus);
        if help_focus {
            self.window_focus_manager.clear_bring_to_front("help_window");
        }
    }
}

impl eframe::App for IdeaDashApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        self.render_top_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading("Advanced App Idea Generator");
                ui.label("Describe the app you have in mind and generate a build prompt.");
                if !self.generator_window.open && ui.button("Open Generator").clicked() {
                    self.focus_window("generator_window");
                }
            });
        });

        self.render_windows(ctx);
        self.render_config_picker(ctx);
        self.notification_manager.render(ctx);
    }
}
