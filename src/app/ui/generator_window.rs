//! The generator window: the application's main screen.
//!
//! Hosts two tabs. The Generator tab renders the idea form (app type,
//! functionalities, language, framework, architecture, complexity,
//! authentication, storage, audience, attached URLs) and the action buttons;
//! the History tab lists every prompt generated this session in call order.
//!
//! Export and import are not performed here - the window reports them as
//! [`GeneratorAction`]s and the application coordinates file I/O and
//! notifications.

use crate::app::generator::{
    framework_options, IdeaGenerator, APP_TYPES, ARCHITECTURES, DATA_STORAGE_OPTIONS,
    FUNCTIONALITY_OPTIONS, PROGRAMMING_LANGUAGES,
};
use crate::app::ui::window_focus::{FocusableWindow, WindowFocusManager};
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Debug, Clone, Copy, PartialEq)]
enum GeneratorTab {
    Generator,
    History,
}

/// Actions the window requests from the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorAction {
    ExportConfig,
    ImportConfig,
}

pub struct GeneratorWindow {
    pub open: bool,
    pub generator: IdeaGenerator,
    /// The most recently generated prompt, shown under the form
    pub generated_prompt: String,
    active_tab: GeneratorTab,
    show_advanced: bool,
    url_input: String,
}

impl Default for GeneratorWindow {
    fn default() -> Self {
        Self {
            open: true,
            generator: IdeaGenerator::new(),
            generated_prompt: String::new(),
            active_tab: GeneratorTab::Generator,
            show_advanced: false,
            url_input: String::new(),
        }
    }
}

impl GeneratorWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the window. Returns an action when the user asked for an
    /// export or import.
    pub fn show(&mut self, ctx: &Context, bring_to_front: bool) -> Option<GeneratorAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let mut window_open = self.open;

        let screen_rect = ctx.screen_rect();
        let window = egui::Window::new("App Idea Generator")
            .open(&mut window_open)
            .min_width(420.0)
            .min_height(400.0)
            .max_height(screen_rect.height() * 0.85)
            .resizable(true)
            .default_pos(screen_rect.center());

        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, GeneratorTab::Generator, "Generator");
                ui.selectable_value(
                    &mut self.active_tab,
                    GeneratorTab::History,
                    format!("Prompt History ({})", self.generator.history.len()),
                );
            });
            ui.separator();

            match self.active_tab {
                GeneratorTab::Generator => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        action = self.ui_generator_tab(ctx, ui);
                    });
                }
                GeneratorTab::History => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.ui_history_tab(ui);
                    });
                }
            }
        });

        self.open = window_open;
        action
    }

    fn ui_generator_tab(&mut self, ctx: &Context, ui: &mut Ui) -> Option<GeneratorAction> {
        let mut action = None;
        let form = &mut self.generator.form;

        ui.label(RichText::new("Initial Idea").strong());
        ui.text_edit_singleline(&mut form.idea_input)
            .on_hover_text("Input your initial idea for the app. This helps tailor the prompt.");
        ui.add_space(8.0);

        ui.label(RichText::new("App Type").strong());
        egui::ComboBox::from_id_salt("app_type")
            .selected_text(if form.app_type.is_empty() {
                "Select app type"
            } else {
                &form.app_type
            })
            .show_ui(ui, |ui| {
                for app_type in APP_TYPES {
                    ui.selectable_value(&mut form.app_type, app_type.to_string(), app_type);
                }
            });
        ui.add_space(8.0);

        ui.label(RichText::new("Main Functionalities").strong());
        for row in FUNCTIONALITY_OPTIONS.chunks(2) {
            ui.horizontal(|ui| {
                for functionality in row {
                    let mut checked = form.has_functionality(functionality);
                    if ui.checkbox(&mut checked, *functionality).changed() {
                        form.set_functionality(functionality, checked);
                    }
                }
            });
        }
        ui.add_space(8.0);

        ui.label(RichText::new("Programming Language").strong());
        let mut language = form.programming_language.clone();
        egui::ComboBox::from_id_salt("programming_language")
            .selected_text(if language.is_empty() {
                "Select programming language"
            } else {
                &language
            })
            .show_ui(ui, |ui| {
                for lang in PROGRAMMING_LANGUAGES {
                    ui.selectable_value(&mut language, lang.to_string(), lang);
                }
            });
        if language != form.programming_language {
            // Routed through the setter so the framework is cleared
            form.set_programming_language(language);
        }
        ui.add_space(8.0);

        let advanced_label = if self.show_advanced {
            "Hide Advanced Options"
        } else {
            "Show Advanced Options"
        };
        if ui.button(advanced_label).clicked() {
            self.show_advanced = !self.show_advanced;
        }

        if self.show_advanced {
            let form = &mut self.generator.form;
            ui.add_space(8.0);

            ui.label(RichText::new("Framework").strong());
            let frameworks = framework_options(&form.programming_language);
            ui.add_enabled_ui(!frameworks.is_empty(), |ui| {
                egui::ComboBox::from_id_salt("framework")
                    .selected_text(if form.framework.is_empty() {
                        "Select framework"
                    } else {
                        &form.framework
                    })
                    .show_ui(ui, |ui| {
                        for fw in frameworks {
                            ui.selectable_value(&mut form.framework, fw.to_string(), *fw);
                        }
                    });
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Architecture").strong());
            egui::ComboBox::from_id_salt("architecture")
                .selected_text(if form.architecture.is_empty() {
                    "Select architecture"
                } else {
                    &form.architecture
                })
                .show_ui(ui, |ui| {
                    for arch in ARCHITECTURES {
                        ui.selectable_value(&mut form.architecture, arch.to_string(), arch);
                    }
                });
            ui.add_space(8.0);

            ui.label(RichText::new("Complexity Level (1-10)").strong());
            ui.add(egui::Slider::new(&mut form.complexity, 1..=10));
            ui.add_space(8.0);

            ui.checkbox(&mut form.include_auth, "Include Authentication")
                .on_hover_text("Whether the app requires user login and authentication features.");
            ui.add_space(8.0);

            ui.label(RichText::new("Data Storage").strong());
            egui::ComboBox::from_id_salt("data_storage")
                .selected_text(if form.data_storage.is_empty() {
                    "Select data storage option"
                } else {
                    &form.data_storage
                })
                .show_ui(ui, |ui| {
                    for option in DATA_STORAGE_OPTIONS {
                        ui.selectable_value(&mut form.data_storage, option.to_string(), option);
                    }
                });
            ui.add_space(8.0);

            ui.label(RichText::new("Target Audience").strong());
            ui.text_edit_singleline(&mut form.target_audience)
                .on_hover_text("The primary users of your app, e.g. young professionals.");
        }

        ui.add_space(8.0);
        self.ui_url_section(ui);

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("Generate Prompt").clicked() {
                self.generated_prompt = self.generator.generate();
            }
            if ui.button("Export Config").clicked() {
                action = Some(GeneratorAction::ExportConfig);
            }
            if ui.button("Import Config").clicked() {
                action = Some(GeneratorAction::ImportConfig);
            }
            if ui.button("Autofill").clicked() {
                let sample = crate::app::generator::IdeaForm::sample();
                self.generator.form.apply_config(sample);
            }
        });

        if !self.generated_prompt.is_empty() {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Generated Prompt").strong());
                    if ui.small_button("Copy").clicked() {
                        ctx.copy_text(self.generated_prompt.clone());
                    }
                });
                ui.label(&self.generated_prompt);
            });
        }

        action
    }

    fn ui_url_section(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("URLs").strong());
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.url_input)
                .on_hover_text("URLs for files and snippets to analyze.");
            if ui.button("Add URL").clicked() && !self.url_input.is_empty() {
                self.generator
                    .form
                    .input_urls
                    .push(std::mem::take(&mut self.url_input));
            }
        });
        if self.generator.form.input_urls.is_empty() {
            ui.label(RichText::new("No URLs added.").weak());
        } else {
            for url in &self.generator.form.input_urls {
                ui.label(url);
            }
        }
    }

    fn ui_history_tab(&self, ui: &mut Ui) {
        if self.generator.history.is_empty() {
            ui.label("No prompts generated yet.");
            return;
        }

        for entry in &self.generator.history {
            ui.group(|ui| {
                ui.label(
                    RichText::new(entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                        .weak(),
                );
                ui.label(&entry.prompt);
            });
            ui.add_space(4.0);
        }
    }
}

impl FocusableWindow for GeneratorWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "generator_window"
    }

    fn window_title(&self) -> String {
        "App Idea Generator".to_string()
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
        // Export/import actions are handled by the caller through `show`;
        // this path only renders.
        let _ = GeneratorWindow::show(self, ctx, bring_to_front);
    }
}
