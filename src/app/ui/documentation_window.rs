//! Searchable documentation viewer.
//!
//! Loads the static documentation list on first open and filters it against
//! the search box on every keystroke. Matching entries are rendered in source
//! order with their description, examples, and notes.

use crate::app::documentation::{fetch_documentation, filter_entries, DocEntry};
use crate::app::ui::window_focus::{FocusableWindow, WindowFocusManager};
use eframe::egui;
use egui::{Context, RichText, Ui};

pub struct DocumentationWindow {
    pub open: bool,
    search_query: String,
    /// Loaded lazily the first time the window is shown
    entries: Option<Vec<DocEntry>>,
}

impl Default for DocumentationWindow {
    fn default() -> Self {
        Self {
            open: false,
            search_query: String::new(),
            entries: None,
        }
    }
}

impl DocumentationWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        if self.entries.is_none() {
            self.entries = Some(fetch_documentation());
            tracing::debug!("Documentation loaded");
        }

        let mut window_open = self.open;
        let window = egui::Window::new("Documentation")
            .open(&mut window_open)
            .min_width(420.0)
            .default_height(500.0)
            .resizable(true);
        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Search:");
                ui.text_edit_singleline(&mut self.search_query);
            });
            ui.separator();

            let entries = self.entries.as_deref().unwrap_or(&[]);
            let filtered = filter_entries(entries, &self.search_query);

            egui::ScrollArea::vertical().show(ui, |ui| {
                if filtered.is_empty() {
                    ui.label("No documentation entries match your search.");
                    return;
                }
                for entry in &filtered {
                    Self::ui_entry(ui, entry);
                    ui.add_space(6.0);
                }
            });
        });

        self.open = window_open;
    }

    fn ui_entry(ui: &mut Ui, entry: &DocEntry) {
        ui.group(|ui| {
            ui.heading(&entry.title);
            ui.label(&entry.description);

            if let Some(examples) = &entry.examples {
                ui.add_space(4.0);
                ui.label(RichText::new("Examples").strong());
                ui.code(examples);
            }

            if let Some(notes) = &entry.notes {
                ui.add_space(4.0);
                ui.label(RichText::new("Note").strong());
                ui.label(RichText::new(notes).weak());
            }
        });
    }
}

impl FocusableWindow for DocumentationWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "documentation_window"
    }

    fn window_title(&self) -> String {
        "Documentation".to_string()
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
        DocumentationWindow::show(self, ctx, bring_to_front);
    }
}
