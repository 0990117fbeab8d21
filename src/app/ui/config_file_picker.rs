//! Fuzzy-search file picker for importing configuration files.
//!
//! Navigates the filesystem starting from the user's home directory, showing
//! directories plus `.json` files. Typing filters the current directory with a
//! fuzzy match; Enter selects a file or descends into a directory.

use eframe::egui;
use egui::{Color32, Context, Key, RichText, Window};
use std::path::PathBuf;

/// Status of the config file picker
#[derive(PartialEq)]
pub enum ConfigFilePickerStatus {
    /// The picker is open and waiting for input
    Open,
    /// The picker was closed without a selection
    Closed,
    /// A file was selected
    Selected(PathBuf),
}

/// A file picker that uses fuzzy search to navigate directories and select a
/// JSON configuration file
pub struct ConfigFilePicker {
    pub status: ConfigFilePickerStatus,
    current_dir: PathBuf,
    query: String,
    /// Path components selected so far, for the breadcrumb display
    current_path: Vec<String>,
    filtered_entries: Vec<(String, bool)>, // (name, is_dir)
    selected_index: Option<usize>,
    error_message: Option<String>,
}

impl Default for ConfigFilePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFilePicker {
    /// Create a picker starting in the user's home directory
    pub fn new() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let mut picker = Self {
            status: ConfigFilePickerStatus::Open,
            current_dir: home_dir,
            query: String::new(),
            current_path: Vec::new(),
            filtered_entries: Vec::new(),
            selected_index: None,
            error_message: None,
        };
        picker.update_entries();
        picker
    }

    fn is_config_file(name: &str) -> bool {
        name.to_lowercase().ends_with(".json")
    }

    /// Rebuild the filtered entry list for the current directory and query
    fn update_entries(&mut self) {
        self.filtered_entries.clear();
        self.selected_index = None;

        match std::fs::read_dir(&self.current_dir) {
            Ok(entries) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in entries.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();
                    let is_dir = path.is_dir();

                    // Skip hidden files and directories
                    if name.starts_with('.') {
                        continue;
                    }

                    if self.query.is_empty() || fuzzy_match_score(&self.query, &name).is_some() {
                        if is_dir {
                            dirs.push((name, true));
                        } else if Self::is_config_file(&name) {
                            files.push((name, false));
                        }
                    }
                }

                // Directories first, each group sorted by name
                dirs.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
                files.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

                self.filtered_entries.extend(dirs);
                self.filtered_entries.extend(files);

                if !self.filtered_entries.is_empty() {
                    self.selected_index = Some(0);
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Error reading directory: {}", e));
            }
        }
    }

    /// Accept the current selection: descend into directories, select files
    fn accept_selection(&mut self) {
        if let Some(idx) = self.selected_index {
            if idx < self.filtered_entries.len() {
                let (name, is_dir) = &self.filtered_entries[idx];

                if *is_dir {
                    let new_dir = self.current_dir.join(name);
                    if new_dir.exists() && new_dir.is_dir() {
                        self.current_dir = new_dir;
                        self.current_path.push(name.clone());
                        self.query = String::new();
                        self.update_entries();
                    } else {
                        self.error_message = Some(format!("Cannot access directory: {}", name));
                    }
                } else {
                    let file_path = self.current_dir.join(name);
                    self.status = ConfigFilePickerStatus::Selected(file_path);
                }
            }
        }
    }

    fn navigate_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            if !self.current_path.is_empty() {
                self.current_path.pop();
            }
            self.query = String::new();
            self.update_entries();
        }
    }

    /// Show the picker window
    pub fn show(&mut self, ctx: &Context) {
        if self.status != ConfigFilePickerStatus::Open {
            return;
        }

        ctx.memory_mut(|mem| mem.request_focus(egui::Id::new("config_fuzzy_search_field")));

        let screen_rect = ctx.screen_rect();
        let window_width = screen_rect.width() * 0.6;
        let window_height = screen_rect.height() * 0.6;
        let window_pos = egui::Pos2::new(
            screen_rect.center().x - (window_width / 2.0),
            screen_rect.center().y - (window_height / 2.0),
        );

        Window::new("Import Configuration")
            .fixed_pos(window_pos)
            .fixed_size([window_width, window_height])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Current Path: ");
                        ui.label(RichText::new("~").strong());
                        for component in &self.current_path {
                            ui.label("/");
                            ui.label(RichText::new(component).strong());
                        }
                    });

                    ui.add_space(10.0);

                    if let Some(error) = &self.error_message {
                        ui.colored_label(Color32::RED, error);
                        ui.add_space(10.0);
                    }

                    ui.horizontal(|ui| {
                        ui.label("Search:");
                        let response = ui.add_sized(
                            [ui.available_width() - 100.0, ui.spacing().interact_size.y],
                            egui::TextEdit::singleline(&mut self.query)
                                .id(egui::Id::new("config_fuzzy_search_field")),
                        );
                        if response.changed() {
                            self.update_entries();
                        }
                    });

                    ui.add_space(5.0);
                    ui.label(RichText::new("Looking for configuration files (*.json)").weak());
                    ui.add_space(5.0);

                    egui::ScrollArea::vertical().show(ui, |ui| {
                        if self.current_dir.parent().is_some()
                            && ui
                                .selectable_label(
                                    self.selected_index.is_none()
                                        && self.filtered_entries.is_empty(),
                                    ".. (Parent Directory)",
                                )
                                .clicked()
                        {
                            self.navigate_to_parent();
                        }

                        let mut clicked_file = false;
                        for (idx, (name, is_dir)) in self.filtered_entries.iter().enumerate() {
                            let is_selected = self.selected_index == Some(idx);
                            let label_text = if *is_dir {
                                RichText::new(format!("📁 {}", name))
                                    .color(Color32::from_rgb(100, 170, 255))
                                    .strong()
                            } else {
                                RichText::new(format!("{{ }} {}", name))
                                    .color(Color32::from_rgb(150, 200, 150))
                            };

                            if ui.selectable_label(is_selected, label_text).clicked() {
                                self.selected_index = Some(idx);
                                if !is_dir {
                                    clicked_file = true;
                                }
                            }
                        }

                        // Handled outside the loop to avoid borrow conflicts
                        if clicked_file {
                            self.accept_selection();
                        }
                    });

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Enter: Select file / Navigate into folder").weak());
                        ui.label("|");
                        ui.label(RichText::new("←: Go up a level").weak());
                        ui.label("|");
                        ui.label(RichText::new("Esc: Cancel").weak());
                    });

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            if ui.button("Cancel").clicked() {
                                self.status = ConfigFilePickerStatus::Closed;
                            }

                            if let Some(idx) = self.selected_index {
                                if idx < self.filtered_entries.len() {
                                    let (_name, is_dir) = &self.filtered_entries[idx];
                                    if !is_dir && ui.button("Select").clicked() {
                                        self.accept_selection();
                                    }
                                }
                            }
                        });
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.status = ConfigFilePickerStatus::Closed;
        }

        if ctx.input(|i| i.key_pressed(Key::Enter)) {
            self.accept_selection();
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowLeft)) && self.query.is_empty() {
            self.navigate_to_parent();
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowDown)) {
            if let Some(idx) = self.selected_index {
                if idx + 1 < self.filtered_entries.len() {
                    self.selected_index = Some(idx + 1);
                }
            } else if !self.filtered_entries.is_empty() {
                self.selected_index = Some(0);
            }
        }

        if ctx.input(|i| i.key_pressed(Key::ArrowUp)) {
            if let Some(idx) = self.selected_index {
                if idx > 0 {
                    self.selected_index = Some(idx - 1);
                }
            } else if !self.filtered_entries.is_empty() {
                self.selected_index = Some(self.filtered_entries.len() - 1);
            }
        }
    }
}

/// Score a fuzzy match of `pattern` against `text`.
///
/// Returns `None` when the pattern characters do not all appear in order in
/// the text. Consecutive matches and shorter texts score higher.
pub fn fuzzy_match_score(pattern: &str, text: &str) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();

    let mut score = 0;
    let mut pattern_idx = 0;
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut consecutive_matches = 0;

    for c in text.chars() {
        if pattern_idx < pattern_chars.len() && c == pattern_chars[pattern_idx] {
            pattern_idx += 1;
            consecutive_matches += 1;
            score += consecutive_matches;
        } else {
            consecutive_matches = 0;
        }
    }

    if pattern_idx == pattern_chars.len() {
        let length_ratio = pattern.len() as f32 / text.len() as f32;
        score = (score as f32 * (1.0 + length_ratio)) as usize;
        Some(score)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match_requires_all_chars_in_order() {
        assert!(fuzzy_match_score("cfg", "my-config.json").is_some());
        assert!(fuzzy_match_score("gfc", "my-config.json").is_none());
        assert!(fuzzy_match_score("", "anything").is_some());
    }

    #[test]
    fn test_fuzzy_match_prefers_consecutive_runs() {
        let tight = fuzzy_match_score("conf", "config.json").unwrap();
        let sparse = fuzzy_match_score("conf", "calendar-of-new-files.json").unwrap();
        assert!(tight > sparse);
    }

    #[test]
    fn test_config_file_extension_filter() {
        assert!(ConfigFilePicker::is_config_file("app-idea-config.json"));
        assert!(ConfigFilePicker::is_config_file("UPPER.JSON"));
        assert!(!ConfigFilePicker::is_config_file("template.yaml"));
        assert!(!ConfigFilePicker::is_config_file("notes.txt"));
    }
}
