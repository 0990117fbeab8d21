//! # App Idea Form and Prompt Assembly
//!
//! This module is the domain core of ideadash. It owns the form state a user
//! fills in (app type, functionalities, language, framework, architecture,
//! complexity, authentication, storage, audience), assembles that state into a
//! single natural-language prompt, and keeps the in-session history of every
//! prompt that was generated.
//!
//! ## Core Components
//!
//! - **[`IdeaForm`]** - The full set of user-selected attributes. Serializes to
//!   the external `app-idea-config.json` shape (camelCase keys) for
//!   export/import.
//! - **[`IdeaGenerator`]** - Couples a form with the session prompt history and
//!   performs the generate operation.
//! - **[`PromptHistoryEntry`]** - One timestamped prompt; history is
//!   append-only for the lifetime of the session.
//!
//! ## Form Invariants
//!
//! The only cross-field invariant is the language/framework coupling: the
//! framework choices are constrained by the selected programming language, so
//! [`IdeaForm::set_programming_language`] clears the framework whenever the
//! language changes. All other fields are independent.
//!
//! ## Prompt Assembly
//!
//! [`IdeaForm::assemble_prompt`] is a pure function over a form snapshot. It
//! concatenates a fixed sequence of clauses; optional clauses are included only
//! when their field is set. There is no validation: an unset app type or
//! language interpolates as an empty string and produces a grammatically
//! degraded but non-failing prompt.
//!
//! ## Configuration Files
//!
//! [`IdeaForm::save_to_path`] and [`IdeaForm::load_from_file`] round-trip the
//! nine config fields through JSON. Imported values are applied verbatim - no
//! schema validation or range checking is performed (an imported complexity of
//! 50 is accepted as-is). Parse and I/O failures are returned as errors so the
//! UI can surface them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed filename for exported configurations
pub const CONFIG_FILE_NAME: &str = "app-idea-config.json";

/// The general category of the application being described
pub const APP_TYPES: [&str; 5] = ["Web App", "Mobile App", "Desktop App", "IoT App", "AI/ML App"];

/// Languages the user can pick from
pub const PROGRAMMING_LANGUAGES: [&str; 7] =
    ["JavaScript", "Python", "Java", "C#", "Ruby", "Go", "Swift"];

/// Overall structural styles
pub const ARCHITECTURES: [&str; 5] = [
    "Microservices",
    "Monolithic",
    "Serverless",
    "Event-Driven",
    "Layered",
];

/// Storage backends the prompt can ask for
pub const DATA_STORAGE_OPTIONS: [&str; 5] = [
    "SQL Database",
    "NoSQL Database",
    "File System",
    "Cloud Storage",
    "In-Memory",
];

/// Catalog of selectable functionalities
pub const FUNCTIONALITY_OPTIONS: [&str; 10] = [
    "User Management",
    "Data Analytics",
    "Social Networking",
    "E-commerce",
    "Content Management",
    "Real-time Communication",
    "Task Management",
    "Geolocation Services",
    "File Sharing",
    "Payment Processing",
];

/// Framework choices available for a given programming language
///
/// Returns an empty slice for unknown languages (including the empty string),
/// which disables the framework selector in the UI.
pub fn framework_options(language: &str) -> &'static [&'static str] {
    match language {
        "JavaScript" => &["React", "Angular", "Vue.js", "Node.js"],
        "Python" => &["Django", "Flask", "FastAPI"],
        "Java" => &["Spring Boot", "JavaServer Faces"],
        "C#" => &["ASP.NET Core", "Xamarin"],
        "Ruby" => &["Ruby on Rails", "Sinatra"],
        "Go" => &["Gin", "Echo"],
        "Swift" => &["SwiftUI", "UIKit"],
        _ => &[],
    }
}

/// User-selected attributes driving prompt assembly.
///
/// The serialized form matches the external config file shape exactly: nine
/// camelCase keys, no version field, no schema tag. UI-only state (the initial
/// idea text and attached URLs) is skipped during serialization so exported
/// configs contain only the core fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaForm {
    pub app_type: String,
    /// Selected functionalities, in selection order
    pub main_functionalities: Vec<String>,
    pub programming_language: String,
    pub framework: String,
    pub architecture: String,
    pub complexity: u8,
    pub include_auth: bool,
    pub data_storage: String,
    pub target_audience: String,
    /// Free-form initial idea text. Collected in the UI but not part of the
    /// assembled prompt or the exported config.
    #[serde(skip)]
    pub idea_input: String,
    /// URLs attached for analysis. Session-only, excluded from export.
    #[serde(skip)]
    pub input_urls: Vec<String>,
}

impl Default for IdeaForm {
    fn default() -> Self {
        Self {
            app_type: String::new(),
            main_functionalities: Vec::new(),
            programming_language: String::new(),
            framework: String::new(),
            architecture: String::new(),
            complexity: 5,
            include_auth: false,
            data_storage: String::new(),
            target_audience: String::new(),
            idea_input: String::new(),
            input_urls: Vec::new(),
        }
    }
}

impl IdeaForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filled-in example form, used by the Autofill action
    pub fn sample() -> Self {
        Self {
            app_type: "Web App".to_string(),
            main_functionalities: vec!["User Management".to_string(), "E-commerce".to_string()],
            programming_language: "JavaScript".to_string(),
            framework: "React".to_string(),
            architecture: "Microservices".to_string(),
            complexity: 7,
            include_auth: true,
            data_storage: "SQL Database".to_string(),
            target_audience: "General Public".to_string(),
            ..Self::default()
        }
    }

    /// Set the programming language, clearing the framework if the language
    /// actually changed. The framework catalog is keyed by language, so a
    /// stale framework would no longer be a valid choice.
    pub fn set_programming_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        if self.programming_language != language {
            self.programming_language = language;
            self.framework.clear();
        }
    }

    /// Add or remove a functionality, preserving selection order
    pub fn set_functionality(&mut self, name: &str, selected: bool) {
        if selected {
            if !self.main_functionalities.iter().any(|f| f == name) {
                self.main_functionalities.push(name.to_string());
            }
        } else {
            self.main_functionalities.retain(|f| f != name);
        }
    }

    pub fn has_functionality(&self, name: &str) -> bool {
        self.main_functionalities.iter().any(|f| f == name)
    }

    /// Assemble the prompt from the current form state.
    ///
    /// Clauses are concatenated in fixed order; optional clauses are silently
    /// omitted when their field is unset. App type and language are always
    /// interpolated, even when empty.
    pub fn assemble_prompt(&self) -> String {
        let mut prompt = format!(
            "Analyze the provided folders and files to create a functional {} that ",
            self.app_type
        );
        if !self.main_functionalities.is_empty() {
            prompt.push_str(&format!(
                "includes {}. ",
                self.main_functionalities.join(", ")
            ));
        }
        prompt.push_str(&format!(
            "The app should be written in {} ",
            self.programming_language
        ));
        if !self.framework.is_empty() {
            prompt.push_str(&format!("using {} framework ", self.framework));
        }
        if !self.architecture.is_empty() {
            prompt.push_str(&format!("and follow {} architecture. ", self.architecture));
        }
        prompt.push_str(&format!(
            "The app's complexity level is {}/10. ",
            self.complexity
        ));
        if self.include_auth {
            prompt.push_str("Include user authentication and authorization. ");
        }
        if !self.data_storage.is_empty() {
            prompt.push_str(&format!("Use {} for data storage. ", self.data_storage));
        }
        if !self.target_audience.is_empty() {
            prompt.push_str(&format!(
                "The target audience is {}. ",
                self.target_audience
            ));
        }
        if !self.input_urls.is_empty() {
            prompt.push_str(&format!(
                "Analyze the following URLs: {}. ",
                self.input_urls.join(", ")
            ));
        }
        prompt
    }

    /// Overwrite the nine config fields with values from an imported config.
    ///
    /// Session-only state (idea text, attached URLs) is left untouched, and
    /// imported values are applied verbatim without range checking.
    pub fn apply_config(&mut self, config: IdeaForm) {
        self.app_type = config.app_type;
        self.main_functionalities = config.main_functionalities;
        self.programming_language = config.programming_language;
        self.framework = config.framework;
        self.architecture = config.architecture;
        self.complexity = config.complexity;
        self.include_auth = config.include_auth;
        self.data_storage = config.data_storage;
        self.target_audience = config.target_audience;
    }

    /// Save the form configuration to a specific file path
    pub fn save_to_path(&self, file_path: &Path) -> anyhow::Result<()> {
        let json_content = serde_json::to_string_pretty(self)?;
        std::fs::write(file_path, json_content)?;
        tracing::info!("Configuration saved to {}", file_path.display());
        Ok(())
    }

    /// Load a form configuration from a specific file path
    pub fn load_from_file(file_path: &Path) -> anyhow::Result<IdeaForm> {
        let content = std::fs::read_to_string(file_path)?;
        let form: IdeaForm = serde_json::from_str(&content)?;
        Ok(form)
    }
}

/// Default location for exported configs: the user's download directory,
/// falling back to the home directory, then the current directory.
pub fn default_export_path() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// One generated prompt and the instant it was generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub prompt: String,
}

/// Form state plus the append-only session history of generated prompts
#[derive(Debug, Clone, Default)]
pub struct IdeaGenerator {
    pub form: IdeaForm,
    pub history: Vec<PromptHistoryEntry>,
}

impl IdeaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a prompt from the current form and record it in the history.
    ///
    /// History entries are appended in call order and never reordered or
    /// deduplicated; generating the same prompt twice records two entries.
    pub fn generate(&mut self) -> String {
        let prompt = self.form.assemble_prompt();
        self.history.push(PromptHistoryEntry {
            timestamp: Utc::now(),
            prompt: prompt.clone(),
        });
        tracing::info!(
            "Generated prompt ({} chars), {} entries in history",
            prompt.len(),
            self.history.len()
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_options_cover_all_languages() {
        for language in PROGRAMMING_LANGUAGES {
            assert!(
                !framework_options(language).is_empty(),
                "no frameworks listed for {}",
                language
            );
        }
        assert!(framework_options("").is_empty());
        assert!(framework_options("COBOL").is_empty());
    }

    #[test]
    fn test_set_functionality_is_idempotent() {
        let mut form = IdeaForm::new();
        form.set_functionality("E-commerce", true);
        form.set_functionality("E-commerce", true);
        assert_eq!(form.main_functionalities, vec!["E-commerce"]);

        form.set_functionality("E-commerce", false);
        form.set_functionality("E-commerce", false);
        assert!(form.main_functionalities.is_empty());
    }
}
