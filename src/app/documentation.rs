//! In-app documentation entries and search filtering.
//!
//! The documentation viewer is backed by a static, ordered list of entries.
//! The list is owned by [`fetch_documentation`]; the rest of the application
//! treats it as an external collaborator that simply returns the entries.
//! Filtering is a case-insensitive substring match against title and
//! description, recomputed on every keystroke without debouncing.

use serde::{Deserialize, Serialize};

/// One documentation page: a title, a description, and optional example code
/// and notes sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocEntry {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DocEntry {
    /// Whether this entry matches a search term (case-insensitive substring
    /// against title or description). An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Return the full ordered documentation list.
///
/// The entries describe the application's own screens. Order is significant:
/// the filter preserves it and the viewer renders entries in this sequence.
pub fn fetch_documentation() -> Vec<DocEntry> {
    vec![
        DocEntry {
            title: "App Idea Generator".to_string(),
            description: "A tool to generate app ideas based on user inputs.".to_string(),
            examples: Some(
                r#"use ideadash::app::generator::{IdeaForm, IdeaGenerator};

let mut generator = IdeaGenerator::new();
generator.form = IdeaForm::sample();
let prompt = generator.generate();
println!("{}", prompt);"#
                    .to_string(),
            ),
            notes: Some(
                "The generator window lets you specify app type, functionalities, language, \
                 framework, architecture, complexity, authentication, storage, and audience, \
                 then assembles them into a detailed app idea prompt."
                    .to_string(),
            ),
        },
        DocEntry {
            title: "Documentation".to_string(),
            description: "A section to view and search through the application's documentation."
                .to_string(),
            examples: Some(
                r#"use ideadash::app::documentation::{fetch_documentation, filter_entries};

let docs = fetch_documentation();
let hits = filter_entries(&docs, "generator");
for entry in hits {
    println!("{}: {}", entry.title, entry.description);
}"#
                .to_string(),
            ),
            notes: Some(
                "The search box filters entries by title and description on every keystroke."
                    .to_string(),
            ),
        },
        DocEntry {
            title: "Navigation".to_string(),
            description: "Components for navigating through the application.".to_string(),
            examples: Some(
                "Use the top menu bar to open windows:\n\
                 File > Export Config / Import Config\n\
                 Windows > Generator / Documentation\n\
                 Help > Help"
                    .to_string(),
            ),
            notes: Some(
                "Every window can be brought to the front from the Windows menu; Escape closes \
                 the focused window."
                    .to_string(),
            ),
        },
        DocEntry {
            title: "Index Page".to_string(),
            description: "The main entry point of the application.".to_string(),
            examples: Some(
                "The generator window opens at startup and hosts two tabs: Generator for the \
                 form and History for previously generated prompts."
                    .to_string(),
            ),
            notes: Some(
                "Prompt history lives in memory only and is cleared when the application exits."
                    .to_string(),
            ),
        },
    ]
}

/// Filter entries by a search term, preserving source order.
///
/// Filtering is idempotent: applying the same term to an already-filtered list
/// yields the same list, and an empty term returns the input unchanged.
pub fn filter_entries(entries: &[DocEntry], term: &str) -> Vec<DocEntry> {
    entries
        .iter()
        .filter(|entry| entry.matches(term))
        .cloned()
        .collect()
}
