//! ideadash - App Idea Prompt Generator
//!
//! ideadash is a desktop application for turning a structured description of
//! an application idea into a single natural-language build prompt. The user
//! picks attributes in a form (app type, functionalities, programming
//! language, framework, architecture, complexity, authentication, storage,
//! target audience) and the tool assembles them into a prompt, keeping an
//! in-session history of everything it generated.
//!
//! # Core Features
//!
//! - **Guided Form**: combo boxes, checkboxes, and sliders for all prompt
//!   attributes, with the framework list constrained by the chosen language
//! - **Prompt Assembly**: deterministic clause-by-clause prompt construction
//! - **Prompt History**: append-only session log of generated prompts
//! - **Config Export/Import**: round-trip the form through
//!   `app-idea-config.json` for sharing and reuse
//! - **Searchable Documentation**: built-in docs filtered as you type
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::ui`]): egui-based desktop interface with window
//!   management
//! - **Domain Core** ([`app::generator`], [`app::documentation`]): form
//!   state, prompt assembly, history, and documentation filtering
//! - **Feedback** ([`app::notifications`]): toast notifications for
//!   import/export outcomes
//!
//! The main entry point is [`IdeaDashApp`], which coordinates all windows and
//! routes user actions into the domain core.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::IdeaDashApp;
