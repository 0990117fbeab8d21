//! Core application modules for ideadash.
//!
//! # Module Organization
//!
//! ## Domain Core
//! - [`generator`] - Idea form state, prompt assembly, and prompt history
//! - [`documentation`] - Static documentation entries and search filtering
//!
//! ## UI and Infrastructure
//! - [`ui`] - Complete user interface implementation with window management
//! - [`notifications`] - Notification system for user feedback
//!
//! # Architecture
//!
//! The application follows a simple layered architecture: [`generator`] and
//! [`documentation`] hold all state and logic, [`ui`] renders them and routes
//! user actions, and [`notifications`] reports outcomes back to the user.

pub mod documentation;
pub mod generator;
pub mod notifications;
pub mod ui;

pub use ui::app::IdeaDashApp;
