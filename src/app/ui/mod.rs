//! Desktop user interface for ideadash.
//!
//! The UI follows a window-based architecture: each functional area is a
//! focusable window coordinated by [`app::IdeaDashApp`].
//!
//! - **Generator**: [`generator_window::GeneratorWindow`] hosts the idea form
//!   and the session prompt history behind two tabs.
//! - **Documentation**: [`documentation_window::DocumentationWindow`] shows
//!   the searchable documentation entries.
//! - **Import picker**: [`config_file_picker::ConfigFilePicker`] is a
//!   fuzzy-search JSON file picker for configuration import.
//! - **Focus management**: [`window_focus::FocusableWindow`] and
//!   [`window_focus::WindowFocusManager`] bring windows to the front when
//!   selected from the Windows menu.

pub mod app;
pub mod config_file_picker;
pub mod documentation_window;
pub mod generator_window;
pub mod help_window;
pub mod menu;
pub mod window_focus;

pub use app::IdeaDashApp;
pub use config_file_picker::{ConfigFilePicker, ConfigFilePickerStatus};
pub use documentation_window::DocumentationWindow;
pub use generator_window::{GeneratorAction, GeneratorWindow};
pub use help_window::HelpWindow;
pub use window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
