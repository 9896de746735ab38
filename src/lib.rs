//! viewhost - page navigation, drawers and typed modal dialogs for terminal UIs
//!
//! This library registers the named top-level views of an application
//! ("pages"), presents transient overlay panels ("drawers") and runs modal
//! dialogs that hand a typed result back to their caller. Rendering is left to
//! the host: views draw themselves with Ratatui when the host asks them to.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`ui`] - The navigation core and built-in views
//! * [`game_data`] - Model identifier decoding and class/job categories
//! * [`actor`] - Subjects pages are shown for

/// Subjects pages are shown for
pub mod actor;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types
pub mod error;

/// Game data shapes: packed model ids, equipment slots, class/job categories
pub mod game_data;

/// Icon definitions for page icons
pub mod icons;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Navigation core and built-in views
pub mod ui;

pub use error::{GameDataError, ViewError};
pub use ui::core::{Service, ViewFactory, ViewService};
