//! Constants used throughout the application
//!
//! This module centralizes built-in identifiers, UI text, and log messages
//! to improve maintainability and consistency.

// Built-in pages
pub const PAGE_HOME: &str = "Home";
pub const ICON_HOME: &str = "Home";

// Built-in view ids (keys of the view factory table)
pub const VIEW_HOME: &str = "home";
pub const VIEW_CONFIRM: &str = "confirm";
pub const VIEW_TEXT_PROMPT: &str = "text_prompt";

// Dialog text
pub const DIALOG_CONFIRM_TITLE: &str = "Confirm";
pub const DIALOG_CONFIRM_PROMPT: &str = "Are you sure?";
pub const DIALOG_TEXT_PROMPT_TITLE: &str = "Input";
pub const DIALOG_TEXT_PROMPT_PLACEHOLDER: &str = "Enter a value: ";

// Home view text
pub const HOME_TITLE: &str = "Home";
pub const HOME_WELCOME: &str = "Select an actor and a page to get started.";

// Log messages
pub const LOG_PAGE_ADDED: &str = "📄 Page added";
pub const LOG_VIEW_REGISTERED: &str = "🧩 View registered";
pub const LOG_DRAWER_SKIPPED: &str = "Drawer request skipped";
pub const LOG_DIALOG_STATE: &str = "Dialog state";
pub const LOG_DIALOG_SIGNAL_DROPPED: &str = "⚠️ Dialog content dropped its completion signal";
pub const LOG_ERROR_CREATE_VIEW: &str = "❌ Failed to create view";

// UI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Logging
/// Maximum number of log lines kept in memory
pub const LOG_BUFFER_CAPACITY: usize = 1000;
/// File name of the on-disk log inside the data directory
pub const LOG_FILE_NAME: &str = "viewhost.log";
