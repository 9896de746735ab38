//! Built-in views

pub mod common;
pub mod confirm;
pub mod home;
pub mod text_prompt;

pub use confirm::ConfirmDialog;
pub use home::HomeView;
pub use text_prompt::TextPromptDialog;
