//! UI module for viewhost
//!
//! This module holds the navigation core, the layout helpers and the built-in views.

pub mod core;
pub mod layout;
pub mod views;

pub use layout::LayoutManager;
