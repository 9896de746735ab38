//! Game data shapes consumed by pages and views.
//!
//! * [`model`] - Packed model identifier decoding
//! * [`slots`] - Equipment slots and slot categories
//! * [`class_jobs`] - Class/job flags and category membership

pub mod class_jobs;
pub mod model;
pub mod slots;

pub use class_jobs::{ClassJobCategory, Classes};
pub use model::{decode_item_model, decode_model, ModelId};
pub use slots::{EquipSlotCategory, ItemSlot};
