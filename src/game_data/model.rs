//! Packed model identifiers.
//!
//! Equipment models are stored as a single 64-bit value. Weapons pack three
//! 16-bit fields (set, base, variant); every other slot packs only base and
//! variant and has no model set.

use super::slots::ItemSlot;
use serde::{Deserialize, Serialize};

/// Decoded model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModelId {
    pub set: u16,
    pub base: u16,
    pub variant: u16,
}

/// Decode a packed model value.
///
/// Weapons: set = bits 0..16, base = bits 16..32, variant = bits 32..48.
/// Others: set = 0, base = bits 0..16, variant = bits 16..32.
#[must_use]
pub fn decode_model(val: u64, is_weapon: bool) -> ModelId {
    if is_weapon {
        ModelId {
            set: val as u16,
            base: (val >> 16) as u16,
            variant: (val >> 32) as u16,
        }
    } else {
        ModelId {
            set: 0,
            base: val as u16,
            variant: (val >> 16) as u16,
        }
    }
}

/// Decode the packed model value stored for an equipment slot
#[must_use]
pub fn decode_item_model(slot: ItemSlot, val: u64) -> ModelId {
    decode_model(val, slot.is_weapon())
}
