//! Equipment slots and slot categories.

use serde::{Deserialize, Serialize};

/// An equipment slot on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    None,
    MainHand,
    Head,
    Body,
    Hands,
    Waist,
    Legs,
    Feet,
    OffHand,
    Ears,
    Neck,
    Wrists,
    RightRing,
    LeftRing,
    SoulCrystal,
}

impl ItemSlot {
    /// Weapon slots pack their model with a model set
    #[must_use]
    pub fn is_weapon(self) -> bool {
        matches!(self, ItemSlot::MainHand | ItemSlot::OffHand)
    }
}

/// Slots an item occupies. A non-zero field means the slot is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipSlotCategory {
    pub main_hand: i8,
    pub off_hand: i8,
    pub head: i8,
    pub body: i8,
    pub gloves: i8,
    pub waist: i8,
    pub legs: i8,
    pub feet: i8,
    pub ears: i8,
    pub neck: i8,
    pub wrists: i8,
    pub finger_l: i8,
    pub finger_r: i8,
    pub soul_crystal: i8,
}

impl EquipSlotCategory {
    #[must_use]
    pub fn contains(&self, slot: ItemSlot) -> bool {
        match slot {
            ItemSlot::None => false,
            ItemSlot::MainHand => self.main_hand != 0,
            ItemSlot::Head => self.head != 0,
            ItemSlot::Body => self.body != 0,
            ItemSlot::Hands => self.gloves != 0,
            ItemSlot::Waist => self.waist != 0,
            ItemSlot::Legs => self.legs != 0,
            ItemSlot::Feet => self.feet != 0,
            ItemSlot::OffHand => self.off_hand != 0,
            ItemSlot::Ears => self.ears != 0,
            ItemSlot::Neck => self.neck != 0,
            ItemSlot::Wrists => self.wrists != 0,
            ItemSlot::RightRing => self.finger_r != 0,
            ItemSlot::LeftRing => self.finger_l != 0,
            ItemSlot::SoulCrystal => self.soul_crystal != 0,
        }
    }
}
