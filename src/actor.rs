//! Actors are the subjects pages are shown for.
//!
//! A page's support predicate receives the currently selected actor and decides
//! whether the page applies to it (for example, appearance editing only makes
//! sense for characters).

use serde::{Deserialize, Serialize};

/// Kind of object an actor represents in the game world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    BattleNpc,
    EventNpc,
    Treasure,
    Aetheryte,
    GatheringPoint,
    EventObj,
    Mount,
    Companion,
    Retainer,
    Area,
    Housing,
    Cutscene,
    CardStand,
    Ornament,
}

/// A selectable actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self { name: name.into(), kind }
    }

    /// Whether the actor has a character body (appearance, equipment and pose apply)
    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(
            self.kind,
            ActorKind::Player | ActorKind::BattleNpc | ActorKind::EventNpc | ActorKind::Companion | ActorKind::Retainer
        )
    }
}
