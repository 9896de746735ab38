//! Class/job flags and category membership.
//!
//! A [`ClassJobCategory`] record holds one boolean per class or job
//! abbreviation. [`Classes`] is the matching flag set; each single-job flag
//! maps to exactly one field of the record.

use crate::error::GameDataError;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of classes and jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Classes(u64);

macro_rules! class_jobs {
    ($($bit:literal => $konst:ident, $abbr:literal, $field:ident;)*) => {
        impl Classes {
            $(pub const $konst: Self = Self(1 << $bit);)*

            /// Every declared value, including the `NONE` and `ALL` sentinels
            pub const VALUES: &'static [Classes] = &[Classes::NONE, $(Classes::$konst,)* Classes::ALL];

            /// Abbreviation of a single class/job flag
            #[must_use]
            pub fn abbreviation(self) -> Option<&'static str> {
                match self {
                    $(Classes::$konst => Some($abbr),)*
                    _ => None,
                }
            }
        }

        /// Classes and jobs allowed by a category
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ClassJobCategory {
            pub name: String,
            $(pub $field: bool,)*
        }

        impl ClassJobCategory {
            fn field(&self, job: Classes) -> Option<bool> {
                match job {
                    $(Classes::$konst => Some(self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

class_jobs! {
    0 => GLADIATOR, "GLA", gla;
    1 => PUGILIST, "PGL", pgl;
    2 => MARAUDER, "MRD", mrd;
    3 => LANCER, "LNC", lnc;
    4 => ARCHER, "ARC", arc;
    5 => CONJURER, "CNJ", cnj;
    6 => THAUMATURGE, "THM", thm;
    7 => CARPENTER, "CRP", crp;
    8 => BLACKSMITH, "BSM", bsm;
    9 => ARMORER, "ARM", arm;
    10 => GOLDSMITH, "GSM", gsm;
    11 => LEATHERWORKER, "LTW", ltw;
    12 => WEAVER, "WVR", wvr;
    13 => ALCHEMIST, "ALC", alc;
    14 => CULINARIAN, "CUL", cul;
    15 => MINER, "MIN", min;
    16 => BOTANIST, "BTN", btn;
    17 => FISHER, "FSH", fsh;
    18 => PALADIN, "PLD", pld;
    19 => MONK, "MNK", mnk;
    20 => WARRIOR, "WAR", war;
    21 => DRAGOON, "DRG", drg;
    22 => BARD, "BRD", brd;
    23 => WHITE_MAGE, "WHM", whm;
    24 => BLACK_MAGE, "BLM", blm;
    25 => ARCANIST, "ACN", acn;
    26 => SUMMONER, "SMN", smn;
    27 => SCHOLAR, "SCH", sch;
    28 => ROGUE, "ROG", rog;
    29 => NINJA, "NIN", nin;
    30 => MACHINIST, "MCH", mch;
    31 => DARK_KNIGHT, "DRK", drk;
    32 => ASTROLOGIAN, "AST", ast;
    33 => SAMURAI, "SAM", sam;
    34 => RED_MAGE, "RDM", rdm;
    35 => BLUE_MAGE, "BLU", blu;
    36 => GUNBREAKER, "GNB", gnb;
    37 => DANCER, "DNC", dnc;
}

impl Classes {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self((1 << 38) - 1);

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Build a set from raw bits, dropping bits no class/job uses
    #[must_use]
    pub const fn from_bits_truncate(bits: u64) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterate the single class/job flags in this set
    pub fn iter(self) -> impl Iterator<Item = Classes> {
        Self::VALUES
            .iter()
            .copied()
            .filter(move |job| *job != Self::NONE && *job != Self::ALL && self.contains(*job))
    }
}

impl BitOr for Classes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Classes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Classes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl ClassJobCategory {
    /// Whether the category allows a single class/job.
    ///
    /// Fails for values with no field in the record: the sentinels and
    /// combinations of several flags.
    pub fn contains(&self, job: Classes) -> Result<bool, GameDataError> {
        self.field(job).ok_or(GameDataError::UnknownClassJob(job.bits()))
    }

    /// Combine every allowed class/job into one flag set
    pub fn to_flags(&self) -> Result<Classes, GameDataError> {
        let mut classes = Classes::NONE;

        for job in Classes::VALUES.iter().copied() {
            if job == Classes::NONE || job == Classes::ALL {
                continue;
            }

            if self.contains(job)? {
                classes |= job;
            }
        }

        Ok(classes)
    }
}
