//! Player experience, leveling and victory rewards.

use crate::character::Character;
use crate::items::{Inventory, Item};
use serde::{Deserialize, Serialize};

/// Zone key identifiers gating exploration progress.
pub const KEY_PARK: &str = "park";
pub const KEY_LAB: &str = "lab";
pub const KEY_CORE: &str = "core";

/// True when the player holds all three zone keys.
pub fn has_all_zone_keys(inventory: &Inventory) -> bool {
    inventory.has_key(KEY_PARK) && inventory.has_key(KEY_LAB) && inventory.has_key(KEY_CORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    Balanced,
    Warrior,
    Mage,
    Rogue,
}

/// Per-level stat gains. Accuracy and evasion never grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGrowth {
    pub hp: i32,
    pub mp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Archetype {
    pub fn growth(self) -> StatGrowth {
        match self {
            Archetype::Balanced => StatGrowth {
                hp: 4,
                mp: 2,
                attack: 2,
                defense: 2,
                speed: 1,
            },
            Archetype::Warrior => StatGrowth {
                hp: 6,
                mp: 1,
                attack: 3,
                defense: 3,
                speed: 1,
            },
            Archetype::Mage => StatGrowth {
                hp: 3,
                mp: 4,
                attack: 1,
                defense: 2,
                speed: 1,
            },
            Archetype::Rogue => StatGrowth {
                hp: 3,
                mp: 2,
                attack: 2,
                defense: 1,
                speed: 3,
            },
        }
    }
}

/// Experience tracker for the player character. Lives next to the
/// `Character` rather than inside it, so enemy aggregates carry no
/// leveling state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub archetype: Archetype,
    total_xp: i32,
    xp: i32,
}

impl PlayerProgress {
    pub fn new(archetype: Archetype) -> Self {
        PlayerProgress {
            archetype,
            total_xp: 0,
            xp: 0,
        }
    }

    /// XP accumulated across all levels.
    pub fn total_xp(&self) -> i32 {
        self.total_xp
    }

    /// XP stored towards the next level.
    pub fn xp(&self) -> i32 {
        self.xp
    }

    /// XP needed to go from `level` to `level + 1`.
    pub fn xp_to_next(level: i32) -> i32 {
        50 * level
    }

    /// Grants XP and applies as many level-ups as it affords. Each level-up
    /// adds the archetype's growth to the base stats and fully heals to the
    /// new maxima. Returns the number of levels gained; non-positive
    /// amounts are ignored.
    pub fn gain_xp(&mut self, character: &mut Character, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        self.total_xp += amount;
        self.xp += amount;
        let mut levels_gained = 0;
        while self.xp >= Self::xp_to_next(character.level()) {
            self.xp -= Self::xp_to_next(character.level());
            character.grow(&self.archetype.growth());
            levels_gained += 1;
        }
        levels_gained
    }
}

/// Grants victory XP to the player and drops optional loot into the
/// inventory. Kept free of any rendering or flow concerns so it stays
/// testable on its own.
pub fn apply_victory_rewards(
    progress: &mut PlayerProgress,
    player: &mut Character,
    inventory: &mut Inventory,
    xp: i32,
    loot: Option<Item>,
) {
    if xp > 0 {
        progress.gain_xp(player, xp);
    }
    if let Some(item) = loot {
        inventory.add(item);
    }
}
