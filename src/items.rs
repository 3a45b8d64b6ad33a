use crate::character::Character;
use serde::{Deserialize, Serialize};

/// Closed set of item effects. Kept as a tagged enum so item behavior is
/// dispatched exhaustively, the same way action intents are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemEffect {
    HealHp { amount: i32 },
    HealMp { amount: i32 },
}

impl ItemEffect {
    pub fn description(&self) -> String {
        match self {
            ItemEffect::HealHp { amount } => format!("Restore {} HP", amount),
            ItemEffect::HealMp { amount } => format!("Restore {} MP", amount),
        }
    }

    pub fn apply(&self, target: &mut Character) {
        match self {
            ItemEffect::HealHp { amount } => target.heal(*amount),
            ItemEffect::HealMp { amount } => target.restore_mp(*amount),
        }
    }
}

/// Usable or key item. Equality is by `id` only: inventory removal works
/// on identity, so two potions of the same kind are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// `None` marks a key/quest item that cannot be used on a character.
    pub effect: Option<ItemEffect>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Item {
    pub fn hp_potion(amount: i32) -> Item {
        Item {
            id: format!("potion_hp_{}", amount),
            name: format!("HP Potion +{}", amount),
            effect: Some(ItemEffect::HealHp { amount }),
        }
    }

    pub fn mp_potion(amount: i32) -> Item {
        Item {
            id: format!("potion_mp_{}", amount),
            name: format!("MP Potion +{}", amount),
            effect: Some(ItemEffect::HealMp { amount }),
        }
    }

    pub fn key(key_id: &str, name: impl Into<String>) -> Item {
        Item {
            id: format!("key_{}", key_id),
            name: name.into(),
            effect: None,
        }
    }

    pub fn is_key(&self) -> bool {
        self.effect.is_none()
    }

    pub fn can_use_on(&self, _target: &Character) -> bool {
        self.effect.is_some()
    }

    pub fn use_on(&self, target: &mut Character) {
        if let Some(effect) = &self.effect {
            effect.apply(target);
        }
    }

    /// HP restored by this item, if it heals HP at all. Used by the AI to
    /// rank healing options.
    pub fn heal_hp_amount(&self) -> Option<i32> {
        match &self.effect {
            Some(ItemEffect::HealHp { amount }) => Some(*amount),
            _ => None,
        }
    }
}

/// Ordered bag of items. Removal takes out the first entry matching the
/// given item's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item equal (by identity) to `item`. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, item: &Item) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn has_key(&self, key_id: &str) -> bool {
        let id = format!("key_{}", key_id);
        self.items.iter().any(|i| i.is_key() && i.id == id)
    }
}
