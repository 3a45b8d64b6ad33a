use crate::items::Item;
use schema::Move;

/// Which character an item should be applied to, relative to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTarget {
    User,
    Opponent,
}

/// Planned action for one battle slot, built fresh each turn and consumed
/// by `resolve_turn`. The actor is implied by which slot the intent is
/// passed in; an attack always targets the opposing slot. Dispatch on the
/// variants happens in exactly one place, the engine's execute switch.
#[derive(Debug, Clone)]
pub enum ActionIntent {
    Attack { mv: Move },
    UseItem { item: Item, target: ItemTarget },
    Defend,
    Flee,
}

impl ActionIntent {
    pub fn attack(mv: Move) -> Self {
        ActionIntent::Attack { mv }
    }

    /// Uses an item on the actor itself, the common case.
    pub fn use_item(item: Item) -> Self {
        ActionIntent::UseItem {
            item,
            target: ItemTarget::User,
        }
    }
}
