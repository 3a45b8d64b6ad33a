use crate::elements::{DamageKind, Element};
use serde::{Deserialize, Serialize};

/// Immutable description of a battle move. Instances are built by the
/// data-loading layer and cloned into action intents as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: String,
    pub name: String,
    pub element: Element,
    /// Base power, >= 0.
    pub power: i32,
    pub kind: DamageKind,
    /// Hit probability factor in (0, 1].
    pub accuracy: f64,
    /// MP paid when the move executes, >= 0.
    pub mp_cost: i32,
    /// Critical hit probability in [0, 1].
    pub crit_chance: f64,
}
