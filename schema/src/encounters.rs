use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of an encounter table: an enemy identifier, an inclusive level
/// range and a selection weight. Validation happens when the rows are
/// assembled into an `EncounterTable`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEntry {
    pub enemy_id: String,
    pub min_level: i32,
    pub max_level: i32,
    pub weight: i32,
}

impl fmt::Display for EncounterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}-{}] (w={})",
            self.enemy_id, self.min_level, self.max_level, self.weight
        )
    }
}
