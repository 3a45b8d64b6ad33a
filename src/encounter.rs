use crate::errors::{EncounterTableError, EncounterTableResult};
use crate::rng::RandomSource;
use schema::EncounterEntry;

/// Weighted random encounter selector. Entries keep their configured order;
/// selection walks the running cumulative weight, so the relative weights
/// fully determine each entry's probability.
#[derive(Debug, Clone)]
pub struct EncounterTable {
    entries: Vec<EncounterEntry>,
}

impl EncounterTable {
    /// Validates the entry list up front: an empty table, a non-positive
    /// weight or an empty level range is rejected rather than coerced.
    pub fn new(entries: Vec<EncounterEntry>) -> EncounterTableResult<Self> {
        if entries.is_empty() {
            return Err(EncounterTableError::EmptyTable);
        }
        for entry in &entries {
            if entry.weight <= 0 {
                return Err(EncounterTableError::NonPositiveWeight {
                    enemy_id: entry.enemy_id.clone(),
                    weight: entry.weight,
                });
            }
            if entry.min_level <= 0 || entry.max_level < entry.min_level {
                return Err(EncounterTableError::InvalidLevelRange {
                    enemy_id: entry.enemy_id.clone(),
                    min_level: entry.min_level,
                    max_level: entry.max_level,
                });
            }
        }
        Ok(EncounterTable { entries })
    }

    pub fn entries(&self) -> &[EncounterEntry] {
        &self.entries
    }

    /// Draws an enemy id and level. Two draws: one over the total weight to
    /// pick the entry (strict `<` against the running cumulative, which is
    /// why zero weights are rejected at construction), one unit draw mapped
    /// into the entry's inclusive level range, clamped to absorb
    /// floating-point rounding at the top edge.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> (&str, i32) {
        let total_weight: i32 = self.entries.iter().map(|e| e.weight).sum();
        let r = rng.next_range(0.0, total_weight as f64);

        let mut cumulative = 0;
        let mut pick = &self.entries[0];
        for entry in &self.entries {
            cumulative += entry.weight;
            if r < cumulative as f64 {
                pick = entry;
                break;
            }
        }

        let span = pick.max_level - pick.min_level + 1;
        let offset = (rng.next_unit() * span as f64).floor() as i32;
        let level = pick.min_level + offset.clamp(0, span - 1);
        (&pick.enemy_id, level)
    }
}
