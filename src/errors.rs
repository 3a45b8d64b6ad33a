use std::fmt;

/// Construction-time validation failures for encounter tables. These fail
/// fast: a table with an unselectable or nonsensical entry is a data bug,
/// never something to coerce at roll time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncounterTableError {
    /// The table was built from an empty entry list
    EmptyTable,
    /// An entry's weight was zero or negative, which would make it
    /// unselectable under the strict cumulative comparison
    NonPositiveWeight { enemy_id: String, weight: i32 },
    /// An entry's level range was empty or started below 1
    InvalidLevelRange {
        enemy_id: String,
        min_level: i32,
        max_level: i32,
    },
}

impl fmt::Display for EncounterTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncounterTableError::EmptyTable => {
                write!(f, "Encounter table must have at least one entry")
            }
            EncounterTableError::NonPositiveWeight { enemy_id, weight } => {
                write!(f, "Entry '{}' has non-positive weight {}", enemy_id, weight)
            }
            EncounterTableError::InvalidLevelRange {
                enemy_id,
                min_level,
                max_level,
            } => write!(
                f,
                "Entry '{}' has invalid level range [{}, {}]",
                enemy_id, min_level, max_level
            ),
        }
    }
}

impl std::error::Error for EncounterTableError {}

/// Type alias for Results using EncounterTableError
pub type EncounterTableResult<T> = Result<T, EncounterTableError>;
