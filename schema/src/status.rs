use serde::{Deserialize, Serialize};

/// Status ailments used in battle resolution. A character carries at most
/// one; applying a new ailment replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusAilment {
    #[default]
    None,
    Burn,
    Paralysis,
}
