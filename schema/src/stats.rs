use serde::{Deserialize, Serialize};

/// Immutable stat block. A `Character` owns two of these: the base block
/// (maxima and combat stats) and the current block, of which only `hp` and
/// `mp` are live values. `accuracy` and `evasion` are multiplicative
/// factors, not percentages; 1.0 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub mp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub accuracy: f64,
    pub evasion: f64,
}

impl Stats {
    /// Stat block with neutral accuracy and evasion.
    pub fn new(hp: i32, mp: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Stats {
            hp,
            mp,
            attack,
            defense,
            speed,
            accuracy: 1.0,
            evasion: 1.0,
        }
    }
}
