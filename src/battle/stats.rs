//! Derived combat numbers. All functions here are pure reads over a
//! character's stat blocks and status; the engine owns every dice roll.

use crate::character::Character;
use schema::{Move, StatusAilment};

/// Minimum evasion used in the hit formula so a zeroed stat cannot
/// produce a division by zero.
const EVASION_FLOOR: f64 = 1e-4;

/// Speed used for turn ordering: paralysis halves it, rounded down.
pub fn effective_speed(character: &Character) -> i32 {
    let speed = character.current().speed;
    match character.status() {
        StatusAilment::Paralysis => (speed as f64 * 0.5).floor() as i32,
        _ => speed,
    }
}

/// Attack used in the damage formula: burn reduces it by 20%, rounded.
pub fn effective_attack(character: &Character) -> i32 {
    let attack = character.current().attack;
    match character.status() {
        StatusAilment::Burn => (attack as f64 * 0.8).round() as i32,
        _ => attack,
    }
}

/// Chance for `mv` to connect: the move's own accuracy scaled by the
/// attacker/defender accuracy-evasion ratio, clamped so no attack is ever
/// a guaranteed hit or a guaranteed miss.
pub fn hit_chance(attacker: &Character, defender: &Character, mv: &Move) -> f64 {
    let ratio = attacker.base().accuracy / defender.base().evasion.max(EVASION_FLOOR);
    (mv.accuracy * ratio).clamp(0.10, 0.99)
}
