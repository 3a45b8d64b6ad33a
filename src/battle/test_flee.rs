use crate::battle::engine::BattleEngine;
use crate::battle::intent::ActionIntent;
use crate::battle::type_chart::TypeChart;
use crate::character::Character;
use crate::rng::ScriptedRandom;
use pretty_assertions::assert_eq;
use schema::{DamageKind, Element, Stats, StatusAilment};

fn engine(draws: Vec<f64>) -> BattleEngine<ScriptedRandom> {
    BattleEngine::new(ScriptedRandom::new(draws), TypeChart::default())
}

fn fighter(name: &str, speed: i32) -> Character {
    Character::new(name, 5, Element::Fire, Stats::new(100, 30, 12, 5, speed))
}

fn punch() -> schema::Move {
    schema::Move {
        id: "punch".to_string(),
        name: "Punch".to_string(),
        element: Element::Normal,
        power: 35,
        kind: DamageKind::Physical,
        accuracy: 0.9,
        mp_cost: 5,
        crit_chance: 0.05,
    }
}

#[test]
fn strictly_faster_escape_is_automatic() {
    let mut engine = engine(vec![]);
    let runner = fighter("Runner", 8);
    let chaser = fighter("Chaser", 6);
    assert!(engine.roll_flee(&runner, Some(&chaser)));
    // The empty script would have panicked on any draw.
    assert_eq!(engine.rng_mut().consumed(), 0);
}

#[test]
fn equal_speed_rolls_the_base_chance() {
    let mut engine = engine(vec![0.29, 0.30]);
    let runner = fighter("Runner", 7);
    let chaser = fighter("Chaser", 7);
    assert!(engine.roll_flee(&runner, Some(&chaser)));
    assert!(!engine.roll_flee(&runner, Some(&chaser)));
}

#[test]
fn slower_runner_can_still_get_lucky() {
    let mut engine = engine(vec![0.1]);
    let runner = fighter("Runner", 4);
    let chaser = fighter("Chaser", 9);
    assert!(engine.roll_flee(&runner, Some(&chaser)));
}

#[test]
fn no_opponent_means_base_chance_only() {
    let mut engine = engine(vec![0.29, 0.31]);
    let runner = fighter("Runner", 99);
    assert!(engine.roll_flee(&runner, None));
    assert!(!engine.roll_flee(&runner, None));
}

#[test]
fn paralysis_slows_the_speed_comparison() {
    // Halved from 8 to 4, slower than the chaser's 6, so the base chance
    // decides.
    let mut engine = engine(vec![0.29]);
    let mut runner = fighter("Runner", 8);
    runner.apply_status(StatusAilment::Paralysis);
    let chaser = fighter("Chaser", 6);
    assert!(engine.roll_flee(&runner, Some(&chaser)));
}

#[test]
fn failed_flee_lets_the_opponent_act() {
    // Equal speed, so slot A leads. Draws: flee 0.5 fails, then B's hit,
    // damage factor and crit.
    let mut engine = engine(vec![0.5, 0.0, 1.0, 1.0]);
    let mut a = fighter("Runner", 7);
    let mut b = fighter("Chaser", 7);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::Flee,
        ActionIntent::attack(punch()),
    );
    assert!(!result.first.fled);
    assert!(result
        .first
        .messages
        .iter()
        .any(|m| m.contains("fails")));
    let second = result.second.expect("opponent should get its action");
    assert!(second.hit);
    assert_eq!(a.current().hp, 16);
}
