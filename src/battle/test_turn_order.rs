use crate::battle::engine::BattleEngine;
use crate::battle::intent::ActionIntent;
use crate::battle::result::Side;
use crate::battle::type_chart::TypeChart;
use crate::character::Character;
use crate::rng::ScriptedRandom;
use pretty_assertions::assert_eq;
use schema::{DamageKind, Element, Stats, StatusAilment};

fn engine(draws: Vec<f64>) -> BattleEngine<ScriptedRandom> {
    BattleEngine::new(ScriptedRandom::new(draws), TypeChart::default())
}

fn fighter(name: &str, hp: i32, speed: i32) -> Character {
    Character::new(name, 5, Element::Fire, Stats::new(hp, 30, 12, 5, speed))
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
fn faster_slot_acts_first() {
    {
        let mut engine = engine(vec![]);
        let mut a = fighter("Quick", 100, 8);
        let mut b = fighter("Slow", 100, 6);
        let result =
            engine.resolve_turn(&mut a, &mut b, ActionIntent::Defend, ActionIntent::Defend);
        assert_eq!(result.first_actor, Side::A);
        assert_eq!(result.second_actor, Side::B);
    }
    {
        let mut engine = engine(vec![]);
        let mut a = fighter("Slow", 100, 6);
        let mut b = fighter("Quick", 100, 8);
        let result =
            engine.resolve_turn(&mut a, &mut b, ActionIntent::Defend, ActionIntent::Defend);
        assert_eq!(result.first_actor, Side::B);
    }
}

#[test]
fn speed_tie_goes_to_slot_a() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Left", 100, 7);
    let mut b = fighter("Right", 100, 7);
    let result = engine.resolve_turn(&mut a, &mut b, ActionIntent::Defend, ActionIntent::Defend);
    assert_eq!(result.first_actor, Side::A);
}

#[test]
fn paralysis_halves_speed_for_ordering() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Numb", 100, 8);
    a.apply_status(StatusAilment::Paralysis); // effective 4
    let mut b = fighter("Steady", 100, 6);
    let result = engine.resolve_turn(&mut a, &mut b, ActionIntent::Defend, ActionIntent::Defend);
    assert_eq!(result.first_actor, Side::B);
}

#[test]
fn downing_the_target_neutralizes_the_queued_attack() {
    // A hits for 84 into 10 hp; B's queued punch becomes a no-op that
    // consumes no draws and pays no MP.
    let mut engine = engine(vec![0.0, 1.0, 1.0]);
    let mut a = fighter("Quick", 100, 8);
    let mut b = fighter("Frail", 10, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::attack(punch()),
        ActionIntent::attack(punch()),
    );

    assert!(result.first.target_dead_after);
    let second = result.second.expect("second action should be recorded");
    assert!(!second.hit);
    assert_eq!(second.damage_dealt, 0);
    // The forfeited attack still reports that its target is down.
    assert!(second.target_dead_after);
    assert!(second
        .messages
        .iter()
        .any(|m| m.contains("already down")));
    assert_eq!(b.current().mp, 30); // never paid, regen clamped at max
    assert_eq!(a.current().hp, 100);
}

#[test]
fn defend_still_executes_after_its_user_is_downed() {
    let mut engine = engine(vec![0.0, 1.0, 1.0]);
    let mut a = fighter("Quick", 100, 8);
    let mut b = fighter("Frail", 10, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::attack(punch()),
        ActionIntent::Defend,
    );
    assert!(result.first.target_dead_after);
    assert!(result.second.expect("second action").defended);
}

#[test]
fn successful_first_flee_cancels_the_second_action() {
    // Strictly faster, so the flee succeeds without a draw; the script is
    // empty to prove nothing else rolls either.
    let mut engine = engine(vec![]);
    let mut a = fighter("Runner", 100, 8);
    let mut b = fighter("Chaser", 100, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::Flee,
        ActionIntent::attack(punch()),
    );
    assert!(result.first.fled);
    assert!(result.second.is_none());
    assert_eq!(b.current().hp, 100);
    assert_eq!(b.current().mp, 30); // the cancelled attack paid nothing
}

#[test]
fn both_slots_regain_mp_at_end_of_turn() {
    // A's attack misses but still pays its cost; B defends for free.
    let mut engine = engine(vec![0.95]);
    let mut a = fighter("Quick", 100, 8);
    let mut b = fighter("Slow", 100, 6);
    engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::attack(punch()),
        ActionIntent::Defend,
    );
    assert_eq!(a.current().mp, 28); // 30 - 5 + 10% of 30
    assert_eq!(b.current().mp, 30); // clamped at max
}
