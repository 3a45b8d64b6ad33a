use crate::battle::engine::BattleEngine;
use crate::battle::intent::{ActionIntent, ItemTarget};
use crate::battle::result::Side;
use crate::battle::type_chart::TypeChart;
use crate::character::Character;
use crate::items::Item;
use crate::rng::ScriptedRandom;
use pretty_assertions::assert_eq;
use schema::{DamageKind, Element, Stats};

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
fn potion_heals_its_user_and_is_echoed_for_removal() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Drinker", 100, 8);
    a.take_damage(50);
    let mut b = fighter("Watcher", 100, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::use_item(Item::hp_potion(30)),
        ActionIntent::Defend,
    );
    assert_eq!(a.current().hp, 80);
    assert_eq!(result.first.used_item, Some(Item::hp_potion(30)));
    assert_eq!(result.first.target, Some(Side::A));
    assert!(result.first.messages.iter().any(|m| m.contains("uses")));
}

#[test]
fn mp_potion_restores_through_the_engine() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Drinker", 100, 8);
    assert!(a.use_mp(25));
    let mut b = fighter("Watcher", 100, 6);
    engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::use_item(Item::mp_potion(10)),
        ActionIntent::Defend,
    );
    assert_eq!(a.current().mp, 18); // 5 + 10 from the potion + 3 regen
}

#[test]
fn item_use_still_executes_after_its_user_is_downed() {
    // A's punch downs the 10 hp target first; the queued potion still
    // goes off, unlike a queued attack.
    let mut engine = engine(vec![0.0, 1.0, 1.0]);
    let mut a = fighter("Quick", 100, 8);
    let mut b = fighter("Frail", 10, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::attack(punch()),
        ActionIntent::use_item(Item::hp_potion(30)),
    );
    assert!(result.first.target_dead_after);
    let second = result.second.expect("second action");
    assert_eq!(second.used_item, Some(Item::hp_potion(30)));
    assert_eq!(b.current().hp, 30);
}

#[test]
fn key_items_are_refused_and_not_consumed() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Confused", 100, 8);
    let mut b = fighter("Watcher", 100, 6);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::use_item(Item::key("park", "Park Gate Key")),
        ActionIntent::Defend,
    );
    assert_eq!(result.first.used_item, None);
    assert!(result.first.messages.iter().any(|m| m.contains("can't use")));
}

#[test]
fn items_can_target_the_opponent() {
    let mut engine = engine(vec![]);
    let mut a = fighter("Medic", 100, 8);
    let mut b = fighter("Patient", 100, 6);
    b.take_damage(40);
    let result = engine.resolve_turn(
        &mut a,
        &mut b,
        ActionIntent::UseItem {
            item: Item::hp_potion(30),
            target: ItemTarget::Opponent,
        },
        ActionIntent::Defend,
    );
    assert_eq!(b.current().hp, 90);
    assert_eq!(result.first.target, Some(Side::B));
}
