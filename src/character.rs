use crate::battle::ai::{BattleContext, DecisionStrategy};
use crate::battle::intent::ActionIntent;
use crate::progression::StatGrowth;
use schema::{Element, Move, Stats, StatusAilment};
use std::fmt;

/// Mutable battle participant. Owns a base stat block (maxima and combat
/// stats) and a current block of which only `hp` and `mp` are live; every
/// mutator replaces the current `Stats` value with a clamped copy, so
/// `0 <= current.hp <= base.hp` and `0 <= current.mp <= base.mp` hold at
/// all times.
///
/// Player-controlled characters are built with `Character::new` and get
/// their intents from the input layer; AI-controlled ones carry a
/// `DecisionStrategy` and answer `choose_action`.
pub struct Character {
    pub name: String,
    pub element: Element,
    pub moves: Vec<Move>,
    level: i32,
    base: Stats,
    current: Stats,
    status: StatusAilment,
    strategy: Option<Box<dyn DecisionStrategy>>,
}

impl Character {
    /// Player-controlled character; intents come from the input collaborator.
    pub fn new(name: impl Into<String>, level: i32, element: Element, base: Stats) -> Self {
        Character {
            name: name.into(),
            element,
            moves: Vec::new(),
            level,
            base,
            current: base,
            status: StatusAilment::None,
            strategy: None,
        }
    }

    /// Strategy-controlled character (enemies).
    pub fn with_strategy(
        name: impl Into<String>,
        level: i32,
        element: Element,
        base: Stats,
        strategy: Box<dyn DecisionStrategy>,
    ) -> Self {
        let mut character = Character::new(name, level, element, base);
        character.strategy = Some(strategy);
        character
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn base(&self) -> &Stats {
        &self.base
    }

    pub fn current(&self) -> &Stats {
        &self.current
    }

    pub fn status(&self) -> StatusAilment {
        self.status
    }

    pub fn is_defeated(&self) -> bool {
        self.current.hp <= 0
    }

    /// Asks the attached strategy for an intent. `None` for
    /// player-controlled characters.
    pub fn choose_action(&self, ctx: &mut BattleContext<'_>) -> Option<ActionIntent> {
        self.strategy.as_ref().map(|s| s.choose_action(ctx))
    }

    /// Reduces hp, clamped to `[0, base.hp]`. Non-positive amounts are no-ops.
    pub fn take_damage(&mut self, amount: i32) {
        let new_hp = (self.current.hp - amount.max(0)).max(0);
        self.current = Stats {
            hp: new_hp,
            ..self.current
        };
    }

    /// Restores hp, clamped to `base.hp`. Non-positive amounts are no-ops.
    pub fn heal(&mut self, amount: i32) {
        let new_hp = (self.current.hp + amount.max(0)).min(self.base.hp);
        self.current = Stats {
            hp: new_hp,
            ..self.current
        };
    }

    /// The sole affordability gate for moves: returns `false` without
    /// mutating when current mp cannot cover `cost`.
    pub fn use_mp(&mut self, cost: i32) -> bool {
        if self.current.mp < cost {
            return false;
        }
        self.current = Stats {
            mp: self.current.mp - cost,
            ..self.current
        };
        true
    }

    /// Adds `round(base.mp * percent)` mp, clamped to `[0, base.mp]`.
    /// Called unconditionally for both actors at the end of every turn.
    pub fn regen_mp_percent(&mut self, percent: f64) {
        let regen = (self.base.mp as f64 * percent).round() as i32;
        let new_mp = (self.current.mp + regen).clamp(0, self.base.mp);
        self.current = Stats {
            mp: new_mp,
            ..self.current
        };
    }

    /// Restores mp, clamped to `base.mp`. Non-positive amounts are no-ops.
    pub fn restore_mp(&mut self, amount: i32) {
        let new_mp = (self.current.mp + amount.max(0)).min(self.base.mp);
        self.current = Stats {
            mp: new_mp,
            ..self.current
        };
    }

    /// Single-slot status: a new ailment replaces the old one.
    pub fn apply_status(&mut self, status: StatusAilment) {
        self.status = status;
    }

    pub fn clear_status(&mut self) {
        self.status = StatusAilment::None;
    }

    /// Level-up hook for the progression module: raises the base block by
    /// `growth` (accuracy/evasion kept) and fully heals to the new maxima.
    pub(crate) fn grow(&mut self, growth: &StatGrowth) {
        self.level += 1;
        self.base = Stats {
            hp: self.base.hp + growth.hp,
            mp: self.base.mp + growth.mp,
            attack: self.base.attack + growth.attack,
            defense: self.base.defense + growth.defense,
            speed: self.base.speed + growth.speed,
            accuracy: self.base.accuracy,
            evasion: self.base.evasion,
        };
        self.current = self.base;
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("element", &self.element)
            .field("base", &self.base)
            .field("current", &self.current)
            .field("status", &self.status)
            .field("moves", &self.moves)
            .field("has_strategy", &self.strategy.is_some())
            .finish()
    }
}
