use crate::battle::intent::{ActionIntent, ItemTarget};
use crate::battle::result::{Side, TurnActionResult, TurnResult};
use crate::battle::stats::{effective_attack, effective_speed, hit_chance};
use crate::battle::type_chart::TypeChart;
use crate::character::Character;
use crate::rng::RandomSource;
use schema::{Move, StatusAilment};

/// Fraction of max MP both combatants recover at the end of every turn.
pub const END_OF_TURN_MP_REGEN: f64 = 0.10;
/// Fraction of max HP lost per turn while burned (at least 1).
pub const BURN_DOT_FRACTION: f64 = 0.05;
/// Chance a paralyzed attacker loses its action outright.
pub const PARALYSIS_SKIP_CHANCE: f64 = 0.25;
/// Flee chance when not strictly faster than the opponent.
pub const FLEE_BASE_CHANCE: f64 = 0.30;

const CRIT_MULTIPLIER: f64 = 1.5;
const STAB_MULTIPLIER: f64 = 1.2;

/// Breakdown of one damage computation, kept so callers can build
/// messages (crit, effectiveness) without re-deriving the rolls.
#[derive(Debug, Clone, Copy)]
pub struct DamageDetails {
    pub damage: i32,
    pub is_crit: bool,
    pub type_multiplier: f64,
    pub random_factor: f64,
    pub has_stab: bool,
}

/// Turn resolver for a two-slot battle. Owns the only random source in
/// combat, so a scripted source replays an exact turn; the draw order is
/// part of the contract: for an attack it is paralysis check (if
/// paralyzed), hit roll, damage factor, crit roll.
pub struct BattleEngine<R: RandomSource> {
    rng: R,
    chart: TypeChart,
}

impl<R: RandomSource> BattleEngine<R> {
    pub fn new(rng: R, chart: TypeChart) -> Self {
        BattleEngine { rng, chart }
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn compute_hit_chance(&self, attacker: &Character, defender: &Character, mv: &Move) -> f64 {
        hit_chance(attacker, defender, mv)
    }

    /// Damage for a confirmed hit. Consumes two draws, the random damage
    /// factor then the crit roll.
    pub fn compute_damage_detailed(
        &mut self,
        attacker: &Character,
        defender: &Character,
        mv: &Move,
    ) -> DamageDetails {
        let attack = effective_attack(attacker) as f64;
        let defense = defender.current().defense.max(1) as f64;
        let base = attack * mv.power as f64 / defense;

        let random_factor = self.rng.next_range(0.85, 1.00);
        let is_crit = self.rng.next_unit() < mv.crit_chance;
        let type_multiplier = self.chart.multiplier(mv.element, defender.element);
        let has_stab = mv.element == attacker.element;

        let mut total = base * random_factor * type_multiplier;
        if is_crit {
            total *= CRIT_MULTIPLIER;
        }
        if has_stab {
            total *= STAB_MULTIPLIER;
        }

        DamageDetails {
            damage: (total.round() as i32).max(1),
            is_crit,
            type_multiplier,
            random_factor,
            has_stab,
        }
    }

    pub fn compute_damage(&mut self, attacker: &Character, defender: &Character, mv: &Move) -> i32 {
        self.compute_damage_detailed(attacker, defender, mv).damage
    }

    /// Resolves one full turn: orders the two intents by effective speed
    /// (slot A wins ties), executes them, then applies end-of-turn MP
    /// regeneration and burn damage to both slots in acting order.
    ///
    /// A successful flee by the first actor cancels the second action
    /// entirely. If the first action downs its target, a queued attack
    /// from the second slot becomes a no-op, but a defend, flee or item
    /// use still executes. End-of-turn effects run unconditionally, even
    /// for a combatant that fled this turn.
    pub fn resolve_turn(
        &mut self,
        actor_a: &mut Character,
        actor_b: &mut Character,
        intent_a: ActionIntent,
        intent_b: ActionIntent,
    ) -> TurnResult {
        let a_first = effective_speed(actor_a) >= effective_speed(actor_b);
        let (first_intent, second_intent) = if a_first {
            (intent_a, intent_b)
        } else {
            (intent_b, intent_a)
        };
        let (first_actor, second_actor) = if a_first {
            (Side::A, Side::B)
        } else {
            (Side::B, Side::A)
        };

        let first = if a_first {
            self.execute(Side::A, actor_a, actor_b, first_intent, false)
        } else {
            self.execute(Side::B, actor_b, actor_a, first_intent, false)
        };

        let second = if first.fled {
            None
        } else if a_first {
            Some(self.execute(Side::B, actor_b, actor_a, second_intent, first.target_dead_after))
        } else {
            Some(self.execute(Side::A, actor_a, actor_b, second_intent, first.target_dead_after))
        };

        let mut end_of_turn_messages = Vec::new();
        if a_first {
            actor_a.regen_mp_percent(END_OF_TURN_MP_REGEN);
            actor_b.regen_mp_percent(END_OF_TURN_MP_REGEN);
            apply_burn_damage(actor_a, &mut end_of_turn_messages);
            apply_burn_damage(actor_b, &mut end_of_turn_messages);
        } else {
            actor_b.regen_mp_percent(END_OF_TURN_MP_REGEN);
            actor_a.regen_mp_percent(END_OF_TURN_MP_REGEN);
            apply_burn_damage(actor_b, &mut end_of_turn_messages);
            apply_burn_damage(actor_a, &mut end_of_turn_messages);
        }

        TurnResult {
            first,
            second,
            first_actor,
            second_actor,
            end_of_turn_messages,
        }
    }

    /// Whether `actor` escapes: automatic when strictly faster than the
    /// opponent (no draw consumed), otherwise one draw against the base
    /// chance. With no opponent only the base chance applies.
    pub fn roll_flee(&mut self, actor: &Character, opponent: Option<&Character>) -> bool {
        match opponent {
            Some(opp) => {
                effective_speed(actor) > effective_speed(opp)
                    || self.rng.next_unit() < FLEE_BASE_CHANCE
            }
            None => self.rng.next_unit() < FLEE_BASE_CHANCE,
        }
    }

    fn execute(
        &mut self,
        side: Side,
        actor: &mut Character,
        opponent: &mut Character,
        intent: ActionIntent,
        opponent_downed: bool,
    ) -> TurnActionResult {
        let mut result = TurnActionResult::new(side);
        match intent {
            ActionIntent::Attack { mv } => {
                self.execute_attack(side, actor, opponent, mv, opponent_downed, &mut result);
            }
            ActionIntent::Defend => {
                result.defended = true;
                result
                    .messages
                    .push(format!("{} takes a defensive stance.", actor.name));
            }
            ActionIntent::Flee => {
                result.fled = self.roll_flee(actor, Some(opponent));
                if result.fled {
                    result.messages.push(format!("{} flees the fight!", actor.name));
                } else {
                    result
                        .messages
                        .push(format!("{} tries to flee but fails!", actor.name));
                }
            }
            ActionIntent::UseItem { item, target } => {
                result.target = Some(match target {
                    ItemTarget::User => side,
                    ItemTarget::Opponent => side.other(),
                });
                let target_char = match target {
                    ItemTarget::User => &mut *actor,
                    ItemTarget::Opponent => &mut *opponent,
                };
                if item.can_use_on(target_char) {
                    item.use_on(target_char);
                    result
                        .messages
                        .push(format!("{} uses {}.", actor.name, item.name));
                    result.used_item = Some(item);
                } else {
                    result
                        .messages
                        .push(format!("{} can't use {}.", actor.name, item.name));
                }
            }
        }
        result
    }

    fn execute_attack(
        &mut self,
        side: Side,
        actor: &mut Character,
        opponent: &mut Character,
        mv: Move,
        opponent_downed: bool,
        result: &mut TurnActionResult,
    ) {
        result.target = Some(side.other());

        // Forfeited attacks still report the target's state.
        result.target_dead_after = opponent.is_defeated();

        if opponent_downed || opponent.is_defeated() {
            result.messages.push(format!(
                "{} can't attack, the target is already down.",
                actor.name
            ));
            result.mv = Some(mv);
            return;
        }

        if actor.status() == StatusAilment::Paralysis
            && self.rng.next_unit() < PARALYSIS_SKIP_CHANCE
        {
            result
                .messages
                .push(format!("{} is fully paralyzed!", actor.name));
            result.mv = Some(mv);
            return;
        }

        if !actor.use_mp(mv.mp_cost) {
            result.messages.push(format!(
                "{} doesn't have enough MP for {}.",
                actor.name, mv.name
            ));
            result.mv = Some(mv);
            return;
        }

        result
            .messages
            .push(format!("{} uses {}!", actor.name, mv.name));

        let chance = hit_chance(actor, opponent, &mv);
        if self.rng.next_unit() > chance {
            result
                .messages
                .push(format!("{}'s attack missed!", actor.name));
            result.mv = Some(mv);
            return;
        }

        let details = self.compute_damage_detailed(actor, opponent, &mv);
        opponent.take_damage(details.damage);

        result.hit = true;
        result.damage_dealt = details.damage;
        result.target_dead_after = opponent.is_defeated();

        if details.is_crit {
            result.messages.push("A critical hit!".to_string());
        }
        if details.type_multiplier >= 1.5 {
            result.messages.push("It's super effective!".to_string());
        } else if details.type_multiplier <= 0.5 {
            result
                .messages
                .push("It's not very effective...".to_string());
        }
        result.messages.push(format!(
            "{} takes {} damage!",
            opponent.name, details.damage
        ));
        if result.target_dead_after {
            result.messages.push(format!("{} collapses!", opponent.name));
        }
        result.mv = Some(mv);
    }
}

fn apply_burn_damage(character: &mut Character, messages: &mut Vec<String>) {
    if character.status() == StatusAilment::Burn && character.current().hp > 0 {
        let dot = ((character.base().hp as f64 * BURN_DOT_FRACTION).round() as i32).max(1);
        character.take_damage(dot);
        messages.push(format!(
            "{} is hurt by its burn! (-{} HP)",
            character.name, dot
        ));
    }
}
