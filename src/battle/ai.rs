use crate::battle::intent::ActionIntent;
use crate::battle::type_chart::TypeChart;
use crate::character::Character;
use crate::items::Item;
use crate::rng::RandomSource;
use ordered_float::OrderedFloat;
use schema::Move;

/// Read view of the battle handed to a strategy when it is asked for an
/// intent. Carries the shared random source so stochastic strategies can
/// roll without owning state, though `SimpleStrategy` never draws.
pub struct BattleContext<'a> {
    pub actor: &'a Character,
    pub opponent: &'a Character,
    pub rng: &'a mut dyn RandomSource,
    pub chart: &'a TypeChart,
}

/// Decision seam for non-player combatants. Strategies are pure policy:
/// they pick an intent, the engine alone applies it.
pub trait DecisionStrategy {
    fn choose_action(&self, ctx: &mut BattleContext<'_>) -> ActionIntent;
}

/// Hp ratio at or below which the strategy reaches for a healing item.
const LOW_HP_RATIO: f64 = 0.30;

/// Deterministic greedy policy: heal when low and a healing item is in
/// the bag, otherwise throw the strongest affordable move, otherwise
/// defend. Draws nothing from the random source, so enemy decisions are
/// fully reproducible from the battle state.
pub struct SimpleStrategy {
    items: Vec<Item>,
}

impl SimpleStrategy {
    pub fn new() -> Self {
        SimpleStrategy { items: Vec::new() }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        SimpleStrategy { items }
    }
}

impl Default for SimpleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected value of throwing `mv` at the opponent: raw power scaled by
/// type effectiveness and the same-element bonus. Accuracy and crits are
/// deliberately ignored, this is a heuristic, not an expectation.
fn move_score(mv: &Move, actor: &Character, opponent: &Character, chart: &TypeChart) -> f64 {
    let type_multiplier = chart.multiplier(mv.element, opponent.element);
    let stab = if mv.element == actor.element { 1.2 } else { 1.0 };
    mv.power as f64 * type_multiplier * stab
}

impl DecisionStrategy for SimpleStrategy {
    fn choose_action(&self, ctx: &mut BattleContext<'_>) -> ActionIntent {
        let actor = ctx.actor;

        let low_hp = actor.base().hp > 0
            && actor.current().hp as f64 / actor.base().hp as f64 <= LOW_HP_RATIO;
        if low_hp {
            // Biggest HP heal wins; earlier bag position breaks ties.
            let mut best_heal: Option<(&Item, i32)> = None;
            for item in &self.items {
                if !item.can_use_on(actor) {
                    continue;
                }
                if let Some(amount) = item.heal_hp_amount() {
                    match best_heal {
                        Some((_, top)) if amount <= top => {}
                        _ => best_heal = Some((item, amount)),
                    }
                }
            }
            if let Some((item, _)) = best_heal {
                return ActionIntent::use_item(item.clone());
            }
        }

        // Strict `>` replacement keeps the first of equally scored moves.
        let mut best_move: Option<(&Move, f64)> = None;
        for mv in &actor.moves {
            if actor.current().mp < mv.mp_cost {
                continue;
            }
            let score = move_score(mv, actor, ctx.opponent, ctx.chart);
            match best_move {
                Some((_, top)) if OrderedFloat(score) <= OrderedFloat(top) => {}
                _ => best_move = Some((mv, score)),
            }
        }
        if let Some((mv, _)) = best_move {
            return ActionIntent::attack(mv.clone());
        }

        ActionIntent::Defend
    }
}
