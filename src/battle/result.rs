use crate::items::Item;
use schema::Move;

/// Identifies one of the two slots handed to `resolve_turn`. Slot `A` is
/// the first-supplied intent and wins speed ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Outcome of a single executed action. Built once by the engine and then
/// only read; legality failures (dead target, unpaid MP, paralysis skip)
/// are encoded here as `hit = false` outcomes, never as errors.
#[derive(Debug, Clone)]
pub struct TurnActionResult {
    pub actor: Side,
    pub target: Option<Side>,
    pub mv: Option<Move>,
    pub hit: bool,
    pub damage_dealt: i32,
    pub target_dead_after: bool,
    pub fled: bool,
    pub defended: bool,
    /// Echo of the consumed item so the caller can remove it from the
    /// inventory exactly once, and only for an executed action.
    pub used_item: Option<Item>,
    pub messages: Vec<String>,
}

impl TurnActionResult {
    pub(crate) fn new(actor: Side) -> Self {
        TurnActionResult {
            actor,
            target: None,
            mv: None,
            hit: false,
            damage_dealt: 0,
            target_dead_after: false,
            fled: false,
            defended: false,
            used_item: None,
            messages: Vec::new(),
        }
    }
}

/// Everything that happened in one resolved turn, in execution order.
/// `second` is `None` when the first action was a successful flee.
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub first: TurnActionResult,
    pub second: Option<TurnActionResult>,
    pub first_actor: Side,
    pub second_actor: Side,
    pub end_of_turn_messages: Vec<String>,
}
