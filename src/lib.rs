//! Elemental Adventure Battle Core
//!
//! A turn-based battle engine with elemental type matchups, status
//! ailments, deterministic enemy AI and weighted wild encounters. Every
//! random decision flows through an injectable source, so whole turns can
//! be replayed exactly in tests.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod character;
pub mod encounter;
pub mod errors;
pub mod items;
pub mod progression;
pub mod rng;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `elemental-adventure`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    DamageKind,
    Element,
    EncounterEntry,
    Move,
    Stats,
    StatusAilment,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine types and the per-turn results it produces.
pub use battle::engine::{BattleEngine, DamageDetails};
pub use battle::intent::{ActionIntent, ItemTarget};
pub use battle::result::{Side, TurnActionResult, TurnResult};
pub use battle::type_chart::TypeChart;

// Decision seam for enemy combatants.
pub use battle::ai::{BattleContext, DecisionStrategy, SimpleStrategy};

// Core runtime types.
pub use character::Character;
pub use items::{Inventory, Item, ItemEffect};

// Exploration and growth.
pub use encounter::EncounterTable;
pub use progression::{Archetype, PlayerProgress, StatGrowth};

// Random draw injection.
pub use rng::{DefaultRandom, RandomSource, ScriptedRandom};
