// Elemental Adventure Schema - Shared type definitions
// This crate contains the core enums and value types that are shared between
// the battle engine and the data-loading layer, so that enemies, moves and
// encounter tables can be deserialized straight into domain-ready shapes.

// Re-export the main types
pub use elements::*;
pub use encounters::*;
pub use moves::*;
pub use stats::*;
pub use status::*;

pub mod elements;
pub mod encounters;
pub mod moves;
pub mod stats;
pub mod status;
