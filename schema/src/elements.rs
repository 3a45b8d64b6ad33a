use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Element {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Element {
    /// Parse an element from an external name, case-insensitively.
    /// Returns `None` for unknown names so that chart loading can skip them.
    pub fn from_name(name: &str) -> Option<Element> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Element::Normal),
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "grass" => Some(Element::Grass),
            "electric" => Some(Element::Electric),
            _ => None,
        }
    }
}

/// Cosmetic classification of a move's damage. The damage formula treats
/// both kinds identically; the tag exists for rendering and data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Physical,
    Magical,
}
