use schema::Element;
use std::collections::HashMap;

/// Pure (attack element, defense element) -> multiplier lookup.
/// Unregistered pairs resolve to 1.0, so a lookup never fails.
#[derive(Debug, Clone)]
pub struct TypeChart {
    chart: HashMap<Element, HashMap<Element, f64>>,
}

impl TypeChart {
    pub fn new(chart: HashMap<Element, HashMap<Element, f64>>) -> Self {
        TypeChart { chart }
    }

    /// Builds a chart from an external nested name-keyed mapping, e.g. a
    /// parsed JSON object. Unknown element names on either axis are
    /// skipped, not an error, so data files can carry forward-looking
    /// entries.
    pub fn from_named(raw: &HashMap<String, HashMap<String, f64>>) -> Self {
        let mut chart: HashMap<Element, HashMap<Element, f64>> = HashMap::new();
        for (attack_name, row) in raw {
            let Some(attack) = Element::from_name(attack_name) else {
                continue;
            };
            let entry = chart.entry(attack).or_default();
            for (defend_name, multiplier) in row {
                if let Some(defend) = Element::from_name(defend_name) {
                    entry.insert(defend, *multiplier);
                }
            }
        }
        TypeChart { chart }
    }

    pub fn multiplier(&self, attack: Element, defend: Element) -> f64 {
        self.chart
            .get(&attack)
            .and_then(|row| row.get(&defend))
            .copied()
            .unwrap_or(1.0)
    }
}

impl Default for TypeChart {
    /// The built-in five-element chart: Fire>Grass>Water>Fire cycle plus
    /// Electric>Water, with 0.5 against the reverse cycle and same
    /// element; Normal is neutral against everything including itself.
    fn default() -> Self {
        use Element::*;
        let mut chart = HashMap::new();
        chart.insert(
            Fire,
            HashMap::from([(Grass, 2.0), (Water, 0.5), (Fire, 0.5), (Electric, 1.0), (Normal, 1.0)]),
        );
        chart.insert(
            Water,
            HashMap::from([(Fire, 2.0), (Grass, 0.5), (Water, 0.5), (Electric, 0.5), (Normal, 1.0)]),
        );
        chart.insert(
            Grass,
            HashMap::from([(Water, 2.0), (Fire, 0.5), (Grass, 0.5), (Electric, 1.0), (Normal, 1.0)]),
        );
        chart.insert(
            Electric,
            HashMap::from([(Water, 2.0), (Grass, 0.5), (Electric, 0.5), (Fire, 1.0), (Normal, 1.0)]),
        );
        chart.insert(
            Normal,
            HashMap::from([(Fire, 1.0), (Water, 1.0), (Grass, 1.0), (Electric, 1.0), (Normal, 1.0)]),
        );
        TypeChart { chart }
    }
}
