//! Combined type effectiveness for a defending type list

use crate::types::{Type, UnknownTypeError};

/// Display bucket of an [`EffectivenessResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SuperWeakness,
    Weakness,
    Resistance,
    SuperResistance,
    Immunity,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::SuperWeakness => "Super Weak (x4)",
            Category::Weakness => "Weak To (x2)",
            Category::Resistance => "Resist (x0.5)",
            Category::SuperResistance => "Super Resist (x0.25)",
            Category::Immunity => "Immune To",
        }
    }
}

/// Classification of attacking types against a defending type list.
///
/// Each list keeps the order in which its types were first encountered while
/// walking the input types and their table rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EffectivenessResult {
    /// Weakness multiplier of 4 or more
    pub super_weaknesses: Vec<Type>,
    /// Weakness multiplier of exactly 2 and never resisted
    pub weaknesses: Vec<Type>,
    /// Resistance multiplier of exactly 0.5 and never a weakness
    pub resistances: Vec<Type>,
    /// Resistance multiplier of 0.25 or less
    pub super_resistances: Vec<Type>,
    /// Union of every input type's immunities
    pub immunities: Vec<Type>,
}

impl EffectivenessResult {
    /// Categories paired with their types, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Type])> {
        [
            (Category::SuperWeakness, self.super_weaknesses.as_slice()),
            (Category::Weakness, self.weaknesses.as_slice()),
            (Category::Resistance, self.resistances.as_slice()),
            (Category::SuperResistance, self.super_resistances.as_slice()),
            (Category::Immunity, self.immunities.as_slice()),
        ]
        .into_iter()
    }

    /// Types listed under a category
    pub fn get(&self, category: Category) -> &[Type] {
        match category {
            Category::SuperWeakness => &self.super_weaknesses,
            Category::Weakness => &self.weaknesses,
            Category::Resistance => &self.resistances,
            Category::SuperResistance => &self.super_resistances,
            Category::Immunity => &self.immunities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, types)| types.is_empty())
    }

    /// Copy in which immunity takes precedence: a type listed as an immunity is
    /// removed from the four multiplier categories.
    pub fn resolved(&self) -> Self {
        let keep = |types: &[Type]| -> Vec<Type> {
            types
                .iter()
                .copied()
                .filter(|t| !self.immunities.contains(t))
                .collect()
        };

        Self {
            super_weaknesses: keep(&self.super_weaknesses),
            weaknesses: keep(&self.weaknesses),
            resistances: keep(&self.resistances),
            super_resistances: keep(&self.super_resistances),
            immunities: self.immunities.clone(),
        }
    }
}

/// Multipliers keyed by type, remembering first-insertion order
#[derive(Default)]
struct Multipliers {
    values: [Option<f32>; 18],
    order: Vec<Type>,
}

impl Multipliers {
    fn scale(&mut self, t: Type, factor: f32) {
        let index = t as usize;
        if let Some(value) = self.values[index].as_mut() {
            *value *= factor;
        } else {
            self.values[index] = Some(factor);
            self.order.push(t);
        }
    }

    fn contains(&self, t: Type) -> bool {
        self.values[t as usize].is_some()
    }

    fn select(&self, predicate: impl Fn(Type, f32) -> bool) -> Vec<Type> {
        self.order
            .iter()
            .copied()
            .filter(|t| self.values[*t as usize].is_some_and(|value| predicate(*t, value)))
            .collect()
    }
}

/// Compute the combined effectiveness for a defending type list.
///
/// Every listed weakness doubles that attacking type's weakness multiplier and every
/// listed resistance halves its resistance multiplier. A type that shows up on both
/// sides at base level is left out of the plain weakness and resistance lists; the
/// super categories ignore the other side. Immunities are accumulated independently
/// and may overlap the other lists, see [`EffectivenessResult::resolved`].
pub fn compute_effectiveness(types: &[Type]) -> EffectivenessResult {
    let mut weakness = Multipliers::default();
    let mut resistance = Multipliers::default();
    let mut immunities: Vec<Type> = Vec::new();

    for t in types {
        let relations = t.relations();

        for weak in relations.weak_against {
            weakness.scale(*weak, 2.0);
        }
        for strong in relations.strong_against {
            resistance.scale(*strong, 0.5);
        }
        for immune in relations.immune_to {
            if !immunities.contains(immune) {
                immunities.push(*immune);
            }
        }
    }

    EffectivenessResult {
        super_weaknesses: weakness.select(|_, m| m >= 4.0),
        weaknesses: weakness.select(|t, m| m == 2.0 && !resistance.contains(t)),
        resistances: resistance.select(|t, m| m == 0.5 && !weakness.contains(t)),
        super_resistances: resistance.select(|_, m| m <= 0.25),
        immunities,
    }
}

/// Resolve type identifiers against the table, then compute effectiveness
pub fn compute_effectiveness_by_name<S: AsRef<str>>(
    names: &[S],
) -> Result<EffectivenessResult, UnknownTypeError> {
    let types = names
        .iter()
        .map(|name| name.as_ref().parse::<Type>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(compute_effectiveness(&types))
}
