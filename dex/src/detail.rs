//! Detail page record

use dexter_api::PokemonResponse;

use crate::query::{EffectivenessResult, compute_effectiveness};
use crate::types::{Type, UnknownTypeError};

const CRY_URL_BASE: &str = "https://pokemoncries.com/cries";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStat {
    pub name: String,
    pub base_stat: u32,
}

/// Everything the detail page shows for one pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    /// Slot order
    pub types: Vec<Type>,
    pub abilities: Vec<Ability>,
    /// Hectograms
    pub weight: u32,
    pub stats: Vec<BaseStat>,
}

impl PokemonDetail {
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    pub fn cry_url(&self) -> String {
        format!("{}/{}.mp3", CRY_URL_BASE, self.id)
    }

    /// Combined effectiveness of this pokemon's types
    pub fn effectiveness(&self) -> EffectivenessResult {
        compute_effectiveness(&self.types)
    }
}

impl TryFrom<&PokemonResponse> for PokemonDetail {
    type Error = UnknownTypeError;

    fn try_from(response: &PokemonResponse) -> Result<Self, Self::Error> {
        let types = response
            .type_names()
            .map(str::parse::<Type>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: response.id,
            name: response.name.clone(),
            sprite_url: response.sprites.front_default.clone(),
            types,
            abilities: response
                .abilities
                .iter()
                .map(|slot| Ability {
                    name: slot.ability.name.clone(),
                    is_hidden: slot.is_hidden,
                })
                .collect(),
            weight: response.weight,
            stats: response
                .stats
                .iter()
                .map(|entry| BaseStat {
                    name: entry.stat.name.clone(),
                    base_stat: entry.base_stat,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexter_api::parse_pokemon;
    use serde_json::json;

    fn response(types: &[&str]) -> PokemonResponse {
        let slots: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "slot": i + 1, "type": { "name": name, "url": "u" } }))
            .collect();
        let body = json!({
            "id": 330,
            "name": "flygon",
            "weight": 820,
            "sprites": { "front_default": "https://example.test/330.png" },
            "types": slots,
            "abilities": [
                { "ability": { "name": "levitate", "url": "u" }, "is_hidden": false, "slot": 1 }
            ],
            "stats": [
                { "base_stat": 80, "effort": 0, "stat": { "name": "hp", "url": "u" } },
                { "base_stat": 100, "effort": 1, "stat": { "name": "attack", "url": "u" } }
            ]
        });
        parse_pokemon(&body.to_string()).unwrap()
    }

    #[test]
    fn test_from_response() {
        let detail = PokemonDetail::try_from(&response(&["ground", "dragon"])).unwrap();

        assert_eq!(detail.id, 330);
        assert_eq!(detail.types, vec![Type::Ground, Type::Dragon]);
        assert_eq!(
            detail.abilities,
            vec![Ability {
                name: "levitate".to_string(),
                is_hidden: false
            }]
        );
        assert_eq!(detail.stats[1].name, "attack");
        assert_eq!(detail.stats[1].base_stat, 100);
        assert_eq!(detail.weight_kg(), 82.0);
        assert_eq!(detail.cry_url(), "https://pokemoncries.com/cries/330.mp3");
    }

    #[test]
    fn test_unknown_type() {
        let err = PokemonDetail::try_from(&response(&["ground", "shadow"])).unwrap_err();
        assert_eq!(err, UnknownTypeError("shadow".to_string()));
    }

    #[test]
    fn test_effectiveness() {
        let detail = PokemonDetail::try_from(&response(&["ground", "dragon"])).unwrap();
        let result = detail.effectiveness();

        assert_eq!(result.super_weaknesses, vec![Type::Ice]);
        assert_eq!(result.immunities, vec![Type::Electric]);
        assert_eq!(result, compute_effectiveness(&[Type::Ground, Type::Dragon]));
    }
}
