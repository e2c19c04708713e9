use serde::Deserialize;

use super::{NamedResource, from_body};
use crate::UpstreamSchemaError;

const RESOURCE: &str = "pokemon";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    /// Null for some alternate forms
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// Body of `GET pokemon/{id or name}`, reduced to the fields the app reads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl PokemonResponse {
    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }
}

/// Parse and validate a pokemon body. Types come back sorted by slot.
pub fn parse_pokemon(body: &str) -> Result<PokemonResponse, UpstreamSchemaError> {
    let mut pokemon: PokemonResponse = from_body(RESOURCE, body)?;

    if pokemon.id == 0 {
        return Err(invalid("id", "must be positive".to_string()));
    }
    if pokemon.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty".to_string()));
    }
    if pokemon.types.is_empty() {
        return Err(invalid(
            "types",
            format!("pokemon #{} has no types", pokemon.id),
        ));
    }

    pokemon.types.sort_by_key(|slot| slot.slot);
    Ok(pokemon)
}

fn invalid(field: &'static str, reason: String) -> UpstreamSchemaError {
    UpstreamSchemaError::InvalidField {
        resource: RESOURCE,
        field,
        reason,
    }
}
