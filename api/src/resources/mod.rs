mod list;
mod pokemon;

pub use list::{NamedResource, NamedResourceList, parse_resource_list};
pub use pokemon::{AbilitySlot, PokemonResponse, Sprites, StatEntry, TypeSlot, parse_pokemon};

use crate::UpstreamSchemaError;
use serde::de::DeserializeOwned;

/// Deserialize a response body, tagging failures with the resource name
fn from_body<T: DeserializeOwned>(
    resource: &'static str,
    body: &str,
) -> Result<T, UpstreamSchemaError> {
    serde_json::from_str(body).map_err(|source| UpstreamSchemaError::Malformed { resource, source })
}
