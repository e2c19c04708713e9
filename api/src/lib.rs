//! Response schemas for the PokeAPI REST API.
//!
//! Everything the upstream service returns is parsed into explicit types here and
//! validated before it reaches the domain crate. A body that does not fit the schema
//! is rejected with [`UpstreamSchemaError`] instead of leaking missing fields.

use thiserror::Error;

pub mod endpoint;
pub mod resources;

pub use endpoint::{DEFAULT_BASE_URL, Endpoint, PokemonRef};
pub use resources::{
    AbilitySlot, NamedResource, NamedResourceList, PokemonResponse, Sprites, StatEntry, TypeSlot,
    parse_pokemon, parse_resource_list,
};

#[derive(Error, Debug)]
pub enum UpstreamSchemaError {
    #[error("Malformed {resource} response: {source}")]
    Malformed {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {resource} field `{field}`: {reason}")]
    InvalidField {
        resource: &'static str,
        field: &'static str,
        reason: String,
    },
}
