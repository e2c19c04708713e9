//! Domain types: elemental types and the effectiveness table

mod chart;
mod pokemon_type;

pub use chart::{TYPE_EFFECTIVENESS, TypeRelations};
pub use pokemon_type::{Type, UnknownTypeError};
