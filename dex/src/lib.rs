//! Pokedex domain types and derived views.
//!
//! This crate holds the pure logic behind the catalog list page and the pokemon
//! detail page. Nothing here performs I/O: the client crate fetches data and hands it
//! over, and a presentation layer renders what comes back.
//!
//! # Overview
//!
//! ```text
//! dexter-api (upstream response schemas)
//!        │
//!        ▼
//! dexter-dex (types, effectiveness, catalog view) ← THIS CRATE
//!        │
//!        └─> dexter-client (HTTP fetch + refresh sequencing)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 elemental types, backed by the static [`TYPE_EFFECTIVENESS`] table
//! - [`compute_effectiveness`] - Weaknesses, resistances and immunities of a type list
//! - [`CatalogView`] - Search filter and pagination over a fetched catalog
//! - [`PokemonDetail`] - Detail page record mapped from an upstream response
//!
//! # Example Usage
//!
//! ```
//! use dexter_dex::{CatalogConfig, CatalogEntry, CatalogView, Type, compute_effectiveness};
//!
//! let result = compute_effectiveness(&[Type::Water]);
//! assert_eq!(result.weaknesses, vec![Type::Electric, Type::Grass]);
//!
//! let entries = (1..=47)
//!     .map(|id| CatalogEntry::new(id, format!("mon-{}", id), None))
//!     .collect();
//! let mut view = CatalogView::with_entries(entries, CatalogConfig::default());
//! assert_eq!(view.total_pages(), 4);
//!
//! view.set_search_term("25");
//! assert_eq!(view.visible_entries().len(), 1);
//! ```

pub mod catalog;
pub mod detail;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{CatalogConfig, CatalogEntry, CatalogView, DEFAULT_ITEMS_PER_PAGE};
pub use detail::{Ability, BaseStat, PokemonDetail};
pub use query::{
    Category, EffectivenessResult, compute_effectiveness, compute_effectiveness_by_name,
};
pub use types::{TYPE_EFFECTIVENESS, Type, TypeRelations, UnknownTypeError};
