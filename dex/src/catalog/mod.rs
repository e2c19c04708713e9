//! Catalog browsing: search filtering and pagination over fetched entries

mod entry;
mod view;

pub use entry::CatalogEntry;
pub use view::{CatalogConfig, CatalogView, DEFAULT_ITEMS_PER_PAGE};
