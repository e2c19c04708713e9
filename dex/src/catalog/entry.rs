use dexter_api::PokemonResponse;

/// One row of the catalog list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    /// Missing for forms without a default sprite
    pub sprite_url: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: u32, name: impl Into<String>, sprite_url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sprite_url,
        }
    }

    /// Case-insensitive substring match on the name, or substring match on the
    /// decimal id. `term` must already be lowercase.
    pub fn matches(&self, term: &str) -> bool {
        self.id.to_string().contains(term) || self.name.to_lowercase().contains(term)
    }
}

impl From<&PokemonResponse> for CatalogEntry {
    fn from(response: &PokemonResponse) -> Self {
        Self {
            id: response.id,
            name: response.name.clone(),
            sprite_url: response.sprites.front_default.clone(),
        }
    }
}
