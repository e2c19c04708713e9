use std::fmt;

/// Public PokeAPI v2 root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Lookup key for a single pokemon: numeric id or name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl PokemonRef {
    /// Parse user input. Digits become an id, anything else a lowercased name.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(input.to_lowercase()),
        }
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

/// Read-only endpoints consumed by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// GET pokemon?offset=OFFSET&limit=LIMIT
    PokemonList { offset: u32, limit: u32 },

    /// GET pokemon/ID_OR_NAME
    Pokemon(PokemonRef),
}

impl Endpoint {
    /// Path and query relative to the API root
    pub fn path(&self) -> String {
        match self {
            Self::PokemonList { offset, limit } => {
                format!("pokemon?offset={}&limit={}", offset, limit)
            }
            Self::Pokemon(pokemon) => format!("pokemon/{}", pokemon),
        }
    }

    /// Absolute URL under `base`, tolerating a trailing slash on the base
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}
