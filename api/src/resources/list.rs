use serde::Deserialize;

use super::from_body;
use crate::UpstreamSchemaError;

const RESOURCE: &str = "pokemon list";

/// `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id taken from the last path segment of the url.
    ///
    /// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`.
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// One page of a paginated list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Parse a list page. Every result must point at a resource with a numeric id.
pub fn parse_resource_list(body: &str) -> Result<NamedResourceList, UpstreamSchemaError> {
    let list: NamedResourceList = from_body(RESOURCE, body)?;

    if let Some(bad) = list.results.iter().find(|r| r.id().is_none()) {
        return Err(UpstreamSchemaError::InvalidField {
            resource: RESOURCE,
            field: "results.url",
            reason: format!("no trailing id in {:?}", bad.url),
        });
    }

    Ok(list)
}
