//! Async PokeAPI client.
//!
//! [`DexClient`] fetches list pages and pokemon records, validates them against the
//! schemas in `dexter-api`, and maps them into `dexter-dex` types. Failed fetches are
//! reported as errors and never retried; [`DexClient::refresh_catalog`] and
//! [`DexClient::load_detail`] log them instead and leave the caller's state alone.

mod config;
mod error;
mod refresh;

use anyhow::{Context, Result};
use dexter_api::{Endpoint, NamedResourceList, PokemonResponse, parse_pokemon, parse_resource_list};
use futures_util::{StreamExt, TryStreamExt, stream};

pub use config::ClientConfig;
pub use error::FetchError;
pub use refresh::apply_catalog;

pub use dexter_api::{PokemonRef, UpstreamSchemaError};
pub use dexter_dex::{CatalogEntry, CatalogView, PokemonDetail, UnknownTypeError};

/// HTTP client for the upstream API
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl DexClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one raw page of the pokemon list
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<NamedResourceList> {
        let body = self
            .get_text(&Endpoint::PokemonList { offset, limit })
            .await?;
        parse_resource_list(&body).context("Invalid pokemon list response")
    }

    /// Fetch and validate a raw pokemon record
    pub async fn fetch_pokemon_response(&self, pokemon: &PokemonRef) -> Result<PokemonResponse> {
        let body = self.get_text(&Endpoint::Pokemon(pokemon.clone())).await?;
        parse_pokemon(&body).with_context(|| format!("Invalid response for pokemon {}", pokemon))
    }

    /// Fetch the detail page record for one pokemon
    pub async fn fetch_pokemon(&self, pokemon: impl Into<PokemonRef>) -> Result<PokemonDetail> {
        let pokemon = pokemon.into();
        let response = self.fetch_pokemon_response(&pokemon).await?;
        PokemonDetail::try_from(&response)
            .with_context(|| format!("Unsupported types for pokemon {}", pokemon))
    }

    /// Fetch the whole catalog: one list request, then one detail request per entry.
    ///
    /// Entries come back in list order. Any failed request fails the whole fetch.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let list = self.fetch_page(0, self.config.catalog_limit).await?;
        let ids: Vec<u32> = list.results.iter().filter_map(|r| r.id()).collect();

        tracing::debug!(
            listed = ids.len(),
            total = list.count,
            "Fetching catalog details"
        );

        stream::iter(ids)
            .map(|id| self.fetch_entry(id))
            .buffered(self.config.detail_concurrency.max(1))
            .try_collect()
            .await
    }

    /// Fetch the catalog into `view`, keeping its previous state on failure
    pub async fn refresh_catalog(&self, view: &mut CatalogView) -> bool {
        apply_catalog(view, self.fetch_catalog().await)
    }

    /// Fetch a detail record, logging and returning `None` on failure
    pub async fn load_detail(&self, pokemon: impl Into<PokemonRef>) -> Option<PokemonDetail> {
        let pokemon = pokemon.into();
        match self.fetch_pokemon(pokemon.clone()).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::error!(
                    pokemon = %pokemon,
                    error = %format!("{:#}", e),
                    "Error fetching pokemon"
                );
                None
            }
        }
    }

    async fn fetch_entry(&self, id: u32) -> Result<CatalogEntry> {
        let response = self.fetch_pokemon_response(&PokemonRef::Id(id)).await?;
        Ok(CatalogEntry::from(&response))
    }

    async fn get_text(&self, endpoint: &Endpoint) -> Result<String> {
        let url = endpoint.url(&self.config.base_url);
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Canned response for one request target
    struct Route {
        target: String,
        delay_ms: u64,
        status: u16,
        body: String,
    }

    impl Route {
        fn ok(target: &str, delay_ms: u64, body: String) -> Self {
            Self {
                target: target.to_string(),
                delay_ms,
                status: 200,
                body,
            }
        }
    }

    fn list_body(ids: &[u32]) -> String {
        let results: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"name":"mon-{id}","url":"https://pokeapi.co/api/v2/pokemon/{id}/"}}"#
                )
            })
            .collect();
        format!(
            r#"{{"count":{},"next":null,"previous":null,"results":[{}]}}"#,
            ids.len(),
            results.join(",")
        )
    }

    fn pokemon_body(id: u32) -> String {
        format!(
            r#"{{"id":{id},"name":"mon-{id}","weight":10,"sprites":{{"front_default":null}},"types":[{{"slot":1,"type":{{"name":"normal","url":"u"}}}}]}}"#
        )
    }

    /// Serve `routes` on an ephemeral local port, returning the API root.
    /// Unknown targets get a 404.
    async fn serve(routes: Vec<Route>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("");
                    let (delay_ms, status, body) = match routes.iter().find(|r| r.target == target)
                    {
                        Some(route) => (route.delay_ms, route.status, route.body.clone()),
                        None => (0, 404, "{}".to_string()),
                    };

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let response = format!(
                        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}/api/v2", addr)
    }

    fn local_client(base_url: String) -> DexClient {
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_catalog_limit(3)
            .with_timeout(Duration::from_secs(5));
        DexClient::new(config).unwrap()
    }

    const LIST_TARGET: &str = "/api/v2/pokemon?offset=0&limit=3";

    fn unreachable_client() -> DexClient {
        // Nothing listens on the discard port
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9/api/v2")
            .with_timeout(Duration::from_secs(2));
        DexClient::new(config).unwrap()
    }

    #[test]
    fn test_new_keeps_config() {
        let client = DexClient::new(ClientConfig::default().with_catalog_limit(151)).unwrap();
        assert_eq!(client.config().catalog_limit, 151);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_view() {
        let client = unreachable_client();
        let entries = vec![CatalogEntry::new(1, "bulbasaur", None)];
        let mut view = CatalogView::with_entries(entries.clone(), Default::default());

        assert!(!client.refresh_catalog(&mut view).await);
        assert_eq!(view.entries(), entries.as_slice());
    }

    #[tokio::test]
    async fn test_load_detail_failure_is_none() {
        let client = unreachable_client();
        assert!(client.load_detail(25u32).await.is_none());
        assert!(client.fetch_pokemon(PokemonRef::parse("pikachu")).await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_catalog_keeps_list_order() {
        // Slowest response first, fastest in the middle
        let base = serve(vec![
            Route::ok(LIST_TARGET, 0, list_body(&[3, 1, 2])),
            Route::ok("/api/v2/pokemon/3", 150, pokemon_body(3)),
            Route::ok("/api/v2/pokemon/1", 0, pokemon_body(1)),
            Route::ok("/api/v2/pokemon/2", 60, pokemon_body(2)),
        ])
        .await;
        let client = local_client(base);

        let entries = client.fetch_catalog().await.unwrap();
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(entries[0].name, "mon-3");

        let mut view = CatalogView::default();
        assert!(client.refresh_catalog(&mut view).await);
        assert_eq!(view.entries(), entries.as_slice());
    }

    #[tokio::test]
    async fn test_fetch_catalog_fails_on_status() {
        let base = serve(vec![
            Route::ok(LIST_TARGET, 0, list_body(&[3, 1, 2])),
            Route::ok("/api/v2/pokemon/3", 0, pokemon_body(3)),
            Route::ok("/api/v2/pokemon/1", 0, pokemon_body(1)),
        ])
        .await;
        let client = local_client(base);

        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Status { status: 404, .. })
        ));

        let entries = vec![CatalogEntry::new(7, "squirtle", None)];
        let mut view = CatalogView::with_entries(entries.clone(), Default::default());
        assert!(!client.refresh_catalog(&mut view).await);
        assert_eq!(view.entries(), entries.as_slice());
    }

    #[tokio::test]
    async fn test_fetch_catalog_rejects_malformed_detail() {
        let base = serve(vec![
            Route::ok(LIST_TARGET, 0, list_body(&[3, 1, 2])),
            Route::ok("/api/v2/pokemon/3", 0, pokemon_body(3)),
            Route::ok("/api/v2/pokemon/1", 0, "not json".to_string()),
            Route::ok("/api/v2/pokemon/2", 0, pokemon_body(2)),
        ])
        .await;
        let client = local_client(base);

        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UpstreamSchemaError>(),
            Some(UpstreamSchemaError::Malformed {
                resource: "pokemon",
                ..
            })
        ));
    }
}
