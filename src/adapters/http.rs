use crate::core::{ConfigProvider, Pokemon, PokemonService};
use crate::utils::error::{PokedexError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// `PokemonService` backed by a PokeAPI-compatible REST endpoint.
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()?;

        Self::with_client(client, config.api_base_url())
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let invalid = |reason: String| PokedexError::InvalidConfigValueError {
            field: "api_base_url".to_string(),
            value: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds `{base_url}/pokemon/{name}` with `name` as one percent-encoded
    /// path segment. `"."` and `".."` cannot be sent as a segment and yield `None`.
    fn pokemon_url(&self, name: &str) -> Option<Url> {
        if matches!(name, "." | "..") {
            return None;
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("pokemon")
            .push(name);
        Some(url)
    }
}

#[async_trait::async_trait]
impl PokemonService for PokeApiClient {
    async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let Some(url) = self.pokemon_url(name) else {
            tracing::debug!("'{}' is not a valid path segment, skipping request", name);
            return Err(PokedexError::NotFound {
                name: name.to_string(),
            });
        };
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound {
                name: name.to_string(),
            });
        }

        if !status.is_success() {
            tracing::warn!("Lookup for '{}' failed with status {}", name, status);
            return Err(PokedexError::UnexpectedStatus {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body: PokemonResponse = response.json().await?;
        Ok(body.into())
    }
}

// PokeAPI 回傳格式，只取需要的欄位
#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: Option<u32>,
    name: String,
    height: Option<u32>,
    weight: Option<u32>,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        let mut slots = response.types;
        slots.sort_by_key(|t| t.slot);

        Pokemon {
            name: response.name,
            id: response.id,
            height: response.height,
            weight: response.weight,
            types: slots.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}
