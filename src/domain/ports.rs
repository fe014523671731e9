use crate::domain::model::Pokemon;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote lookup service for Pokemon records.
#[async_trait]
pub trait PokemonService: Send + Sync {
    async fn get_pokemon(&self, name: &str) -> Result<Pokemon>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}
