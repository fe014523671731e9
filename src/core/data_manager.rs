use crate::core::{Pokemon, PokemonService};
use crate::utils::error::Result;

/// Entry point for Pokemon lookups.
///
/// Every call is forwarded to the injected [`PokemonService`] exactly once and
/// its result, success or failure, is returned untouched.
pub struct DataManager<S: PokemonService> {
    service: S,
}

impl<S: PokemonService> DataManager<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        tracing::debug!("Fetching pokemon: {}", name);
        self.service.get_pokemon(name).await
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PokedexError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    enum Outcome {
        Found(Pokemon),
        Missing,
        Status(u16),
    }

    #[derive(Clone)]
    struct StubPokemonService {
        responses: HashMap<String, Outcome>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubPokemonService {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn with_pokemon(mut self, name: &str, pokemon: Pokemon) -> Self {
            self.responses.insert(name.to_string(), Outcome::Found(pokemon));
            self
        }

        fn with_missing(mut self, name: &str) -> Self {
            self.responses.insert(name.to_string(), Outcome::Missing);
            self
        }

        fn with_status(mut self, name: &str, status: u16) -> Self {
            self.responses
                .insert(name.to_string(), Outcome::Status(status));
            self
        }

        async fn calls(&self) -> Vec<String> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl PokemonService for StubPokemonService {
        async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
            self.calls.lock().await.push(name.to_string());
            match self.responses.get(name) {
                Some(Outcome::Found(pokemon)) => Ok(pokemon.clone()),
                Some(Outcome::Status(status)) => Err(PokedexError::UnexpectedStatus {
                    name: name.to_string(),
                    status: *status,
                }),
                Some(Outcome::Missing) | None => Err(PokedexError::NotFound {
                    name: name.to_string(),
                }),
            }
        }
    }

    fn make_pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: Some(4),
            height: Some(6),
            weight: Some(85),
            types: vec!["fire".to_string()],
            ..Pokemon::new(name)
        }
    }

    #[test]
    fn test_get_pokemon_completes_and_emits_pokemon() {
        let name = "charmander";
        let pokemon = make_pokemon(name);
        let service = StubPokemonService::new().with_pokemon(name, pokemon.clone());
        let data_manager = DataManager::new(service);

        let result = tokio_test::block_on(data_manager.get_pokemon(name));

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), pokemon);
    }

    #[tokio::test]
    async fn test_get_pokemon_passes_not_found_through() {
        let service = StubPokemonService::new().with_missing("missingno");
        let data_manager = DataManager::new(service);

        let err = data_manager.get_pokemon("missingno").await.unwrap_err();

        match err {
            PokedexError::NotFound { name } => assert_eq!(name, "missingno"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_pokemon_passes_status_failure_through() {
        let service = StubPokemonService::new().with_status("pikachu", 503);
        let data_manager = DataManager::new(service);

        let err = data_manager.get_pokemon("pikachu").await.unwrap_err();

        match err {
            PokedexError::UnexpectedStatus { name, status } => {
                assert_eq!(name, "pikachu");
                assert_eq!(status, 503);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_pokemon_dispatches_exactly_once() {
        let service = StubPokemonService::new().with_pokemon("bulbasaur", make_pokemon("bulbasaur"));
        let data_manager = DataManager::new(service);

        data_manager.get_pokemon("bulbasaur").await.unwrap();

        assert_eq!(data_manager.service().calls().await, vec!["bulbasaur"]);
    }

    #[tokio::test]
    async fn test_get_pokemon_dispatches_failures_exactly_once() {
        let service = StubPokemonService::new().with_status("mew", 500);
        let data_manager = DataManager::new(service);

        assert!(data_manager.get_pokemon("mew").await.is_err());

        assert_eq!(data_manager.service().calls().await, vec!["mew"]);
    }

    #[tokio::test]
    async fn test_sequential_calls_are_independent() {
        let squirtle = make_pokemon("squirtle");
        let service = StubPokemonService::new()
            .with_pokemon("squirtle", squirtle.clone())
            .with_status("psyduck", 500);
        let data_manager = DataManager::new(service);

        let first = data_manager.get_pokemon("squirtle").await;
        let second = data_manager.get_pokemon("psyduck").await;
        let third = data_manager.get_pokemon("squirtle").await;

        assert_eq!(first.unwrap(), squirtle);
        assert!(matches!(
            second,
            Err(PokedexError::UnexpectedStatus { status: 500, .. })
        ));
        assert_eq!(third.unwrap(), squirtle);
        assert_eq!(
            data_manager.service().calls().await,
            vec!["squirtle", "psyduck", "squirtle"]
        );
    }

    #[tokio::test]
    async fn test_empty_name_is_forwarded_unvalidated() {
        let service = StubPokemonService::new();
        let data_manager = DataManager::new(service);

        let result = data_manager.get_pokemon("").await;

        assert!(matches!(result, Err(PokedexError::NotFound { ref name }) if name.is_empty()));
        assert_eq!(data_manager.service().calls().await, vec![""]);
    }
}
