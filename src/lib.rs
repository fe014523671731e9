pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::PokeApiClient;
pub use config::TomlConfig;
pub use crate::core::data_manager::DataManager;
pub use crate::core::lookup::{lookup_all, LookupReport};
pub use crate::core::{ConfigProvider, Pokemon, PokemonService};
pub use utils::error::{ErrorSeverity, PokedexError, Result};
