pub mod data_manager;
pub mod lookup;

pub use crate::domain::model::Pokemon;
pub use crate::domain::ports::{ConfigProvider, PokemonService};
pub use crate::utils::error::Result;
