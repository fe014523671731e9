use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;

const EXIT_STATUS_HELP: &str = "Exit status:
  0  every name was found, or the only failures were unknown names (reported as warnings)
  1  the service rejected a request, or a record could not be written as JSON
  2  the service was unreachable or returned a server error
  3  invalid configuration or an I/O failure";

#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex-data")]
#[command(about = "Look up Pokemon records from a PokeAPI-compatible service")]
#[command(after_help = EXIT_STATUS_HELP)]
pub struct CliConfig {
    #[arg(required = true, help = "Pokemon names to look up")]
    pub names: Vec<String>,

    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "TOML file with a [service] table; overrides the service flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
