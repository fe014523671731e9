use clap::Parser;
use pokedex_data::utils::{logger, validation::Validate};
use pokedex_data::{lookup_all, CliConfig, DataManager, PokeApiClient, PokedexError, TomlConfig};

fn build_client(config: &CliConfig) -> Result<PokeApiClient, PokedexError> {
    match &config.config {
        Some(path) => {
            tracing::debug!("Loading service config from {}", path.display());
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            PokeApiClient::new(&toml_config)
        }
        None => {
            config.validate()?;
            PokeApiClient::new(config)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pokedex-data CLI");
    tracing::debug!("CLI config: {:?}", config);

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };
    tracing::info!("Using lookup service at {}", client.base_url());

    let data_manager = DataManager::new(client);
    let mut stdout = std::io::stdout().lock();

    match lookup_all(&data_manager, &config.names, &mut stdout).await {
        Ok(report) => {
            let code = report.exit_code();
            if code > 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!("Writing results failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
