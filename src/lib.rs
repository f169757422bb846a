pub mod cli;
pub mod core;
pub mod providers;

use crate::core::Converter;
use crate::core::config::AppConfig;
use crate::providers::ExchangeRateApiProvider;
use anyhow::Result;
use tracing::{debug, info};

/// Commands that run against a loaded configuration.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: String,
    },
    Currencies,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let catalog = config.catalog();
    match command {
        AppCommand::Convert { from, to, amount } => {
            let provider = ExchangeRateApiProvider::from_config(&config.exchangerate_api());
            let converter = Converter::new(provider);
            cli::convert::run(&converter, &catalog, &from, &to, &amount).await?;
            Ok(())
        }
        AppCommand::Currencies => cli::currencies::run(&catalog),
    }
}
