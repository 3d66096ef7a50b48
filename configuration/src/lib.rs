use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::configs::general::{ChainId, Network, ServiceConfig, DEFAULT_EXPLORER_API_URL};
pub use crate::configs::Config;

mod configs;

async fn read_toml_file(path_file: &Path) -> anyhow::Result<Config> {
    match std::fs::read_to_string(path_file) {
        Ok(content) => match toml::from_str::<Config>(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                anyhow::bail!(
                    "Unable to load data from: {:?}.\n Error: {}",
                    path_file.to_str(),
                    err
                );
            }
        },
        Err(err) => {
            anyhow::bail!(
                "Could not read file: {:?}.\n Error: {}",
                path_file.to_str(),
                err
            );
        }
    }
}

pub async fn read_configuration_from_file(path_file: &str) -> anyhow::Result<Config> {
    let path_file = Path::new(path_file);
    read_toml_file(path_file).await
}

/// Reads `config.toml` from the working directory, falling back to the
/// defaults when the file does not exist.
pub async fn read_configuration() -> anyhow::Result<Config> {
    let path_file = Path::new("config.toml");
    if path_file.exists() {
        read_toml_file(path_file).await
    } else {
        Ok(Config::default())
    }
}

/// Installs the `tracing` subscriber for the consuming application.
/// Filter level is tunable via the `RUST_LOG` env variable.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or(tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::Layer::default())
        .try_init()
        .expect("Failed to install `tracing` subscriber.");
}
