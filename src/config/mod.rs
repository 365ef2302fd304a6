mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").ok();
    let mut config = load_from(config_path.as_deref()).await?;
    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    Ok(config)
}

/// Reads the config file. An explicitly named file must exist; the default
/// `config.yaml` is optional and falls back to built-in defaults.
pub async fn load_from(path: Option<&str>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
        None => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            return Ok(Config::default());
        }
    };

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// `PORT` and `PIPELINE_URL` win over the file.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    if let Some(endpoint) = lookup("PIPELINE_URL") {
        config.pipeline.endpoint = endpoint;
    }

    Ok(())
}
