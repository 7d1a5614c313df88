pub mod models;

pub use models::{Config, Credentials, DEFAULT_API_BASE_URL};

use crate::error::{Error, Result};
use anyhow::Context;
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

/// Source of the provider credentials and the zone they apply to.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Result<Credentials>;
}

impl CredentialProvider for Config {
    fn credentials(&self) -> Result<Credentials> {
        self.validate()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Credentials {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            domain: self.domain.clone(),
        })
    }
}

pub fn load_config(config_file: impl AsRef<Path>) -> anyhow::Result<Config> {
    let config_file = config_file.as_ref();
    let mut file = File::open(config_file)
        .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", config_file.display()))?;

    Ok(config)
}
