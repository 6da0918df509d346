use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "Token", alias = "token", default)]
    pub token: TokenConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenConfig {
    #[serde(
        rename = "AccessToken",
        alias = "access_token",
        alias = "access-token",
        default
    )]
    pub access_token: String,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The bearer token, refusing an empty one.
    pub fn access_token(&self) -> Result<&str, ConfigError> {
        if self.token.access_token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }

        Ok(&self.token.access_token)
    }
}
