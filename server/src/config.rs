//! Server configuration parsed from environment variables.

use client::config::BackendConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Hosted backend the browser talks to; rendered into the shell.
    pub backend: BackendConfig,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`: `http(s)` base URL, trailing `/` trimmed
    /// - `SUPABASE_ANON_KEY`: public anon key
    ///
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = required(&lookup, "SUPABASE_URL")?;
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid { var: "SUPABASE_URL", value: url });
        }
        let backend =
            BackendConfig::new(&url, &anon_key).ok_or(ConfigError::Invalid { var: "SUPABASE_URL", value: url })?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        };

        Ok(Self { backend, port })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ConfigError::Missing { var }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
