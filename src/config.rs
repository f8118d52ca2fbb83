use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub environment: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let server_port = match lookup("PORT").filter(|value| !value.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid u16, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let environment = lookup("NODE_ENV");

        Ok(Self {
            server_host,
            server_port,
            environment,
        })
    }

    /// Environment name as printed in the startup line.
    pub fn environment_label(&self) -> &str {
        self.environment.as_deref().unwrap_or("undefined")
    }
}
