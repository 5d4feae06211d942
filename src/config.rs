//! Service configuration.
//!
//! Loaded once at startup from a TOML file whose path comes from the
//! `CONFIG_PATH` environment variable or the `--config` flag, with
//! `ROLLCALL_`-prefixed environment variables layered on top. A missing
//! path or file is fatal: the process must not serve without storage and
//! listen settings.

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::path::Path;

use crate::error::RollcallError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub env: String,
    pub storage_path: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    pub http_server: HttpServer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpServer {
    pub address: String,
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Resolve the config file path and extract the layered configuration.
    pub fn load() -> Result<Self, RollcallError> {
        let path = config_path().ok_or_else(|| {
            figment::Error::from(
                "config file path is required (set CONFIG_PATH or pass --config <path>)"
                    .to_string(),
            )
        })?;
        if !Path::new(&path).exists() {
            return Err(figment::Error::from(format!("config file not found: {path}")).into());
        }

        let cfg: Config = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("ROLLCALL_").split("__"))
            .extract()?;
        Ok(cfg)
    }

    /// `sqlite:` connection URL for the configured storage file.
    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.storage_path)
    }
}

fn config_path() -> Option<String> {
    if let Ok(path) = std::env::var("CONFIG_PATH")
        && !path.is_empty()
    {
        return Some(path);
    }

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(rest) = arg.strip_prefix("--config=") {
            return Some(rest.to_string());
        }
    }
    None
}
