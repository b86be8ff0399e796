//! Per-invocation context handed to every command handler.

use crate::api::{ApiClient, Credential};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "FXSHEET_TOKEN";

pub struct AppContext {
    pub config: Config,
    pub api_base_url: String,
    pub credential: Option<Credential>,
}

impl AppContext {
    /// Resolve overrides: CLI flags beat the environment, which beats the config.
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let api_base_url = cli
            .api
            .clone()
            .unwrap_or_else(|| config.api_base_url.clone());

        let token = cli
            .token
            .clone()
            .or_else(|| env::var(TOKEN_ENV).ok())
            .or_else(|| config.access_token.clone())
            .filter(|t| !t.trim().is_empty());

        Self {
            config,
            api_base_url,
            credential: token.map(Credential::bearer),
        }
    }

    pub fn client(&self) -> AppResult<ApiClient> {
        ApiClient::with_timeout(
            &self.api_base_url,
            self.credential.clone(),
            Duration::from_secs(self.config.timeout_secs),
        )
    }

    /// Export directory: explicit `--dir`, else the configured one.
    pub fn output_dir(&self, dir: &Option<String>) -> PathBuf {
        expand_tilde(dir.as_deref().unwrap_or(&self.config.output_dir))
    }
}
