//! Layered application configuration.
//!
//! Priority, lowest to highest: built-in defaults, config file, `CSUI_`
//! prefixed environment variables (`CSUI_SERVER__PORT=8080`), then explicit
//! CLI flags (or their plain env fallbacks such as `PORT`).

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Interface to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Base URL of the scoring backend API
    #[arg(long, env = "REPORTS_API_URL")]
    pub reports_api_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reports: ReportsConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    /// Base URL of the scoring API; `reports/generate/` is resolved against it.
    pub api_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Where the login form posts its credentials.
    pub login_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("reports.api_base_url", "http://127.0.0.1:8000/api")?
            .set_default("reports.timeout_secs", 30)?
            .set_default("auth.login_url", "/auth/login")?;

        // 2. Config file: named explicitly, or ./config.yaml when present
        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::with_name(path).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        // 3. Environment variables, e.g. CSUI_REPORTS__TIMEOUT_SECS=10
        builder = builder.add_source(
            Environment::with_prefix("CSUI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (clap already folded in their env fallbacks)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(url) = cli.reports_api_url {
            builder = builder.set_override("reports.api_base_url", url)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "credit-scoring-ui",
            "--port",
            "4000",
            "--reports-api-url",
            "http://scoring:8000/api",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(4000));
        assert_eq!(cli.reports_api_url.as_deref(), Some("http://scoring:8000/api"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let err = AppConfig::load_from_args(["credit-scoring-ui", "--jwt-required"]).unwrap_err();
        assert!(err.to_string().contains("--jwt-required"));
    }
}
