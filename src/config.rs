//! Layered application configuration.
//!
//! Priority, lowest first: built-in defaults, config file, `CHAT_`-prefixed
//! environment variables (`CHAT_SERVER__PORT=8000`), CLI flags and their
//! plain env fallbacks (`PORT`, `HOST`, `LOG_JSON`).

use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Config file picked up from the working directory when none is given.
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

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this get `408 Request Timeout`.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl ServerConfig {
    /// `host:port` bind address.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load from defaults, files and environment, ignoring process arguments.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args().take(1))
    }

    /// Load with `args` parsed as the command line (first item is the binary).
    ///
    /// Invalid flags, an unreadable config file and values that do not
    /// deserialize all surface as [`Error::Config`](crate::error::Error::Config).
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("logging.filter", "info")?
            .set_default("logging.json", false)?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path).required(true)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_invalid_flag_is_config_error() {
        let result = AppConfig::load_from_args(["chat-stories", "--port", "not-a-port"]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "chat-stories",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--log-json",
            "true",
        ])
        .unwrap();

        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.log_json, Some(true));
    }

    #[test]
    fn test_address() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 4000,
            request_timeout_secs: 5,
        };
        assert_eq!(server.address(), "localhost:4000");
    }
}
