//! Server configuration.
//!
//! Values are resolved from, in increasing precedence: built-in defaults, an
//! optional TOML file, then environment variables and command line flags.

use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Command line flags for the calculator server.
#[derive(Debug, Default, Parser)]
#[command(name = "retirement-tax-api", version, about = "Retirement income tax calculator API")]
pub struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, env = "TAX_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long, env = "TAX_API_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Front-end origin allowed by CORS.
    #[arg(long, env = "TAX_API_ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Log filter: a bare level ("info") or a full EnvFilter directive.
    #[arg(long, env = "TAX_API_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Append log records to this file as well as stdout.
    #[arg(long, env = "TAX_API_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Contents of the optional TOML file. Every key may be omitted.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in '{}'", path.display()))
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origin: "http://localhost:3001".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ServerConfig {
    /// Layers the file values, then the command line values, over the defaults.
    pub fn resolve(
        file: FileConfig,
        cli: Cli,
    ) -> Self {
        let defaults = Self::default();

        Self {
            host: cli.host.or(file.host).unwrap_or(defaults.host),
            port: cli.port.or(file.port).unwrap_or(defaults.port),
            allowed_origin: cli
                .allowed_origin
                .or(file.allowed_origin)
                .unwrap_or(defaults.allowed_origin),
            log_level: cli.log_level.or(file.log_level).unwrap_or(defaults.log_level),
            log_file: cli.log_file.or(file.log_file),
        }
    }

    /// Reads the config file named on the command line (if any) and resolves
    /// the final configuration.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, cli))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
