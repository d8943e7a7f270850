//! CLI command implementations
//!
//! `init` writes a default config file; `start` loads the config, seeds the
//! bootstrap users, and enters the serving loop. Store lifecycle is owned
//! here: repositories are created at startup and dropped when the server
//! exits.

use std::fs;
use std::path::Path;

use clap::Parser;

use crate::http_server::{HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default configuration file
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = ServerConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(path, content)?;

    println!("Wrote default config to {}", path.display());
    println!("Add users to the \"users\" array before starting the server.");
    Ok(())
}

/// Load the config and run the server until it exits
pub fn start(path: &Path) -> CliResult<()> {
    let config = load_config(path)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    let server = HttpServer::with_config(config);

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}

/// Load and validate configuration from file
pub fn load_config(path: &Path) -> CliResult<ServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: ServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

/// Reject configs that could not serve requests correctly
fn validate_config(config: &ServerConfig) -> CliResult<()> {
    if config.jwt.secret.is_empty() {
        return Err(CliError::config_error("jwt.secret must not be empty"));
    }

    if config.jwt.token_ttl_secs <= 0 {
        return Err(CliError::config_error("jwt.token_ttl_secs must be > 0"));
    }

    for user in &config.users {
        if user.username.is_empty() {
            return Err(CliError::config_error("users[].username must not be empty"));
        }
    }

    Ok(())
}
