//! CLI argument definitions using clap
//!
//! Commands:
//! - bloglist init --config <path>
//! - bloglist start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bloglist - A token-authenticated blogging REST API
#[derive(Parser, Debug)]
#[command(name = "bloglist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./bloglist.json")]
        config: PathBuf,
    },

    /// Start the API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./bloglist.json")]
        config: PathBuf,
    },
}
