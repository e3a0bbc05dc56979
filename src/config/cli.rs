//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mt-addrlist: MikroTik address-list script generator
///
/// Compiles a YAML catalog of address lists into RouterOS import scripts.
/// Without a subcommand, serves the scripts over HTTP.
#[derive(Debug, Parser)]
#[command(name = "mt-addrlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the YAML configuration file
    #[arg(long, short, default_value = "config.yaml", global = true)]
    pub config: PathBuf,

    /// Address to listen on in serve mode
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for mt-addrlist
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render scripts to stdout instead of serving them
    Render {
        /// Render only the named list (default: all lists)
        #[arg(long)]
        list: Option<String>,
    },

    /// Validate the configuration file and exit
    Check,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "config.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the process environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
