//! CLI for spaboot.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use spaboot_core::config::{self, SpabootConfig};
use std::path::PathBuf;

use commands::{
    run_completions, run_config, run_deploy, run_flags, run_man, run_ws_url, DeployOverrides,
};

/// Top-level CLI for spaboot.
#[derive(Debug, Parser)]
#[command(name = "spaboot")]
#[command(about = "spaboot: endpoint flags and bundle deployment for the web client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the websocket URL derived from the API URL.
    WsUrl {
        /// API base URL; defaults to the configured value or environment.
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Print the JSON flags record handed to the front-end at start.
    Flags {
        /// API base URL; defaults to the configured value or environment.
        #[arg(long)]
        api_url: Option<String>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Copy the built bundle into the API project's directory.
    Deploy {
        /// Build directory (default from config: build).
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,
        /// Target directory (default from config: ../api/web-client).
        #[arg(long, value_name = "DIR")]
        target_dir: Option<PathBuf>,
    },

    /// Show the config file location and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::WsUrl { api_url } => run_ws_url(&load_config()?, api_url)?,
            CliCommand::Flags { api_url, pretty } => run_flags(&load_config()?, api_url, pretty)?,
            CliCommand::Deploy {
                build_dir,
                target_dir,
            } => {
                let base = std::env::current_dir()?;
                let overrides = DeployOverrides {
                    build_dir,
                    target_dir,
                };
                run_deploy(&load_config()?, &overrides, &base)?;
            }
            CliCommand::Config => run_config(&load_config()?)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config() -> Result<SpabootConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
