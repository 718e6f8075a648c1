//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod check;
mod transfer;

pub use check::CheckCommands;
pub use transfer::TransferCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Transfer observation
    Transfer {
        #[command(subcommand)]
        command: TransferCommands,
    },
    /// Directory checks before a transfer
    Check {
        #[command(subcommand)]
        command: CheckCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Transfer { command } => transfer::handle_transfer_command(command, config).await,
        Commands::Check { command } => check::handle_check_command(command, config).await,
    }
}
