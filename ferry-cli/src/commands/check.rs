//! Directory check command handlers
//!
//! Lists a local or remote directory through the runner and prints the
//! formatted listing. A failed check prints the error instead of a listing.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use ferry_client::ClientError;
use ferry_core::domain::listing::DirectoryListing;
use ferry_core::dto::listing::{LocalListingQuery, RemoteListingQuery};
use ferry_monitor::{format_fetch_error, format_listing};

use crate::config::Config;

/// File filters shared by both checks
#[derive(Args)]
pub struct FilterArgs {
    /// Only include files matching this pattern
    #[arg(long, default_value = "")]
    include: String,

    /// Exclude files matching this pattern
    #[arg(long, default_value = "")]
    exclude: String,
}

/// Check subcommands
#[derive(Subcommand)]
pub enum CheckCommands {
    /// List a directory on the runner's machine
    Local {
        /// Directory to list
        dir: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List a directory on a transfer server
    Remote {
        /// Directory to list
        dir: String,

        /// Transfer server URL, e.g. http://my.server.com:8080
        #[arg(long)]
        server: String,

        /// Authentication token for the transfer server
        #[arg(long, env = "FERRY_AUTH_TOKEN", default_value = "", hide_env_values = true)]
        auth_token: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Handle check commands
pub async fn handle_check_command(command: CheckCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        CheckCommands::Local { dir, filters } => {
            let query = LocalListingQuery {
                local_dir: dir,
                include: filters.include,
                exclude: filters.exclude,
            };
            println!("{}", query.describe().bold());
            print_listing(client.check_local_dir(&query).await);
        }
        CheckCommands::Remote {
            dir,
            server,
            auth_token,
            filters,
        } => {
            let query = RemoteListingQuery {
                remote_dir: dir,
                include: filters.include,
                exclude: filters.exclude,
                server,
                auth_token,
            };
            println!("{}", query.describe().bold());
            print_listing(client.check_remote_dir(&query).await);
        }
    }

    Ok(())
}

/// Print a listing and its summary, or the error that prevented it
fn print_listing(result: Result<DirectoryListing, ClientError>) {
    match result {
        Ok(listing) => {
            let formatted = format_listing(&listing);
            for line in &formatted.lines {
                println!("{}", line);
            }
            println!("{}", formatted.summary.bold());
        }
        Err(error) => {
            println!("{}", format_fetch_error(&error).red());
        }
    }
}
