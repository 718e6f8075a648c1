//! Transfer command handlers
//!
//! Handles listing transfers, showing and aborting one, and watching a
//! transfer's state and log until it is done.

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use clap::Subcommand;
use colored::*;
use ferry_core::domain::job::{JobId, JobSnapshot, JobState};
use ferry_core::domain::log::{LogEntry, SegmentFormat};
use ferry_monitor::view::format_timestamp;
use ferry_monitor::{LogView, MonitorEvent, Session, StatusView};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;

/// Transfer subcommands
#[derive(Subcommand)]
pub enum TransferCommands {
    /// List all transfers
    List,
    /// Show the state of a transfer
    Status {
        /// Transfer ID
        id: String,
    },
    /// Abort a transfer
    Abort {
        /// Transfer ID
        id: String,
    },
    /// Watch a transfer's state and log until it is done
    Watch {
        /// Transfer ID
        id: String,

        /// State already known for the transfer (fetched when omitted)
        #[arg(long)]
        state: Option<String>,

        /// Print log lines as they arrive instead of once the transfer is done
        #[arg(short, long)]
        follow: bool,
    },
}

/// Handle transfer commands
///
/// # Arguments
/// * `command` - The transfer command to execute
/// * `config` - The CLI configuration
pub async fn handle_transfer_command(command: TransferCommands, config: &Config) -> Result<()> {
    match command {
        TransferCommands::List => list_transfers(config).await,
        TransferCommands::Status { id } => show_transfer(config, JobId::from(id)).await,
        TransferCommands::Abort { id } => abort_transfer(config, JobId::from(id)).await,
        TransferCommands::Watch { id, state, follow } => {
            watch_transfer(config, JobId::from(id), state, follow).await
        }
    }
}

/// List all transfers
async fn list_transfers(config: &Config) -> Result<()> {
    let transfers = config
        .client()
        .list_transfers()
        .await
        .context("Failed to list transfers")?;

    if transfers.is_empty() {
        println!("{}", "No transfers found.".yellow());
    } else {
        println!("{}", format!("Found {} transfer(s):", transfers.len()).bold());
        println!();
        for transfer in transfers {
            let id = transfer.id.as_deref().unwrap_or("?");
            println!("  {} Transfer {}", "▸".cyan(), id.dimmed());
            print_state(&StatusView::new(&transfer));
            println!();
        }
    }

    Ok(())
}

/// Show the state of a single transfer
async fn show_transfer(config: &Config, job_id: JobId) -> Result<()> {
    let snapshot = config
        .client()
        .get_transfer(&job_id)
        .await
        .with_context(|| format!("Failed to fetch transfer {}", job_id))?;

    println!("{}", format!("Transfer {}:", job_id).bold());
    print_state(&StatusView::new(&snapshot));

    Ok(())
}

/// Abort a transfer
async fn abort_transfer(config: &Config, job_id: JobId) -> Result<()> {
    config
        .client()
        .abort_transfer(&job_id)
        .await
        .with_context(|| format!("Failed to abort transfer {}", job_id))?;

    println!("{} Abort requested for transfer {}", "✓".green(), job_id);

    Ok(())
}

/// Watch a transfer until its state is terminal and its log is exhausted
async fn watch_transfer(
    config: &Config,
    job_id: JobId,
    state: Option<String>,
    follow: bool,
) -> Result<()> {
    config.monitor.validate()?;
    let client = Arc::new(config.client());

    let initial = match state {
        Some(state) => JobSnapshot::new(JobState::from(state)),
        None => client
            .get_transfer(&job_id)
            .await
            .with_context(|| format!("Failed to fetch transfer {}", job_id))?,
    };

    println!("{}", format!("Transfer {}:", job_id).bold());
    let mut status = StatusView::new(&initial);
    print_state(&status);
    println!("{}", "─".repeat(80).dimmed());

    let mut log = LogView::new(Local, follow);
    let (session, mut events) =
        Session::start(client, job_id, initial, config.monitor.clone());

    while let Some(event) = events.recv().await {
        match event {
            MonitorEvent::StateChanged(snapshot) => {
                status.apply(&snapshot);
                print_state(&status);
            }
            MonitorEvent::LogAppended(entries) => {
                for entry in append_batch(&mut log, &entries) {
                    print_log_entry(entry);
                }
            }
            MonitorEvent::StatusFailed(error) => {
                status.fail(&error);
                print_state(&status);
            }
            MonitorEvent::LogFailed(error) => {
                let line = log.annotate_error(error.user_message());
                if follow {
                    println!("{}", line.red());
                }
            }
            MonitorEvent::Finished(component) => {
                debug!("{} finished", component);
            }
        }
    }

    session.wait().await;

    if !follow {
        if log.lines().is_empty() {
            println!("{}", "No log entries for this transfer.".yellow());
        }
        for line in log.lines() {
            println!("{}", line);
        }
    }
    println!("{}", "─".repeat(80).dimmed());
    print_state(&status);

    Ok(())
}

/// Append a batch to the log view, returning the entries to print right away
///
/// Only an append that raised a scroll request is printed live; otherwise the
/// lines wait in the view until the session ends.
fn append_batch<'a, Tz>(log: &mut LogView<Tz>, entries: &'a [LogEntry]) -> &'a [LogEntry]
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let scrolls = log.scroll_requests();
    let added = log.append(entries).len();

    if log.scroll_requests() > scrolls {
        &entries[entries.len() - added..]
    } else {
        &[]
    }
}

/// Print the latest known state
fn print_state(status: &StatusView) {
    println!("    State:  {}", colorize_state(status.state()));
    if let Some(cause) = status.fail_cause() {
        println!("    Cause:  {}", cause.red());
    }
    if let Some(error) = status.error() {
        println!("    {}", format!("Failed, error: {}", error).red());
    }
}

/// Print a log entry, coloring each segment by its format
fn print_log_entry(entry: &LogEntry) {
    let message: String = entry
        .segments
        .iter()
        .map(|segment| colorize_segment(segment.format, &segment.value).to_string())
        .collect();

    println!(
        "{} [{}] {}",
        format_timestamp(entry.timestamp_millis, &Local).dimmed(),
        entry.thread.cyan(),
        message
    );
}

fn colorize_segment(format: SegmentFormat, value: &str) -> ColoredString {
    match format {
        SegmentFormat::None | SegmentFormat::Other => value.normal(),
        SegmentFormat::Highlight => value.bold(),
        SegmentFormat::Literal => value.cyan(),
        SegmentFormat::Speed => value.magenta(),
        SegmentFormat::File => value.blue(),
        SegmentFormat::Chunk => value.dimmed(),
        SegmentFormat::Delete => value.red(),
        SegmentFormat::Info => value.green(),
        SegmentFormat::Warn => value.yellow(),
        SegmentFormat::Error => value.red().bold(),
    }
}

/// Colorize transfer state for display
fn colorize_state(state: &JobState) -> ColoredString {
    let name = state.as_str();
    match state {
        JobState::Completed => name.green(),
        JobState::Failed => name.red(),
        JobState::Aborted => name.dimmed(),
        JobState::Active(_) => name.cyan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ferry_core::domain::log::Segment;

    fn entries(from: u64, to: u64) -> Vec<LogEntry> {
        (from..to)
            .map(|index| LogEntry {
                index,
                timestamp_millis: 0,
                thread: "main".to_string(),
                marker: None,
                segments: vec![Segment::plain(format!("line {}", index))],
            })
            .collect()
    }

    #[test]
    fn test_follow_prints_only_new_entries() {
        let mut log = LogView::new(Utc, true);
        assert_eq!(append_batch(&mut log, &entries(0, 2)).len(), 2);

        let overlapping = entries(1, 4);
        let printed = append_batch(&mut log, &overlapping);
        let indices: Vec<u64> = printed.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![2, 3]);

        assert!(append_batch(&mut log, &entries(2, 3)).is_empty());
        assert_eq!(log.lines().len(), 4);
    }

    #[test]
    fn test_without_follow_nothing_is_printed_live() {
        let mut log = LogView::new(Utc, false);
        assert!(append_batch(&mut log, &entries(0, 3)).is_empty());
        assert_eq!(log.lines().len(), 3);
    }
}
