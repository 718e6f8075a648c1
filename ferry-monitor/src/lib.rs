//! Ferry Monitor
//!
//! Client-side observation of a transfer job running on a Ferry runner.
//!
//! Architecture:
//! - Scheduler: the two self-terminating loops, [`StatusPoller`] and [`LogTailer`]
//! - Session: starts both loops for one job and owns their shared state cell
//! - View: append-only log display model, latest-status model, entry rendering
//! - Listing: deterministic rendering and summary of directory listings
//!
//! The poller writes the job's latest snapshot into a `watch` cell; the tailer
//! only reads it to decide when an empty log window means the log is complete.

pub mod config;
pub mod event;
pub mod listing;
pub mod scheduler;
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::MonitorConfig;
pub use event::{Component, MonitorEvent};
pub use listing::{FormattedListing, format_fetch_error, format_listing, human_file_size};
pub use scheduler::{LogCursor, LogTailer, StatusPoller};
pub use session::Session;
pub use view::{LogView, StatusView};
