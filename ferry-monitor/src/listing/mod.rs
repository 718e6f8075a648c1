//! Directory listing formatter
//!
//! Renders a [`DirectoryListing`] as one line per entry, sorted so that the
//! output is identical across repeated checks of the same tree and easy to
//! diff, plus a one-line summary.
//!
//! ```text
//! ------- | sub/
//!   2.0kB | sub/a.txt
//! Directories: 1 Files: 1 Total size: 2.0kB
//! ```

mod collate;
mod size;

pub use collate::collate;
pub use size::human_file_size;

use ferry_client::ClientError;
use ferry_core::domain::listing::DirectoryListing;
use std::fmt;

/// Width of the info column
const INFO_WIDTH: usize = 7;

/// What a listing line describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One rendered listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub kind: EntryKind,
    /// Dash marker for directories, right-aligned size for files
    pub info: String,
    /// Relative path; directories end with `/`
    pub path: String,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.info, self.path)
    }
}

/// A rendered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedListing {
    pub lines: Vec<ListingLine>,
    pub summary: String,
}

impl FormattedListing {
    /// All lines joined with newlines; empty for an empty listing
    pub fn body(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats a listing into sorted lines and a summary
pub fn format_listing(listing: &DirectoryListing) -> FormattedListing {
    let directories = listing.directories.iter().map(|dir| ListingLine {
        kind: EntryKind::Directory,
        info: "-".repeat(INFO_WIDTH),
        path: format!("{}/", dir.file_path.relative_path()),
    });

    let files = listing.files.iter().map(|file| ListingLine {
        kind: EntryKind::File,
        info: format!(
            "{:>width$}",
            human_file_size(file.file_size_bytes),
            width = INFO_WIDTH
        ),
        path: file.file_path.relative_path(),
    });

    let mut lines: Vec<ListingLine> = directories.chain(files).collect();
    lines.sort_by(|a, b| collate(&a.path, &b.path));

    FormattedListing {
        lines,
        summary: summarize(listing),
    }
}

/// `Directories: {n} Files: {n} Total size: {size}`
pub fn summarize(listing: &DirectoryListing) -> String {
    format!(
        "Directories: {} Files: {} Total size: {}",
        listing.directories.len(),
        listing.files.len(),
        human_file_size(listing.total_size_bytes)
    )
}

/// Status line for a listing request that failed
pub fn format_fetch_error(error: &ClientError) -> String {
    format!("Failed, error: {}", error.user_message())
}
