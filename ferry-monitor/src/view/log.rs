//! Append-only log display

use chrono::TimeZone;
use ferry_core::domain::log::LogEntry;
use std::fmt::Display;

use super::render::render_entry;

/// Rendered log of one transfer
///
/// Lines are only ever appended. Each log index is rendered at most once, so
/// a batch overlapping what is already shown contributes only its new tail.
/// With `follow` on, every non-empty append requests a scroll to the end;
/// nothing else ever does.
pub struct LogView<Tz: TimeZone> {
    tz: Tz,
    follow: bool,
    lines: Vec<String>,
    next_index: u64,
    scroll_requests: u64,
}

impl<Tz> LogView<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz, follow: bool) -> Self {
        Self {
            tz,
            follow,
            lines: Vec::new(),
            next_index: 0,
            scroll_requests: 0,
        }
    }

    pub fn follow(&self) -> bool {
        self.follow
    }

    /// Appends entries, returning the newly rendered lines
    pub fn append(&mut self, entries: &[LogEntry]) -> &[String] {
        let start = self.lines.len();

        for entry in entries {
            if entry.index < self.next_index {
                continue;
            }
            self.lines.push(render_entry(entry, &self.tz));
            self.next_index = entry.index + 1;
        }

        if self.follow && self.lines.len() > start {
            self.scroll_requests += 1;
        }

        &self.lines[start..]
    }

    /// Appends an error annotation below everything already shown
    pub fn annotate_error(&mut self, message: &str) -> &str {
        self.lines.push(format!("Failed, error: {}", message));
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of times the view asked to be scrolled to its end
    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }
}
