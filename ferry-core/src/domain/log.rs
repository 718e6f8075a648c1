//! Log domain types

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Semantic format tag of a message segment
///
/// Tags the runner may add later deserialize to [`SegmentFormat::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentFormat {
    None,
    Highlight,
    Literal,
    Speed,
    File,
    Chunk,
    Delete,
    Info,
    Warn,
    Error,
    #[serde(other)]
    Other,
}

/// One formatted piece of a log message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub format: SegmentFormat,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Segment {
    pub fn new(format: SegmentFormat, value: impl Into<String>) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(SegmentFormat::None, value)
    }
}

/// A log entry of a transfer job
///
/// `index` is the entry's position in the job's log: zero-based, gapless and
/// strictly increasing. The runner is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub index: u64,
    pub timestamp_millis: i64,
    pub thread: String,
    pub marker: Option<String>,
    pub segments: Vec<Segment>,
}

impl LogEntry {
    /// Message text without formatting
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.value.as_str()).collect()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_millis).single()
    }
}

/// One batch of log entries, `[from_index, to_index)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogWindow {
    pub from_index: u64,
    pub to_index: u64,
    pub entries: Vec<LogEntry>,
}

impl LogWindow {
    pub fn empty(at: u64) -> Self {
        Self {
            from_index: at,
            to_index: at,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_index >= self.to_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_text_concatenates_segments() {
        let entry = LogEntry {
            index: 0,
            timestamp_millis: 0,
            thread: "main".to_string(),
            marker: None,
            segments: vec![
                Segment::plain("Uploading "),
                Segment::new(SegmentFormat::File, "a.txt"),
                Segment::plain(" at "),
                Segment::new(SegmentFormat::Speed, "2.0MB/s"),
            ],
        };
        assert_eq!(entry.text(), "Uploading a.txt at 2.0MB/s");
    }

    #[test]
    fn test_unknown_segment_format() {
        let segment: Segment =
            serde_json::from_str(r#"{"format":"SPARKLE","value":"x"}"#).unwrap();
        assert_eq!(segment.format, SegmentFormat::Other);

        let segment: Segment = serde_json::from_str(r#"{"format":"DELETE","value":"y"}"#).unwrap();
        assert_eq!(segment.format, SegmentFormat::Delete);

        let segment: Segment = serde_json::from_str(r#"{"format":"NONE","value":null}"#).unwrap();
        assert_eq!(segment.value, "");
    }

    #[test]
    fn test_window_emptiness() {
        assert!(LogWindow::empty(7).is_empty());
        assert_eq!(LogWindow::empty(7).len(), 0);
    }
}
