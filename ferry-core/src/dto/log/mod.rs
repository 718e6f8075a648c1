//! Log page DTOs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::log::{LogEntry, LogWindow, Segment};

/// Response of `GET /api/transfers/{id}/log?from={index}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEventsPage {
    pub from_index: u64,
    pub to_index: u64,
    #[serde(default)]
    pub list: Vec<LogEvent>,
}

/// A log event as the runner serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// Milliseconds since epoch
    pub date: i64,
    #[serde(default)]
    pub thread: String,
    #[serde(default)]
    pub marker: Option<String>,
    pub msg: LogMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMessage {
    #[serde(default)]
    pub flat_parts: Vec<Segment>,
}

/// A log page that does not describe a well-formed window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window bounds are inverted: from {from_index} to {to_index}")]
    Inverted { from_index: u64, to_index: u64 },

    #[error("window [{from_index}, {to_index}) carries {actual} entries")]
    LengthMismatch {
        from_index: u64,
        to_index: u64,
        actual: usize,
    },

    #[error("window starts at {from_index} but the next unread index is {expected}")]
    NotContiguous { expected: u64, from_index: u64 },
}

impl LogEventsPage {
    /// Converts the page into a window, numbering entries from `from_index`
    pub fn into_window(self) -> Result<LogWindow, WindowError> {
        if self.to_index < self.from_index {
            return Err(WindowError::Inverted {
                from_index: self.from_index,
                to_index: self.to_index,
            });
        }
        if self.list.len() as u64 != self.to_index - self.from_index {
            return Err(WindowError::LengthMismatch {
                from_index: self.from_index,
                to_index: self.to_index,
                actual: self.list.len(),
            });
        }

        let entries = self
            .list
            .into_iter()
            .zip(self.from_index..)
            .map(|(event, index)| LogEntry {
                index,
                timestamp_millis: event.date,
                thread: event.thread,
                marker: event.marker,
                segments: event.msg.flat_parts,
            })
            .collect();

        Ok(LogWindow {
            from_index: self.from_index,
            to_index: self.to_index,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::log::SegmentFormat;

    fn page(from_index: u64, to_index: u64, count: usize) -> LogEventsPage {
        LogEventsPage {
            from_index,
            to_index,
            list: (0..count)
                .map(|i| LogEvent {
                    date: 1_553_000_000_000 + i as i64,
                    thread: "transfer-1".to_string(),
                    marker: None,
                    msg: LogMessage {
                        flat_parts: vec![Segment::plain(format!("line {}", i))],
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn test_into_window_numbers_entries() {
        let window = page(5, 8, 3).into_window().unwrap();
        let indices: Vec<u64> = window.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![5, 6, 7]);
        assert_eq!(window.entries[2].text(), "line 2");
    }

    #[test]
    fn test_into_window_rejects_bad_pages() {
        assert_eq!(
            page(5, 8, 2).into_window(),
            Err(WindowError::LengthMismatch {
                from_index: 5,
                to_index: 8,
                actual: 2
            })
        );
        assert!(matches!(
            page(8, 5, 0).into_window(),
            Err(WindowError::Inverted { .. })
        ));
    }

    #[test]
    fn test_page_from_wire() {
        let json = r#"{"fromIndex":0,"toIndex":1,"list":[
            {"date":1553000000123,"thread":"main","marker":"INFO",
             "msg":{"format":"NONE","value":null,"parts":[],"flatParts":[
                {"format":"NONE","value":"Deleting "},
                {"format":"DELETE","value":"old.bin"}]}}]}"#;
        let window: LogWindow = serde_json::from_str::<LogEventsPage>(json)
            .unwrap()
            .into_window()
            .unwrap();
        let entry = &window.entries[0];
        assert_eq!(entry.marker.as_deref(), Some("INFO"));
        assert_eq!(entry.segments[1].format, SegmentFormat::Delete);
        assert_eq!(entry.text(), "Deleting old.bin");
    }
}
