//! Display models
//!
//! The log view is a history: it only ever grows. The status view holds the
//! latest known value and is overwritten on every update.

pub mod log;
pub mod render;
pub mod status;

pub use log::LogView;
pub use render::{format_timestamp, render_entry};
pub use status::StatusView;
