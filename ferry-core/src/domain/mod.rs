//! Core domain types
//!
//! All values here are immutable snapshots received from the transfer runner.
//! The client never mutates them; it only observes and renders them.

pub mod job;
pub mod listing;
pub mod log;
