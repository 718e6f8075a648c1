//! Ferry Core
//!
//! Core types shared by the Ferry transfer monitor.
//!
//! This crate contains:
//! - Domain types: the value snapshots a transfer runner reports (job state, log entries, listings)
//! - DTOs: wire shapes of the runner's REST API and their conversion into domain types

pub mod domain;
pub mod dto;
