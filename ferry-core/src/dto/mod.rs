//! Data Transfer Objects of the transfer runner's REST API
//!
//! These mirror the JSON the runner sends and receives. Where the wire shape
//! differs from the domain shape (log pages), a conversion into the domain
//! type lives next to the DTO.

pub mod error;
pub mod listing;
pub mod log;
