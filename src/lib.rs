//! # Phone Inventory Library
//!
//! Retrieves the phone user and phone number inventory of a Zoom account
//! through the Zoom Phone REST API and writes it to JSON files.
//!
//! Modules:
//! - `config` - service configuration, defaults and validation
//! - `sources` - client-credentials authentication and the paginated GET client
//! - `inventory` - record extraction and the end-to-end run
//! - `sinks` - JSON file output

pub mod config;
pub mod errors;
pub mod sources;
pub mod inventory;
pub mod sinks;
pub mod helpers;
pub mod utils;
#[cfg(test)]
mod tests;


pub use crate::config::sources::*;
pub use crate::errors::InventoryError;
