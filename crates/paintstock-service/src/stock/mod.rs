//! Paint stock listing and adjustment.

pub mod service;

pub use service::{StockListing, StockService};
