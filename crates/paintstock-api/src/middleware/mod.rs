//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod gate;
pub mod logging;
