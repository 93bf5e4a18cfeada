//! # paintstock-database
//!
//! SQLite connection management, embedded migrations and the concrete
//! repositories for accounts and paint stock.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
