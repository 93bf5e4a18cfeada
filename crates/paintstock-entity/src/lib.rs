//! # paintstock-entity
//!
//! Domain entity models for Paintstock. Every struct in this crate
//! represents a database row or a domain value object. Database entities
//! derive `sqlx::FromRow`; role flags are `bool` in Rust and travel as
//! `0`/`1` integers on the wire (see [`flag`]).

pub mod account;
pub mod flag;
pub mod paint;

pub use account::{Account, AccountSummary, CreateAccount, Permissions, Role};
pub use paint::{CreatePaint, Paint};
