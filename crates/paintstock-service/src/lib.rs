//! # paintstock-service
//!
//! Business logic service layer for Paintstock. Each service orchestrates
//! repositories and auth primitives to implement one application flow.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod permission;
pub mod stock;

pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
pub use permission::PermissionService;
pub use stock::{StockListing, StockService};
