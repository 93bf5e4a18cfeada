//! Role lookup, enforcement and account administration.

pub mod service;

pub use service::PermissionService;
