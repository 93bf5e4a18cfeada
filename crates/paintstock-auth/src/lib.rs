//! # paintstock-auth
//!
//! Authentication primitives for Paintstock.
//!
//! ## Modules
//!
//! - `jwt`: session token issuance, renewal and verification
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: action-to-role policy table and its enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Action, RbacEnforcer, RbacPolicies};
