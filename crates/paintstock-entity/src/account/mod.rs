//! Account entity and role types.

pub mod model;
pub mod role;

pub use model::{Account, AccountSummary, CreateAccount};
pub use role::{Permissions, Role};
