//! Registration and login.

pub mod service;

pub use service::{AuthService, LOGIN_FAILED_MESSAGE, LoginResult};
