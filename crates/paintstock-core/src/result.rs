//! Convenience result type alias for Paintstock.

use crate::error::AppError;

/// A specialized `Result` type for Paintstock operations.
pub type AppResult<T> = Result<T, AppError>;
