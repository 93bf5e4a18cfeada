//! Paint stock row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One colour in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Paint {
    /// Unique colour name.
    pub color: String,
    /// Units on hand, never negative.
    pub stock: i64,
    /// Hex colour code such as `#0000ff`.
    pub colorcode: String,
}

/// Data required to add a colour to the catalogue.
#[derive(Debug, Clone)]
pub struct CreatePaint {
    pub color: String,
    pub colorcode: String,
    pub stock: i64,
}
