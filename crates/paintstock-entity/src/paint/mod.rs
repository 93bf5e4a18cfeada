//! Paint stock entity.

pub mod model;

pub use model::{CreatePaint, Paint};
