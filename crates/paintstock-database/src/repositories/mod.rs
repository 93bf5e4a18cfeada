//! Repository implementations for Paintstock entities.

pub mod paint;
pub mod user;

pub use paint::PaintRepository;
pub use user::UserRepository;
