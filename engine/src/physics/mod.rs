//! Physics Module
//!
//! Bounding volumes and overlap tests.

pub mod bounds;
pub mod obb;

pub use bounds::Bounds;
pub use obb::OrientedBox;
