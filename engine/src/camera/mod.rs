//! Camera Module
//!
//! Screen-to-world rays and their ground-plane intersection.

pub mod raycast;

pub use raycast::{Ray, intersect_horizontal_plane, raycast_to_ground};
