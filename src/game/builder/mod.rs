//! Builder Module
//!
//! Interactive placement of modules: grid snapping, validity checks, preview
//! tinting and the session that ties them to player input.

pub mod preview;
pub mod session;
pub mod snapping;
pub mod validity;

pub use preview::PreviewTint;
pub use session::{CancelReason, PlacementSession, TickOutcome};
pub use snapping::{rotated_footprint, snap_position, snap_to_step};
pub use validity::{PlacementError, candidate_box, check_placement};
