//! Placement Actions
//!
//! Logical inputs consumed by the placement session, independent of the
//! host's physical keys.

use crate::camera::raycast::Ray;

/// Yaw direction for a quarter-turn rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    /// -90 degrees about the vertical axis (default: Z)
    Left,
    /// +90 degrees about the vertical axis (default: X)
    Right,
}

impl RotateDirection {
    /// Signed quarter-turn delta
    pub fn quarter_turns(self) -> i32 {
        match self {
            RotateDirection::Left => -1,
            RotateDirection::Right => 1,
        }
    }
}

/// High-level input understood by the placement session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementInput {
    /// Rotate the candidate module by 90 degrees
    Rotate(RotateDirection),
    /// Move up one floor (default: PageUp)
    FloorUp,
    /// Move down one floor, never below 0 (default: PageDown)
    FloorDown,
    /// Abort the placement (default: Escape)
    Cancel,
    /// Commit the candidate at the preview position (default: left click)
    Confirm,
    /// Pointer moved; carries the world-space ray under the cursor
    PointerMoved(Ray),
}
