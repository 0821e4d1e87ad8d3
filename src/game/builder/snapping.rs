//! Snapping
//!
//! Maps a raw ground-plane point to a grid position for the candidate module.
//! Whole modules snap to multiples of their rotated footprint, corner pieces
//! to a fine fixed grid, and height comes from the floor index alone.

use glam::{Quat, Vec3};

use crate::game::config::BuilderConfig;
use crate::game::modules::ModulePrototype;

/// Footprint axes smaller than this are treated as degenerate
const MIN_AXIS_SIZE: f32 = 1e-4;

/// Size of `prototype` after `rotation`, component-wise absolute.
///
/// Degenerate axes are replaced with `config.degenerate_axis_size` so the
/// result is always safe to divide by.
pub fn rotated_footprint(prototype: &ModulePrototype, rotation: Quat, config: &BuilderConfig) -> Vec3 {
    let size = (rotation * prototype.bounds().size()).abs();
    let guard = |v: f32| if v < MIN_AXIS_SIZE { config.degenerate_axis_size } else { v };
    Vec3::new(guard(size.x), guard(size.y), guard(size.z))
}

/// Round `value` to the nearest multiple of `step`.
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Snap a raw point for `prototype` at `rotation` on `floor`.
///
/// # Arguments
/// * `raw` - Pointer hit on the ground plane (its Y is ignored)
/// * `rotation` - Current candidate rotation
/// * `floor` - Current floor index
/// * `prototype` - Candidate module
/// * `config` - Floor height and grid constants
pub fn snap_position(
    raw: Vec3,
    rotation: Quat,
    floor: u32,
    prototype: &ModulePrototype,
    config: &BuilderConfig,
) -> Vec3 {
    let (x, z) = if prototype.kind().uses_fine_grid() {
        let step = if config.corner_grid_step > MIN_AXIS_SIZE {
            config.corner_grid_step
        } else {
            config.degenerate_axis_size
        };
        (snap_to_step(raw.x, step), snap_to_step(raw.z, step))
    } else {
        let size = rotated_footprint(prototype, rotation, config);
        (snap_to_step(raw.x, size.x), snap_to_step(raw.z, size.z))
    };

    Vec3::new(x, config.floor_y(floor), z)
}
