//! Module Geometry
//!
//! Bounding volume of a module prototype computed from its renderable parts.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::Bounds;

/// One renderable sub-part of a prototype: a mesh box plus its transform
/// relative to the prototype root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderablePart {
    /// Bounds of the part's mesh in its own frame
    pub mesh_bounds: Bounds,
    #[serde(default)]
    pub offset: Vec3,
    #[serde(default = "identity_rotation")]
    pub rotation: Quat,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn identity_rotation() -> Quat {
    Quat::IDENTITY
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl RenderablePart {
    /// An untransformed box part with the given center and size.
    pub fn block(center: Vec3, size: Vec3) -> Self {
        Self {
            mesh_bounds: Bounds::new(center, size),
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn with_transform(mut self, offset: Vec3, rotation: Quat, scale: Vec3) -> Self {
        self.offset = offset;
        self.rotation = rotation;
        self.scale = scale;
        self
    }

    /// Axis-aligned bounds of this part in the prototype's frame
    pub fn local_bounds(&self) -> Bounds {
        let transform = Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.offset);
        self.mesh_bounds.transformed(&transform)
    }
}

/// Union of every part's bounds in the prototype's local frame.
///
/// A prototype with no renderable parts gets a unit cube at the origin.
pub fn compute_bounds(parts: &[RenderablePart]) -> Bounds {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return Bounds::unit();
    };

    iter.fold(first.local_bounds(), |mut acc, part| {
        acc.encapsulate(&part.local_bounds());
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parts_falls_back_to_unit() {
        assert_eq!(compute_bounds(&[]), Bounds::unit());
    }

    #[test]
    fn test_single_part() {
        let part = RenderablePart::block(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.2));
        let b = compute_bounds(&[part]);
        assert_eq!(b.center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(b.size(), Vec3::new(2.0, 2.0, 0.2));
    }

    #[test]
    fn test_union_of_offset_parts() {
        let post = RenderablePart::block(Vec3::ZERO, Vec3::new(0.2, 2.0, 0.2));
        let left = post.with_transform(Vec3::new(-1.0, 1.0, 0.0), Quat::IDENTITY, Vec3::ONE);
        let right = post.with_transform(Vec3::new(1.0, 1.0, 0.0), Quat::IDENTITY, Vec3::ONE);
        let b = compute_bounds(&[left, right]);
        assert!((b.min() - Vec3::new(-1.1, 0.0, -0.1)).abs().max_element() < 1e-5);
        assert!((b.max() - Vec3::new(1.1, 2.0, 0.1)).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_rotated_and_scaled_part() {
        let plank = RenderablePart::block(Vec3::ZERO, Vec3::new(1.0, 0.1, 0.5)).with_transform(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(2.0, 1.0, 1.0),
        );
        let b = compute_bounds(&[plank]);
        assert!((b.size() - Vec3::new(0.5, 0.1, 2.0)).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let parts = [
            RenderablePart::block(Vec3::ZERO, Vec3::ONE),
            RenderablePart::block(Vec3::new(0.0, 3.0, 0.0), Vec3::splat(0.5)),
        ];
        assert_eq!(compute_bounds(&parts), compute_bounds(&parts));
    }
}
