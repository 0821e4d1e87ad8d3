//! Oriented bounding boxes
//!
//! Exact box-box overlap via the Separating Axis Theorem. Two boxes in 3D
//! have 15 candidate axes: the 3 face normals of each box plus the 9 pairwise
//! edge cross products. If the projections are disjoint on any one of them
//! the boxes do not overlap.

use glam::{Quat, Vec3};

use super::bounds::Bounds;

/// Added to the absolute rotation terms so near-parallel edge pairs
/// (whose cross product is ~zero) cannot produce a false separation.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A box with arbitrary orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
}

impl OrientedBox {
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation,
        }
    }

    /// World box of local `bounds` placed at `position` with `rotation`.
    pub fn from_bounds(bounds: &Bounds, position: Vec3, rotation: Quat) -> Self {
        Self::new(position + rotation * bounds.center, bounds.extents, rotation)
    }

    /// Same box with every half extent reduced by `margin` (never below zero).
    pub fn shrunk(&self, margin: f32) -> Self {
        Self {
            half_extents: (self.half_extents - Vec3::splat(margin)).max(Vec3::ZERO),
            ..*self
        }
    }

    /// Local X/Y/Z axes in world space
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.rotation * Vec3::X,
            self.rotation * Vec3::Y,
            self.rotation * Vec3::Z,
        ]
    }

    /// True if the boxes overlap. Touching faces count as overlap.
    pub fn intersects(&self, other: &OrientedBox) -> bool {
        let a_axes = self.axes();
        let b_axes = other.axes();
        let a = self.half_extents.to_array();
        let b = other.half_extents.to_array();

        // `other`'s axes expressed in our frame
        let mut r = [[0.0_f32; 3]; 3];
        let mut abs_r = [[0.0_f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                r[i][j] = a_axes[i].dot(b_axes[j]);
                abs_r[i][j] = r[i][j].abs() + PARALLEL_EPSILON;
            }
        }

        let d = other.center - self.center;
        let t = [d.dot(a_axes[0]), d.dot(a_axes[1]), d.dot(a_axes[2])];

        // Our face normals
        for i in 0..3 {
            let ra = a[i];
            let rb = b[0] * abs_r[i][0] + b[1] * abs_r[i][1] + b[2] * abs_r[i][2];
            if t[i].abs() > ra + rb {
                return false;
            }
        }

        // Their face normals
        for j in 0..3 {
            let ra = a[0] * abs_r[0][j] + a[1] * abs_r[1][j] + a[2] * abs_r[2][j];
            let rb = b[j];
            let tj = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
            if tj.abs() > ra + rb {
                return false;
            }
        }

        // Edge-edge cross products A_i x B_j
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = a[i1] * abs_r[i2][j] + a[i2] * abs_r[i1][j];
                let rb = b[j1] * abs_r[i][j2] + b[j2] * abs_r[i][j1];
                let tl = t[i2] * r[i1][j] - t[i1] * r[i2][j];
                if tl.abs() > ra + rb {
                    return false;
                }
            }
        }

        true
    }
}
