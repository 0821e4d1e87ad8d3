//! Axis-aligned bounds
//!
//! Center/half-extent boxes used for module footprints and their unions.

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: Vec3,
    /// Half the size on each axis
    pub extents: Vec3,
}

impl Bounds {
    /// Create bounds from a center and a full size.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            extents: size.abs() * 0.5,
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        Self {
            center: (lo + hi) * 0.5,
            extents: (hi - lo) * 0.5,
        }
    }

    /// Unit cube centered at the origin.
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Grow to include `other`.
    pub fn encapsulate(&mut self, other: &Bounds) {
        let min = self.min().min(other.min());
        let max = self.max().max(other.max());
        *self = Self::from_min_max(min, max);
    }

    /// The eight corners, in no particular order.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min(), self.max());
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned box enclosing these bounds after `transform`.
    pub fn transformed(&self, transform: &Affine3A) -> Bounds {
        let corners = self.corners();
        let first = transform.transform_point3(corners[0]);
        let (min, max) = corners[1..]
            .iter()
            .map(|&c| transform.transform_point3(c))
            .fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self::from_min_max(min, max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}
