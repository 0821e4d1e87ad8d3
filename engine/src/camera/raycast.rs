//! Raycast Module
//!
//! Pointer rays and their intersection with the horizontal placement plane.

use glam::Vec3;

/// Rays closer than this to parallel with a plane are treated as misses.
const PARALLEL_EPSILON: f32 = 0.0001;

/// A world-space ray. The direction is always normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Build the pointer ray for a screen coordinate.
    ///
    /// # Arguments
    /// * `camera_pos` - Camera position in world space
    /// * `camera_target` - Point the camera is looking at
    /// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
    /// * `aspect_ratio` - Screen aspect ratio (width / height)
    /// * `fov` - Vertical field of view in radians
    pub fn from_screen(
        camera_pos: Vec3,
        camera_target: Vec3,
        uv: (f32, f32),
        aspect_ratio: f32,
        fov: f32,
    ) -> Self {
        let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
        let half_fov = (fov * 0.5_f32).tan();

        let forward = (camera_target - camera_pos).normalize();

        // Looking straight up or down: use world X as the right vector
        let (right, up) = if forward.y.abs() > 0.99 {
            let right = Vec3::X;
            (right, forward.cross(right).normalize())
        } else {
            let right = forward.cross(Vec3::Y).normalize();
            (right, right.cross(forward))
        };

        let direction = forward + right * ndc.0 * aspect_ratio * half_fov + up * ndc.1 * half_fov;
        Self::new(camera_pos, direction)
    }
}

/// Intersect a ray with the horizontal plane `y = height`.
///
/// # Returns
/// * `Some(Vec3)` - The intersection point on the plane
/// * `None` - The ray is parallel to the plane or the plane is behind the origin
pub fn intersect_horizontal_plane(ray: &Ray, height: f32) -> Option<Vec3> {
    if ray.direction.y.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (height - ray.origin.y) / ray.direction.y;
    if t < 0.0 {
        return None;
    }

    Some(ray.point_at(t))
}

/// Intersect a ray with the `y = 0` placement ground plane.
pub fn raycast_to_ground(ray: &Ray) -> Option<Vec3> {
    intersect_horizontal_plane(ray, 0.0)
}
