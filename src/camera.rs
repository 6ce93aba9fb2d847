//! Camera for primary ray generation.
//!
//! Maps normalized viewport coordinates to world-space rays using a pinhole
//! model with a configurable eye position, look-at target and field of view.

use glam::Vec3A;

use crate::ray::Ray;

/// Pinhole camera with a precomputed viewport frame.
///
/// The orthonormal basis and viewport vectors are derived once at
/// construction and immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3A,
    lower_left_corner: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
}

impl Camera {
    /// Build a camera from eye position, target, up hint, vertical field of
    /// view in degrees, and aspect ratio (width / height).
    ///
    /// `look_from` and `look_at` must differ, and `view_up` must not be
    /// parallel to the view direction; both are validated by
    /// [`RenderConfig::validate`](crate::config::RenderConfig::validate)
    /// before any camera is built.
    pub fn new(look_from: Vec3A, look_at: Vec3A, view_up: Vec3A, vfov: f32, aspect: f32) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Orthonormal camera frame: w points opposite the view direction,
        // u to camera right, v to camera up.
        let w = (look_from - look_at).normalize();
        let u = view_up.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        Self {
            origin,
            lower_left_corner: origin - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        }
    }

    /// Generate the ray through normalized viewport coordinates (s, t).
    ///
    /// s = 0 is the left edge, t = 0 the bottom edge, both in [0, 1].
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }
}
