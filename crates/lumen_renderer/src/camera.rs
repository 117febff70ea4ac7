//! Camera for ray generation.

use crate::Ray;
use lumen_math::Vec3;

/// A pinhole camera projecting onto a rectangle in front of it.
///
/// `u` runs left to right along `horizontal`, `v` bottom to top along
/// `vertical`, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Default camera: eye at (0, 0, 1) looking down -z onto a 4x2 plane at z = -1.
    pub fn new() -> Self {
        Self {
            origin: Vec3::new(0.0, 0.0, 1.0),
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }

    /// Create a camera from an explicit projection plane.
    pub fn from_plane(
        origin: Vec3,
        lower_left_corner: Vec3,
        horizontal: Vec3,
        vertical: Vec3,
    ) -> Self {
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Create a camera at `look_from` aimed at `look_at`.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width / height
    pub fn look_at(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect * half_height;

        // Camera basis
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left_corner: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Ray from the eye through plane coordinates (u, v).
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let pixel_point = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, pixel_point - self.origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
