//! Surface trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lumen_math::{Interval, Vec3};

/// Record of a ray-surface intersection.
///
/// Holds a copy of the material so it can travel into recursive calls
/// without borrowing from the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: Material,
    /// Index of the hit surface in its scene (filled in by the intersector)
    pub scene_index: usize,
}

impl HitRecord {
    /// Attach the scene index of the surface that produced this record.
    #[inline]
    pub fn with_index(mut self, scene_index: usize) -> Self {
        self.scene_index = scene_index;
        self
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Nearest intersection strictly inside `ray_t`, if any.
    ///
    /// The surface doesn't know its own scene index; `scene_index` is
    /// left at 0 for the caller to fill in.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;

    /// Parameter of the first intersection beyond `t_min`.
    ///
    /// Occlusion queries only need to know that something is in the way and
    /// how far, so this skips the normal and material.
    fn shadow_hit(&self, ray: &Ray, t_min: f32) -> Option<f32>;
}
