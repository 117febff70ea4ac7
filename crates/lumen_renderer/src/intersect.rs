//! Nearest-hit queries against a scene.

use crate::{HitRecord, Ray, Scene};
use lumen_math::Interval;

/// Find the nearest surface hit by `ray` within `ray_t`, skipping `exclude`.
///
/// The upper bound shrinks to each accepted hit, so later surfaces only win
/// if they are strictly nearer. The returned record carries the scene index
/// of the surface that was hit.
pub fn find_nearest(
    ray: &Ray,
    scene: &Scene,
    ray_t: Interval,
    exclude: Option<usize>,
) -> Option<HitRecord> {
    let mut nearest = None;
    let mut closest_so_far = ray_t.max;

    for (index, surface) in scene.candidates(exclude) {
        if let Some(rec) = surface.hit(ray, ray_t.with_max(closest_so_far)) {
            closest_so_far = rec.t;
            nearest = Some(rec.with_index(index));
        }
    }

    nearest
}
