//! Shadow ray occlusion test.

use crate::{Ray, Scene, Vec3};

/// Minimum distance along a shadow ray before a hit counts.
pub const SHADOW_EPSILON: f32 = f32::EPSILON;

/// Whether anything in `scene` blocks the segment from `point` to the light.
///
/// Only hits nearer than the light count: a surface lined up behind the
/// light does not shadow `point`. `self_index` is the surface `point` lies
/// on and is never tested.
pub fn is_occluded(
    point: Vec3,
    light_position: Vec3,
    scene: &Scene,
    self_index: Option<usize>,
) -> bool {
    let to_light = light_position - point;
    let light_distance = to_light.length();
    let Some(direction) = to_light.try_normalize() else {
        // Point sits on the light
        return false;
    };

    // Unit direction, so t is a distance
    let shadow_ray = Ray::new(point, direction);

    scene.candidates(self_index).any(|(_, surface)| {
        matches!(surface.shadow_hit(&shadow_ray, SHADOW_EPSILON), Some(t) if t < light_distance)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};

    fn scene_with(spheres: &[(Vec3, f32)]) -> Scene {
        let mut scene = Scene::new();
        for &(center, radius) in spheres {
            scene.add(Box::new(Sphere::new(center, radius, Material::default())));
        }
        scene
    }

    #[test]
    fn test_blocker_between_point_and_light() {
        let scene = scene_with(&[(Vec3::new(0.0, 5.0, 0.0), 1.0)]);
        assert!(is_occluded(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &scene, None));
    }

    #[test]
    fn test_object_behind_light_is_not_a_blocker() {
        let scene = scene_with(&[(Vec3::new(0.0, 20.0, 0.0), 1.0)]);
        assert!(!is_occluded(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &scene, None));
    }

    #[test]
    fn test_object_off_the_segment() {
        let scene = scene_with(&[(Vec3::new(5.0, 5.0, 0.0), 1.0)]);
        assert!(!is_occluded(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &scene, None));
    }

    #[test]
    fn test_self_is_excluded() {
        // Point on top of the sphere; its own surface must not shadow it
        let scene = scene_with(&[(Vec3::ZERO, 1.0)]);
        let point = Vec3::new(0.0, 1.0, 0.0);
        let light = Vec3::new(0.0, -10.0, 0.0);

        assert!(is_occluded(point, light, &scene, None));
        assert!(!is_occluded(point, light, &scene, Some(0)));
    }

    #[test]
    fn test_far_behind_blocker_does_not_hide_near_one() {
        // The first sphere listed is beyond the light, the second is in the way
        let scene = scene_with(&[
            (Vec3::new(0.0, 30.0, 0.0), 2.0),
            (Vec3::new(0.0, 4.0, 0.0), 1.0),
        ]);
        assert!(is_occluded(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &scene, None));
    }

    #[test]
    fn test_point_at_light() {
        let scene = scene_with(&[(Vec3::new(0.0, 5.0, 0.0), 1.0)]);
        assert!(!is_occluded(Vec3::ONE, Vec3::ONE, &scene, None));
    }
}
