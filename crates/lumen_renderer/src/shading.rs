//! Direct lighting at a hit point.

use crate::shadow::is_occluded;
use crate::{Color, HitRecord, PointLight, Scene};

/// Lambertian contribution of `light` at `rec`, or black if it is shadowed.
///
/// There is no ambient term: a shadowed point is exactly zero.
pub fn local_color(rec: &HitRecord, light: &PointLight, scene: &Scene) -> Color {
    let Some(light_direction) = (light.position - rec.p).try_normalize() else {
        return Color::ZERO;
    };

    if is_occluded(rec.p, light.position, scene, Some(rec.scene_index)) {
        return Color::ZERO;
    }

    rec.material.diffuse_color * light.intensity * rec.normal.dot(light_direction).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_nearest, Interval, Material, Ray, Sphere, Vec3};

    fn lit_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            Material::default(),
        )));
        scene
    }

    fn primary_hit(scene: &Scene) -> HitRecord {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        find_nearest(&ray, scene, Interval::new(f32::EPSILON, f32::MAX), None)
            .expect("ray should hit the sphere")
    }

    #[test]
    fn test_lit_point() {
        let scene = lit_sphere_scene();
        let rec = primary_hit(&scene);

        assert!((rec.p - Vec3::new(0.0, 0.0, -1.5)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);

        let color = local_color(&rec, &PointLight::default(), &scene);
        assert!(color.x > 0.0 && color.y > 0.0 && color.z > 0.0);

        // N.L for light at (-10, 10, 0) seen from (0, 0, -1.5)
        let expected = 1.5 / Vec3::new(-10.0, 10.0, 1.5).length();
        assert!((color.x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_occluded_point_is_black() {
        let mut scene = lit_sphere_scene();
        // Opaque sphere halfway to the light
        scene.add(Box::new(Sphere::new(
            Vec3::new(-5.0, 5.0, -0.75),
            1.0,
            Material::default(),
        )));
        let rec = primary_hit(&scene);
        assert_eq!(rec.scene_index, 0);

        let color = local_color(&rec, &PointLight::default(), &scene);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_back_facing_light_contributes_nothing() {
        let scene = lit_sphere_scene();
        let rec = primary_hit(&scene);
        let light = PointLight {
            position: Vec3::new(0.0, 0.0, -20.0),
            intensity: Color::ONE,
        };

        assert_eq!(local_color(&rec, &light, &scene), Color::ZERO);
    }

    #[test]
    fn test_kd_and_intensity_scale_channels() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            Material::diffuse(Color::new(1.0, 0.5, 0.0)),
        )));
        let rec = primary_hit(&scene);
        // Light straight along the normal, so N.L = 1
        let light = PointLight {
            position: Vec3::new(0.0, 0.0, 10.0),
            intensity: Color::new(0.5, 1.0, 1.0),
        };

        let color = local_color(&rec, &light, &scene);
        assert!((color - Color::new(0.5, 0.5, 0.0)).length() < 1e-6);
    }
}
