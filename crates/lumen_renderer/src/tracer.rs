//! The recursive integrator.
//!
//! `trace` finds the nearest hit, shades it directly, then follows one
//! mirror ray and one refracted ray and blends the three colors by the hit
//! material's weights. Recursion stops after `max_depth` bounces or when a
//! ray leaves the scene; both cases return the sky.

use crate::intersect::find_nearest;
use crate::shading::local_color;
use crate::{Color, Material, PointLight, Ray, Scene, Vec3};
use lumen_math::Interval;

/// Default recursion bound.
pub const MAX_DEPTH: u32 = 5;

/// Relative index of refraction entering glass from air.
pub const AIR_TO_GLASS: f32 = 1.0 / 1.46;

/// Material weights with magnitude below this are treated as zero.
pub const WEIGHT_EPSILON: f32 = f32::EPSILON;

/// Vertical gradient seen by rays that hit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    /// Color looking straight down
    pub bottom: Color,
    /// Color looking straight up
    pub top: Color,
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            bottom: Color::new(1.0, 1.0, 1.0),
            top: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl Sky {
    /// Background color for the ray's direction.
    pub fn color(&self, ray: &Ray) -> Color {
        let unit_direction = ray.direction().normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        self.bottom * (1.0 - a) + self.top * a
    }
}

/// Fixed parameters of a trace.
#[derive(Debug, Clone)]
pub struct TraceSettings {
    /// Depth at which recursion is cut off and the sky returned
    pub max_depth: u32,
    /// The single light source
    pub light: PointLight,
    /// n / n_t for a ray entering a surface from outside
    pub n_over_nt: f32,
    /// Lower bound of the hit interval
    pub t_min: f32,
    /// Background gradient
    pub sky: Sky,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            light: PointLight::default(),
            n_over_nt: AIR_TO_GLASS,
            t_min: f32::EPSILON,
            sky: Sky::default(),
        }
    }
}

/// Compute the color seen along `ray`.
///
/// `self_index` is the surface the ray starts on (`None` for camera rays);
/// it is excluded from the hit test.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    self_index: Option<usize>,
    settings: &TraceSettings,
) -> Color {
    if depth >= settings.max_depth {
        return settings.sky.color(ray);
    }

    let ray_t = Interval::new(settings.t_min, f32::MAX);
    let Some(rec) = find_nearest(ray, scene, ray_t, self_index) else {
        return settings.sky.color(ray);
    };

    let local = local_color(&rec, &settings.light, scene);

    let material = rec.material;
    let reflects = !is_zero_weight(material.reflection);
    let transmits = !is_zero_weight(material.transmission);
    if !reflects && !transmits {
        return local;
    }

    let trace_from_hit = |direction: Vec3| {
        trace(
            &Ray::new(rec.p, direction),
            scene,
            depth + 1,
            Some(rec.scene_index),
            settings,
        )
    };

    let unit_direction = ray.direction().normalize();
    let reflected_direction = reflect(unit_direction, rec.normal).normalize();
    let reflected = if reflects {
        trace_from_hit(reflected_direction)
    } else {
        Color::ZERO
    };

    let transmitted = if transmits {
        let refracted = refract(unit_direction, rec.normal, settings.n_over_nt);
        match refracted.and_then(Vec3::try_normalize) {
            Some(refracted_direction) => trace_from_hit(refracted_direction),
            // Total internal reflection: the transmitted share goes the mirror way
            None if reflects => reflected,
            None => trace_from_hit(reflected_direction),
        }
    } else {
        Color::ZERO
    };

    compose(&material, local, reflected, transmitted)
}

/// Blend local, reflected and transmitted color by the material weights.
///
/// Transmission is layered over the reflection blend:
/// `(1 - w_t) * ((1 - w_r) * local + w_r * reflected) + w_t * transmitted`.
/// This is not the same as a three-way linear mix and must stay that way;
/// rendered output depends on it.
pub fn compose(material: &Material, local: Color, reflected: Color, transmitted: Color) -> Color {
    let w_r = material.reflection;
    let w_t = material.transmission;

    if is_zero_weight(w_r) && is_zero_weight(w_t) {
        local
    } else if is_zero_weight(w_t) {
        (1.0 - w_r) * local + w_r * reflected
    } else {
        (1.0 - w_t) * ((1.0 - w_r) * local + w_r * reflected) + w_t * transmitted
    }
}

#[inline]
fn is_zero_weight(w: f32) -> bool {
    w.abs() < WEIGHT_EPSILON
}

/// Reflect a unit direction about a unit normal.
#[inline]
pub fn reflect(unit_direction: Vec3, normal: Vec3) -> Vec3 {
    unit_direction - 2.0 * unit_direction.dot(normal) * normal
}

/// Refract a unit direction through a surface with outward unit `normal`.
///
/// `n_over_nt` is the ratio for a ray arriving from outside. A ray on the
/// inside (`d.N >= 0`) uses the flipped normal and the inverted ratio.
/// Returns `None` on total internal reflection.
pub fn refract(unit_direction: Vec3, normal: Vec3, n_over_nt: f32) -> Option<Vec3> {
    let cos_in = unit_direction.dot(normal);
    let (normal, n_over_nt, cos_theta) = if cos_in < 0.0 {
        (normal, n_over_nt, -cos_in)
    } else {
        (-normal, 1.0 / n_over_nt, cos_in)
    };

    let discriminant = 1.0 - n_over_nt * n_over_nt * (1.0 - cos_theta * cos_theta);
    if discriminant > 0.0 {
        Some(n_over_nt * (unit_direction + normal * cos_theta) - normal * discriminant.sqrt())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    fn single_sphere(material: Material) -> Scene {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            material,
        )));
        scene
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0))
    }

    fn assert_close(a: Color, b: Color) {
        assert!((a - b).length() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn test_sky_gradient() {
        let sky = Sky::default();

        let up = sky.color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(up, sky.top);

        let down = sky.color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0)));
        assert_eq!(down, sky.bottom);

        // Horizontal ray sits at t = 0.5
        let level = sky.color(&Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0)));
        assert_close(level, (sky.top + sky.bottom) * 0.5);
    }

    #[test]
    fn test_sky_ignores_direction_length() {
        let sky = Sky::default();
        let short = sky.color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.5, -0.5)));
        let long = sky.color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 8.0, -8.0)));
        assert_close(short, long);
    }

    #[test]
    fn test_depth_limit_returns_sky() {
        // The sphere is right in front of the ray, but depth is used up
        let scene = single_sphere(Material::default());
        let settings = TraceSettings::default();
        let ray = forward_ray();

        let color = trace(&ray, &scene, settings.max_depth, None, &settings);
        assert_eq!(color, settings.sky.color(&ray));
    }

    #[test]
    fn test_miss_returns_sky() {
        let scene = single_sphere(Material::default());
        let settings = TraceSettings::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(trace(&ray, &scene, 0, None, &settings), settings.sky.top);
    }

    #[test]
    fn test_diffuse_hit_is_local_color() {
        let scene = single_sphere(Material::default());
        let settings = TraceSettings::default();
        let ray = forward_ray();

        let rec = find_nearest(&ray, &scene, Interval::new(settings.t_min, f32::MAX), None)
            .expect("ray should hit");
        let expected = local_color(&rec, &settings.light, &scene);

        let color = trace(&ray, &scene, 0, None, &settings);
        assert_eq!(color, expected);
        assert!(color.length() > 0.0);
    }

    #[test]
    fn test_perfect_mirror_shows_reflection() {
        // Head-on hit bounces straight back toward +z, into the sky
        let scene = single_sphere(Material::new(Color::ONE, 1.0, 0.0));
        let settings = TraceSettings::default();

        let color = trace(&forward_ray(), &scene, 0, None, &settings);
        let back = settings.sky.color(&Ray::new(Vec3::ZERO, Vec3::Z));
        assert_eq!(color, back);
    }

    #[test]
    fn test_full_transmission_shows_refraction() {
        let settings = TraceSettings::default();
        let straight_through = settings.sky.color(&Ray::new(Vec3::ZERO, -Vec3::Z));

        // Any reflection weight is irrelevant once w_t = 1
        for w_r in [0.0, 0.5, 1.0] {
            let scene = single_sphere(Material::new(Color::ONE, w_r, 1.0));
            let color = trace(&forward_ray(), &scene, 0, None, &settings);
            assert_close(color, straight_through);
        }
    }

    #[test]
    fn test_recursion_reaches_other_surfaces() {
        // A mirror facing a red diffuse sphere behind the camera
        let mut scene = single_sphere(Material::new(Color::ONE, 1.0, 0.0));
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 4.0),
            0.5,
            Material::diffuse(Color::new(1.0, 0.0, 0.0)),
        )));
        let settings = TraceSettings {
            light: PointLight {
                position: Vec3::new(0.0, 0.0, 0.0),
                intensity: Color::ONE,
            },
            ..Default::default()
        };

        let color = trace(&forward_ray(), &scene, 0, None, &settings);
        assert!(color.x > 0.0);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_total_internal_reflection_stays_finite() {
        // Camera inside a big glass sphere looking at a grazing angle
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::ZERO,
            10.0,
            Material::new(Color::ONE, 0.0, 1.0),
        )));
        let settings = TraceSettings::default();
        let ray = Ray::new(Vec3::new(0.0, 9.0, 0.0), Vec3::Z);

        let color = trace(&ray, &scene, 0, None, &settings);
        assert!(color.is_finite(), "got {color}");
    }

    #[test]
    fn test_compose_policy() {
        let local = Color::new(0.2, 0.4, 0.6);
        let reflected = Color::new(1.0, 0.0, 0.0);
        let transmitted = Color::new(0.0, 0.0, 1.0);
        let mix = |w_r, w_t| compose(&Material::new(Color::ONE, w_r, w_t), local, reflected, transmitted);

        assert_eq!(mix(0.0, 0.0), local);
        assert_eq!(mix(1.0, 0.0), reflected);
        assert_eq!(mix(0.0, 1.0), transmitted);
        assert_eq!(mix(0.7, 1.0), transmitted);

        let half = mix(0.5, 0.0);
        assert_close(half, (local + reflected) * 0.5);
    }

    #[test]
    fn test_compose_nests_transmission_over_reflection() {
        let local = Color::splat(0.2);
        let reflected = Color::splat(0.6);
        let transmitted = Color::splat(1.0);
        let (w_r, w_t) = (0.5, 0.25);

        let color = compose(&Material::new(Color::ONE, w_r, w_t), local, reflected, transmitted);

        let nested = (1.0 - w_t) * ((1.0 - w_r) * local + w_r * reflected) + w_t * transmitted;
        let linear = (1.0 - w_r - w_t) * local + w_r * reflected + w_t * transmitted;
        assert_close(color, nested);
        assert!((color - linear).length() > 0.01);
    }

    #[test]
    fn test_reflect() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(d, Vec3::Y);
        assert_close(r, Vec3::new(1.0, 1.0, 0.0).normalize());
    }

    #[test]
    fn test_refract_normal_incidence() {
        let r = refract(-Vec3::Z, Vec3::Z, AIR_TO_GLASS).expect("should refract");
        assert_close(r, -Vec3::Z);
    }

    #[test]
    fn test_refract_follows_snell() {
        let d = Vec3::new(1.0, 0.0, -1.0).normalize();
        let r = refract(d, Vec3::Z, AIR_TO_GLASS).expect("should refract");

        // sin(theta_t) = n/n_t * sin(theta_i), bending toward the normal
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!((r.x - d.x * AIR_TO_GLASS).abs() < 1e-5);
        assert!(r.z < 0.0);
    }

    #[test]
    fn test_refract_from_inside_bends_away() {
        // Leaving the glass: normal points along the ray
        let d = Vec3::new(0.3, 0.0, 1.0).normalize();
        let r = refract(d, Vec3::Z, AIR_TO_GLASS).expect("should refract");

        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!((r.x - d.x / AIR_TO_GLASS).abs() < 1e-5);
        assert!(r.z > 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        let d = Vec3::new(1.0, 0.0, 0.1).normalize();
        assert!(refract(d, Vec3::Z, AIR_TO_GLASS).is_none());
    }
}
