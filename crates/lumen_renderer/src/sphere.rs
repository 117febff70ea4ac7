//! Sphere primitive for ray tracing.

use crate::{
    surface::{HitRecord, Surface},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Both roots of |O + tD - C|^2 = r^2, nearest first.
    ///
    /// A tangent ray (zero discriminant) counts as a miss.
    fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some(((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)))
    }
}

impl Surface for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let (near, far) = self.roots(ray)?;

        // The near root occludes the far one, so only fall back to far
        // when near is out of range (e.g. origin inside the sphere)
        let t = if ray_t.surrounds(near) {
            near
        } else if ray_t.surrounds(far) {
            far
        } else {
            return None;
        };

        let p = ray.at(t);
        Some(HitRecord {
            t,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material,
            scene_index: 0,
        })
    }

    fn shadow_hit(&self, ray: &Ray, t_min: f32) -> Option<f32> {
        let (near, far) = self.roots(ray)?;
        [near, far].into_iter().find(|&t| t > t_min)
    }
}
