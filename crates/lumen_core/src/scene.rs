//! Scene description types for Lumen.
//!
//! A `SceneDescription` is plain data: an ordered list of spheres and the
//! single point light. Order matters only in that it fixes each surface's
//! index once the renderer builds its scene from it.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::{Color, Material};

/// A single point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,

    /// RGB intensity
    pub intensity: Color,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-10.0, 10.0, 0.0),
            intensity: Color::ONE,
        }
    }
}

/// A sphere placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,

    /// Material (defaults to white diffuse)
    #[serde(default)]
    pub material: Material,
}

impl SphereDesc {
    /// Create a new sphere description.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Everything needed to build a renderable scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Light source (optional in files)
    #[serde(default)]
    pub light: PointLight,

    /// Spheres in insertion order
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the default light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sphere.
    pub fn add_sphere(&mut self, sphere: SphereDesc) {
        self.spheres.push(sphere);
    }

    /// Builder-style variant of `add_sphere`.
    pub fn with_sphere(mut self, sphere: SphereDesc) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Replace the light.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = light;
        self
    }

    /// Number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Number of spheres with a non-zero reflection weight.
    pub fn reflective_count(&self) -> usize {
        self.spheres
            .iter()
            .filter(|s| s.material.reflection > 0.0)
            .count()
    }

    /// Number of spheres with a non-zero transmission weight.
    pub fn transmissive_count(&self) -> usize {
        self.spheres
            .iter()
            .filter(|s| s.material.transmission > 0.0)
            .count()
    }
}
