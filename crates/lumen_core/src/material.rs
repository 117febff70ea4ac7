//! Surface material coefficients.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Material of a traced surface.
///
/// A diffuse color plus two blend weights: how much of the final color comes
/// from the reflected ray (`w_r`) and how much from the refracted ray (`w_t`).
/// The weights are not required to sum to 1. When both are set, transmission
/// is blended over the already mixed diffuse/reflection color rather than
/// taking a three-way linear share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse coefficient `kd` (RGB, 0-1)
    pub diffuse_color: Color,

    /// Reflection weight `w_r` (0=none, 1=perfect mirror)
    pub reflection: f32,

    /// Transmission weight `w_t` (0=opaque, 1=fully transmissive)
    pub transmission: f32,
}

impl Default for Material {
    /// White diffuse, no reflection, no transmission.
    fn default() -> Self {
        Self {
            diffuse_color: Color::ONE,
            reflection: 0.0,
            transmission: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse_color: Color, reflection: f32, transmission: f32) -> Self {
        Self {
            diffuse_color,
            reflection,
            transmission,
        }
    }

    /// A purely diffuse material of the given color.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    /// Returns a description of the first out-of-range value, if any.
    ///
    /// Out-of-range weights still render; the loader only warns about them.
    pub fn range_problem(&self) -> Option<String> {
        let unit = lumen_math::Interval::UNIT;
        if !unit.contains(self.reflection) {
            return Some(format!("reflection weight {} outside [0, 1]", self.reflection));
        }
        if !unit.contains(self.transmission) {
            return Some(format!(
                "transmission weight {} outside [0, 1]",
                self.transmission
            ));
        }
        let kd = self.diffuse_color;
        if !(unit.contains(kd.x) && unit.contains(kd.y) && unit.contains(kd.z)) {
            return Some(format!("diffuse color {kd} outside [0, 1]"));
        }
        None
    }
}
