//! The renderable scene: an ordered list of surfaces.

use crate::{SceneDescription, Sphere, Surface};

/// An ordered collection of surfaces.
///
/// Insertion order gives each surface a stable index, which the tracer uses
/// to keep rays spawned on a surface from hitting that same surface again.
/// The scene is never modified while rendering.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Build the spheres of a scene description, keeping their order.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new();
        for sphere in &description.spheres {
            scene.add(Box::new(Sphere::new(
                sphere.center,
                sphere.radius,
                sphere.material,
            )));
        }
        log::debug!("Built scene with {} surfaces", scene.len());
        scene
    }

    /// Add a surface, returning its index.
    pub fn add(&mut self, surface: Box<dyn Surface>) -> usize {
        self.surfaces.push(surface);
        self.surfaces.len() - 1
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Surface at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&dyn Surface> {
        self.surfaces.get(index).map(|s| s.as_ref())
    }

    /// Every surface except `exclude`, paired with its index.
    pub fn candidates(
        &self,
        exclude: Option<usize>,
    ) -> impl Iterator<Item = (usize, &dyn Surface)> + '_ {
        self.surfaces
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != exclude)
            .map(|(index, surface)| (index, surface.as_ref()))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
