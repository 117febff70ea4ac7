//! Scene file loading and saving.
//!
//! Scene files are JSON:
//!
//! ```json
//! {
//!   "light": { "position": [-10.0, 10.0, 0.0], "intensity": [1.0, 1.0, 1.0] },
//!   "spheres": [
//!     { "center": [0.0, 0.0, -2.0], "radius": 0.5,
//!       "material": { "diffuse_color": [1.0, 1.0, 1.0], "reflection": 0.0, "transmission": 0.9 } }
//!   ]
//! }
//! ```
//!
//! Both `light` and each sphere's `material` may be omitted.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let content = fs::read_to_string(path)?;
    load_scene_from_str(&content)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(content: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(content)?;
    validate(&scene)?;

    log::info!(
        "Loaded {} spheres ({} reflective, {} transmissive)",
        scene.sphere_count(),
        scene.reflective_count(),
        scene.transmissive_count()
    );

    Ok(scene)
}

/// Write a scene description as pretty-printed JSON.
pub fn save_scene<P: AsRef<Path>>(scene: &SceneDescription, path: P) -> LoadResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(scene)?;
    fs::write(path, json)?;

    log::info!("Saved {} spheres to {}", scene.sphere_count(), path.display());
    Ok(())
}

/// Reject geometry the tracer cannot handle; warn about odd materials.
fn validate(scene: &SceneDescription) -> LoadResult<()> {
    for (index, sphere) in scene.spheres.iter().enumerate() {
        if !sphere.center.is_finite() {
            return Err(LoadError::InvalidSphere {
                index,
                reason: format!("center {} is not finite", sphere.center),
            });
        }
        // The normal is computed as (p - center) / radius
        if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
            return Err(LoadError::InvalidSphere {
                index,
                reason: format!("radius {} must be positive", sphere.radius),
            });
        }

        let material = &sphere.material;
        if let Some(problem) = material.range_problem() {
            log::warn!("Sphere {}: {}", index, problem);
        }
        if material.reflection + material.transmission > 1.0 {
            log::warn!(
                "Sphere {}: reflection + transmission = {} exceeds 1",
                index,
                material.reflection + material.transmission
            );
        }
    }

    Ok(())
}
