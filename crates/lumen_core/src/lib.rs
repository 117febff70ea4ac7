//! Lumen Core - Scene description and materials.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDesc`, `Material`, `PointLight`
//! - **Scene files**: JSON loading and saving
//! - **Procedural layout**: the seeded random sphere field
//!
//! The renderer turns a `SceneDescription` into traceable surfaces; nothing
//! in here knows about rays.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_scene, random_scene};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let from_file = load_scene("scene.json")?;
//! let generated = random_scene(&mut StdRng::seed_from_u64(819));
//! println!("{} / {} spheres", from_file.spheres.len(), generated.spheres.len());
//! ```

pub mod loader;
pub mod material;
pub mod random;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, save_scene, LoadError, LoadResult};
pub use material::{Color, Material};
pub use random::random_scene;
pub use scene::{PointLight, SceneDescription, SphereDesc};
