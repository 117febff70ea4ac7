//! Lumen Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style tracer over analytic spheres: nearest-hit queries,
//! shadowed Lambertian shading from one point light, and recursive mirror
//! and glass rays blended by per-material weights.

mod bucket;
mod camera;
mod intersect;
mod output;
mod renderer;
mod scene;
mod shading;
mod shadow;
mod sphere;
mod surface;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use intersect::find_nearest;
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{color_to_rgba, linear_to_gamma, render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use shading::local_color;
pub use shadow::{is_occluded, SHADOW_EPSILON};
pub use sphere::Sphere;
pub use surface::{HitRecord, Surface};
pub use tracer::{
    compose, reflect, refract, trace, Sky, TraceSettings, AIR_TO_GLASS, MAX_DEPTH, WEIGHT_EPSILON,
};

/// Re-export scene description types from lumen_core
pub use lumen_core::{Color, Material, PointLight, SceneDescription, SphereDesc};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
