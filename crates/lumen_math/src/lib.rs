//! Math types for Lumen.
//!
//! Vectors come straight from glam; this crate adds the ray and
//! parameter-interval types the tracer threads through every query.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
