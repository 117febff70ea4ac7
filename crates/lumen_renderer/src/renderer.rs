//! Sampling driver.
//!
//! Shoots jittered camera rays through every pixel, averages the traced
//! colors, and assembles the image from buckets rendered in parallel.

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::tracer::{trace, TraceSettings};
use crate::{Camera, Color, Scene};
use lumen_math::Interval;
use rand::{Rng, RngCore};
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Base seed; each bucket derives its own generator from it
    pub seed: u64,
    /// Apply gamma 2 when converting to 8-bit
    pub gamma_correct: bool,
    /// Integrator parameters
    pub trace: TraceSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: 819,
            gamma_correct: false,
            trace: TraceSettings::default(),
        }
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGBA, clamping each channel to [0, 1].
pub fn color_to_rgba(color: Color, gamma_correct: bool) -> [u8; 4] {
    let encode = |c: f32| {
        let c = if gamma_correct { linear_to_gamma(c) } else { c };
        (255.0 * Interval::UNIT.clamp(c)) as u8
    };
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the top of the image; the camera's `v` runs upward.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.width as f32;
    let height = config.height as f32;
    let row = (config.height - 1 - y) as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + rng.gen::<f32>()) / width;
        let v = (row + rng.gen::<f32>()) / height;
        let ray = camera.get_ray(u, v);
        pixel_color += trace(&ray, scene, 0, None, &config.trace);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel.max(1) as f32
}

/// Linear-color image buffer.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    /// Convert to RGB bytes, row-major from the top.
    pub fn to_rgb(&self, gamma_correct: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            let rgba = color_to_rgba(*color, gamma_correct);
            bytes.extend_from_slice(&rgba[..3]);
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are traced in parallel. Each bucket seeds its own generator from
/// `config.seed` and its index, so the result does not depend on scheduling.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp, {} surfaces, {} buckets",
        config.width,
        config.height,
        config.samples_per_pixel,
        scene.len(),
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, scene, config);
            log::debug!("Bucket {} done ({}x{})", bucket.index, bucket.width, bucket.height);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
