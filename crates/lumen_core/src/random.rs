//! Procedural sphere field.
//!
//! A large ground sphere, three showcase spheres (glass, mirror, matte) in
//! the middle, and a scatter of small spheres on the ground. The random
//! source is passed in so the same seed always yields the same layout.

use lumen_math::Vec3;
use rand::Rng;

use crate::material::{Color, Material};
use crate::scene::{SceneDescription, SphereDesc};

/// Number of small scattered spheres.
pub const SMALL_SPHERE_COUNT: usize = 48;

/// Radius of the scattered spheres.
pub const SMALL_SPHERE_RADIUS: f32 = 0.1;

/// Palette the scattered spheres pick their diffuse color from.
pub const PALETTE: [Color; 8] = [
    Color::new(0.8, 0.3, 0.3),
    Color::new(0.3, 0.8, 0.3),
    Color::new(0.3, 0.3, 0.8),
    Color::new(0.8, 0.8, 0.3),
    Color::new(0.3, 0.8, 0.8),
    Color::new(0.8, 0.3, 0.8),
    Color::new(0.8, 0.8, 0.8),
    Color::new(0.3, 0.3, 0.3),
];

/// Build the sphere field from the given random source.
pub fn random_scene<R: Rng + ?Sized>(rng: &mut R) -> SceneDescription {
    let mut scene = SceneDescription::new();

    // Ground
    scene.add_sphere(SphereDesc::new(
        Vec3::new(0.0, -100.5, -2.0),
        100.0,
        Material::default(),
    ));

    // Glass, mirror and matte in the middle
    scene.add_sphere(SphereDesc::new(
        Vec3::new(0.0, 0.0, -2.0),
        0.5,
        Material::new(Color::ONE, 0.0, 0.9),
    ));
    scene.add_sphere(SphereDesc::new(
        Vec3::new(1.0, 0.0, -1.75),
        0.5,
        Material::new(Color::ONE, 0.9, 0.0),
    ));
    scene.add_sphere(SphereDesc::new(
        Vec3::new(-1.0, 0.0, -2.25),
        0.5,
        Material::new(Color::new(1.0, 0.7, 0.3), 0.0, 0.0),
    ));

    for _ in 0..SMALL_SPHERE_COUNT {
        let x = rng.gen::<f32>() * 6.0 - 3.0;
        let z = rng.gen::<f32>() * 3.0 - 1.5;
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let reflection = rng.gen::<f32>();

        scene.add_sphere(SphereDesc::new(
            Vec3::new(x, -0.4, z - 2.0),
            SMALL_SPHERE_RADIUS,
            Material::new(color, reflection, 0.0),
        ));
    }

    log::debug!("Generated random scene with {} spheres", scene.sphere_count());
    scene
}
