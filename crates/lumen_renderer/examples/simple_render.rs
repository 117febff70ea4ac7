//! Simple ray tracer example.
//!
//! Renders three spheres (glass, mirror, matte) on a ground sphere and
//! saves to PPM format.

use lumen_renderer::{
    render, save_image, Camera, Color, Material, RenderConfig, Scene, SceneDescription,
    SphereDesc, Vec3,
};

fn main() {
    env_logger::init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = Scene::from_description(&build_scene());

    let config = RenderConfig {
        width: 400,
        height: 200,
        samples_per_pixel: 16,
        ..Default::default()
    };

    // Slightly raised view of the three spheres
    let camera = Camera::look_at(
        Vec3::new(0.0, 0.5, 1.0),  // look_from
        Vec3::new(0.0, 0.0, -2.0), // look_at
        Vec3::new(0.0, 1.0, 0.0),  // vup
        60.0,
        config.width as f32 / config.height as f32,
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_image(&image, filename, config.gamma_correct).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> SceneDescription {
    SceneDescription::new()
        // Ground
        .with_sphere(SphereDesc::new(
            Vec3::new(0.0, -100.5, -2.0),
            100.0,
            Material::diffuse(Color::new(0.5, 0.5, 0.5)),
        ))
        .with_sphere(SphereDesc::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            Material::new(Color::ONE, 0.1, 0.9),
        ))
        .with_sphere(SphereDesc::new(
            Vec3::new(1.0, 0.0, -1.75),
            0.5,
            Material::new(Color::new(0.7, 0.6, 0.5), 0.9, 0.0),
        ))
        .with_sphere(SphereDesc::new(
            Vec3::new(-1.0, 0.0, -2.25),
            0.5,
            Material::diffuse(Color::new(1.0, 0.7, 0.3)),
        ))
}
