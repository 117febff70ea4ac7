//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scene.json
//! Without an argument the seeded random scene is shown instead.

use std::env;

use lumen_core::{load_scene, random_scene, SceneDescription};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let scene: SceneDescription = match args.get(1) {
        Some(path) => match load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Error loading scene: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("No scene file given, using random scene (seed 819)");
            random_scene(&mut StdRng::seed_from_u64(819))
        }
    };

    println!("\n=== Scene ===");
    println!("Spheres: {}", scene.sphere_count());
    println!("Reflective: {}", scene.reflective_count());
    println!("Transmissive: {}", scene.transmissive_count());
    println!(
        "Light: {} intensity {}",
        scene.light.position, scene.light.intensity
    );

    println!("\n--- Spheres ---");
    for (i, sphere) in scene.spheres.iter().enumerate() {
        println!(
            "  [{}] center {} r={} kd={} w_r={:.2} w_t={:.2}",
            i,
            sphere.center,
            sphere.radius,
            sphere.material.diffuse_color,
            sphere.material.reflection,
            sphere.material.transmission
        );
    }
}
