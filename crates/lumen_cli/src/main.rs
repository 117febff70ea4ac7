//! lumen - render sphere scenes from the command line.
//!
//! `lumen render` traces either a JSON scene file or the seeded random
//! sphere field and writes a PPM or PNG. `lumen scene` writes the random
//! field out as JSON so it can be edited and rendered again.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lumen_core::{load_scene, random_scene, save_scene, SceneDescription};
use lumen_renderer::{render, save_image, Camera, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Recursive ray tracer for sphere scenes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image
    Render(RenderArgs),
    /// Write the random sphere field as a JSON scene file
    Scene {
        /// Output .json file
        output: PathBuf,
        /// Seed for the sphere layout
        #[arg(long, default_value_t = 819)]
        seed: u64,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// JSON scene file (default: random sphere field)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output image (.ppm or .png)
    #[arg(short, long, default_value = "lumen.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 200)]
    width: u32,

    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Samples per pixel
    #[arg(long, default_value_t = 100)]
    samples: u32,

    /// Recursion depth at which rays fall back to the sky
    #[arg(long, default_value_t = lumen_renderer::MAX_DEPTH)]
    max_depth: u32,

    /// Seed for pixel jitter and the random scene layout
    #[arg(long, default_value_t = 819)]
    seed: u64,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = lumen_renderer::DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Gamma-correct (gamma 2) before quantizing
    #[arg(long)]
    gamma: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render_command(args)?,
        Commands::Scene { output, seed } => {
            let description = random_scene(&mut StdRng::seed_from_u64(seed));
            save_scene(&description, &output)
                .with_context(|| format!("Failed to write scene {}", output.display()))?;
        }
    }

    Ok(())
}

fn render_command(args: RenderArgs) -> Result<()> {
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "Image size must be non-zero, got {}x{}",
        args.width,
        args.height
    );

    let description: SceneDescription = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using random scene (seed {})", args.seed);
            random_scene(&mut StdRng::seed_from_u64(args.seed))
        }
    };

    let mut config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples,
        bucket_size: args.bucket_size,
        seed: args.seed,
        gamma_correct: args.gamma,
        ..Default::default()
    };
    config.trace.max_depth = args.max_depth;
    config.trace.light = description.light;

    let start = Instant::now();
    let scene = Scene::from_description(&description);
    log::info!("Scene built in {:?}", start.elapsed());

    let image = render(&Camera::new(), &scene, &config);

    save_image(&image, &args.output, config.gamma_correct)
        .with_context(|| format!("Failed to save image {}", args.output.display()))?;

    Ok(())
}
