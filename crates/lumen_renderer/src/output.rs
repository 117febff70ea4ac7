//! Image file output.
//!
//! `.ppm` is written as plain-text P3; `.png` goes through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::{color_to_rgba, ImageBuffer};

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Save `image` to `path`, picking the format from the extension.
pub fn save_image<P: AsRef<Path>>(
    image: &ImageBuffer,
    path: P,
    gamma_correct: bool,
) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer, gamma_correct)?;
            writer.flush()?;
        }
        "png" => {
            image::save_buffer(
                path,
                &image.to_rgb(gamma_correct),
                image.width,
                image.height,
                image::ColorType::Rgb8,
            )?;
        }
        other => return Err(OutputError::UnsupportedFormat(other.to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Write `image` as a plain-text (P3) PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W, gamma_correct: bool) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let rgba = color_to_rgba(*color, gamma_correct);
        writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
    }

    Ok(())
}
