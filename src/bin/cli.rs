//! Batch filter CLI.
//!
//! For every image path given on the command line, decodes the file,
//! runs the full filter battery, and writes each result next to the
//! input as `<FilterName><OriginalFileName>`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::RgbImage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rasterfx::{process, PixelTransform, Raster, Rgb};

/// Filter battery with the output-name prefixes the tool has always used.
fn filters() -> Result<Vec<(&'static str, PixelTransform)>> {
    Ok(vec![
        ("Invert", PixelTransform::invert()),
        ("Blur", PixelTransform::blur(1)),
        ("GaussBlur", PixelTransform::gaussian(1, 3.0)?),
        ("GrayScale", PixelTransform::grayscale()),
        ("Sepia", PixelTransform::sepia()),
        ("Contrast", PixelTransform::contrast()),
        ("Sobel", PixelTransform::sobel()),
        ("Sharpless", PixelTransform::sharpen()),
    ])
}

fn to_raster(img: &RgbImage) -> Raster {
    Raster::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        let p = img.get_pixel(x as u32, y as u32);
        Rgb::new(p[0], p[1], p[2])
    })
}

fn to_image(raster: &Raster) -> RgbImage {
    RgbImage::from_fn(raster.width() as u32, raster.height() as u32, |x, y| {
        let c = raster.get(x as usize, y as usize);
        image::Rgb([c.r, c.g, c.b])
    })
}

/// `<prefix><file name>` in the input's directory.
fn output_path(input: &Path, prefix: &str) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .with_context(|| format!("no file name in {}", input.display()))?;
    let mut name = prefix.to_string();
    name.push_str(&file_name.to_string_lossy());
    Ok(input.with_file_name(name))
}

fn run_file(path: &Path, battery: &[(&'static str, PixelTransform)]) -> Result<()> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgb8();
    let raster = to_raster(&img);
    info!(path = %path.display(), width = raster.width(), height = raster.height(), "loaded");

    for (prefix, transform) in battery {
        let out = output_path(path, prefix)?;
        to_image(&process(&raster, transform))
            .save(&out)
            .with_context(|| format!("failed to encode {}", out.display()))?;
        info!(path = %out.display(), "wrote");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: cli <image file>...");
    }

    let battery = filters()?;
    for path in &paths {
        run_file(path, &battery)?;
    }
    Ok(())
}
