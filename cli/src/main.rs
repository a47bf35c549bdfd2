use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use markerfind::{MarkerLocation, MarkerLocator, DEFAULT_CENTER_OFFSET};

/// Locate a dark blob marker in an image and print its pixel coordinates.
#[derive(Parser, Debug)]
#[command(name = "markerfind")]
#[command(about = "Locate a dark blob marker in an image", long_about = None)]
#[command(version)]
struct Args {
    /// Input image file path
    image: PathBuf,

    /// Write a copy of the image with the located marker drawn on it
    #[arg(long, value_name = "PATH")]
    debug_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Exit status: 0 marker found, 1 no marker, 2 I/O or decode failure.
    // Clap reports its own usage errors with status 2 as well.
    match run(&args) {
        Ok(Some(loc)) => {
            println!("[{}, {}]", loc.x, loc.y);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            tracing::info!("no qualifying marker found");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Option<MarkerLocation>> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    tracing::info!("loaded {} ({} bytes)", args.image.display(), bytes.len());

    let overlay_src = args.debug_out.as_ref().map(|_| bytes.clone());
    let location = MarkerLocator::new(bytes)?.locate()?;

    if let Some(ref loc) = location {
        tracing::info!("marker at ({}, {}), boundary area {}", loc.x, loc.y, loc.area);

        if let (Some(path), Some(src)) = (args.debug_out.as_deref(), overlay_src) {
            write_debug_overlay(&src, loc, path)?;
            tracing::info!("debug overlay written to {}", path.display());
        }
    }

    Ok(location)
}

/// Draw the located centroid back onto the source image.
fn write_debug_overlay(bytes: &[u8], loc: &MarkerLocation, path: &Path) -> anyhow::Result<()> {
    use image::Rgb;
    use imageproc::drawing::{draw_cross_mut, draw_hollow_circle_mut};

    let mut canvas = image::load_from_memory(bytes)
        .context("failed to decode image for overlay")?
        .to_rgb8();

    // Reported coordinates carry the calibration offset; undo it to land
    // back on the image pixel grid.
    let cx = (loc.x + DEFAULT_CENTER_OFFSET.0).round() as i32;
    let cy = (loc.y + DEFAULT_CENTER_OFFSET.1).round() as i32;

    draw_hollow_circle_mut(&mut canvas, (cx, cy), 6, Rgb([0, 255, 0]));
    draw_cross_mut(&mut canvas, Rgb([255, 0, 0]), cx, cy);

    canvas
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
