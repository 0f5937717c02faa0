use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use exhibit_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let megapixels = raster.width() as f64 * raster.height() as f64 / 1_000_000.0;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Megapixels:  {:.1}", megapixels);
    println!(
        "Aspect:      {:.3}",
        raster.width() as f64 / raster.height() as f64
    );

    Ok(())
}
