use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use exhibit_core::consts::PANEL_WIDTH;
use exhibit_core::io::image_io::load_image;
use exhibit_core::quality::similarity_score;
use exhibit_core::transform::{Transform, TransformDelta};

#[derive(Args)]
pub struct ScoreArgs {
    /// Reference image (exhibit A)
    pub reference: PathBuf,

    /// Overlay image (exhibit B)
    pub overlay: PathBuf,

    /// Overlay X offset, in viewport pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_x: f64,

    /// Overlay Y offset, in viewport pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_y: f64,

    /// Overlay scale, in percent
    #[arg(long, default_value = "100")]
    pub scale: f64,

    /// Overlay rotation, in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub rotation: f64,

    /// Measured preview viewport width in pixels
    #[arg(long)]
    pub viewport_width: Option<f64>,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let reference = load_image(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let overlay = load_image(&args.overlay)
        .with_context(|| format!("Failed to load {}", args.overlay.display()))?;

    let mut transform = Transform::identity();
    transform.apply(&TransformDelta {
        offset_x: Some(args.offset_x),
        offset_y: Some(args.offset_y),
        scale_percent: Some(args.scale),
        rotation_degrees: Some(args.rotation),
    });
    let projected = transform.project_or_identity(PANEL_WIDTH as f64, args.viewport_width);

    let score = similarity_score(&reference, &overlay, &projected);
    println!("{score:.1}");

    Ok(())
}
