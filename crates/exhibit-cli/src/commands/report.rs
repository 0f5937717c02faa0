use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Args;
use console::Style;

use exhibit_core::session::Session;
use exhibit_core::transform::{Transform, TransformDelta};

use crate::config::ReportConfig;

#[derive(Args)]
pub struct ReportArgs {
    /// Reference image (exhibit A)
    pub reference: Option<PathBuf>,

    /// Overlay image (exhibit B)
    pub overlay: Option<PathBuf>,

    /// Load paths and transform from a TOML config instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,

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

    /// Live-preview opacity in percent (the report blend panel is fixed)
    #[arg(long, default_value = "50")]
    pub opacity: u8,

    /// Measured preview viewport width in pixels; offsets are projected
    /// from this width into report panel space
    #[arg(long)]
    pub viewport_width: Option<f64>,

    /// Output JPEG path (default: timestamped exhibit-report-*.jpg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    score: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            score: Style::new().green().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn run(args: &ReportArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let reference = fs::read(&config.reference)
        .with_context(|| format!("Failed to read {}", config.reference.display()))?;
    let overlay = fs::read(&config.overlay)
        .with_context(|| format!("Failed to read {}", config.overlay.display()))?;

    let mut session = Session::new();
    session.load_pair(&reference, &overlay)?;
    // Route through apply() so config-file values get the same clamping as
    // flag values.
    session.transform.apply(&TransformDelta {
        offset_x: Some(config.transform.offset_x),
        offset_y: Some(config.transform.offset_y),
        scale_percent: Some(config.transform.scale_percent),
        rotation_degrees: Some(config.transform.rotation_degrees),
    });
    session.opacity = config.opacity;

    let report = session.render_report(config.viewport_width)?;

    let output = config.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "exhibit-report-{}.jpg",
            Local::now().format("%Y%m%d-%H%M%S")
        ))
    });
    fs::write(&output, &report.jpeg)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let s = Styles::new();
    println!();
    println!("  {}", s.title.apply_to("Exhibit Report"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Reference"),
        s.value.apply_to(config.reference.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Overlay"),
        s.value.apply_to(config.overlay.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{}x{}", report.width, report.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Score"),
        s.score.apply_to(format!("{:.1}%", report.score))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );

    Ok(())
}

fn resolve_config(args: &ReportArgs) -> Result<ReportConfig> {
    if let Some(ref path) = args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ReportConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        return Ok(config);
    }

    let (Some(reference), Some(overlay)) = (args.reference.clone(), args.overlay.clone()) else {
        bail!("Provide <REFERENCE> and <OVERLAY> image paths, or --config");
    };

    let mut transform = Transform::identity();
    transform.apply(&TransformDelta {
        offset_x: Some(args.offset_x),
        offset_y: Some(args.offset_y),
        scale_percent: Some(args.scale),
        rotation_degrees: Some(args.rotation),
    });

    Ok(ReportConfig {
        reference,
        overlay,
        output: args.output.clone(),
        transform,
        opacity: args.opacity.min(100),
        viewport_width: args.viewport_width,
    })
}
