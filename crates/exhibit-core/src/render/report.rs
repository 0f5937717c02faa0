use chrono::Utc;
use image::Rgb;
use tracing::debug;

use crate::consts::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CANVAS_BG, COLOR_FOOTER_BG, COLOR_LABEL, COLOR_LEGEND,
    DIFF_BRIGHTNESS, DIFF_CONTRAST, JPEG_QUALITY, LEGEND_LINES, PANEL_LABELS, REPORT_BLEND_ALPHA,
    REPORT_TITLE, VERDICT_LINE,
};
use crate::error::Result;
use crate::io::image_io;
use crate::quality;
use crate::raster::Raster;
use crate::render::canvas::{Compositing, RasterCanvas, Surface};
use crate::render::layout::{contain_rect, ReportLayout};
use crate::transform::{ScaledTransform, Transform};

/// How the overlay is composited onto the base within a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderMode {
    BaseOnly,
    OverlayOnly,
    AlphaBlend { opacity: u8 },
    Difference,
}

/// A rendered report: encoded JPEG bytes plus the similarity score.
#[derive(Clone, Debug)]
pub struct Report {
    pub jpeg: Vec<u8>,
    pub score: f32,
    pub width: u32,
    pub height: u32,
}

/// Compose the quad-panel report and compute its similarity score.
///
/// `viewport_width` is the measured width, in on-screen pixels, of the
/// interactive viewport the transform offsets were captured in. Without it
/// the projection degrades to an identity multiplier (logged as a warning).
pub fn render_report(
    reference: &Raster,
    overlay: &Raster,
    transform: &Transform,
    viewport_width: Option<f64>,
) -> Result<Report> {
    let layout = ReportLayout::default();
    // Snapshot before drawing; a caller adjusting the transform mid-render
    // must not tear the geometry between panels.
    let snapshot = *transform;
    let projected = snapshot.project_or_identity(layout.panel_width as f64, viewport_width);

    let score = quality::similarity_score(reference, overlay, &projected);

    let mut canvas = RasterCanvas::new(
        layout.canvas_width(),
        layout.canvas_height(),
        Rgb(COLOR_CANVAS_BG),
    );

    let panels = [
        (RenderMode::BaseOnly, PANEL_LABELS[0]),
        (RenderMode::OverlayOnly, PANEL_LABELS[1]),
        (
            RenderMode::AlphaBlend {
                opacity: (REPORT_BLEND_ALPHA * 100.0) as u8,
            },
            PANEL_LABELS[2],
        ),
        (RenderMode::Difference, PANEL_LABELS[3]),
    ];
    for (slot, (mode, label)) in panels.iter().enumerate() {
        draw_panel(
            &mut canvas,
            &layout,
            slot,
            *mode,
            label,
            reference,
            overlay,
            &projected,
        );
    }

    draw_header(&mut canvas, &layout, score);
    draw_footer(&mut canvas, &layout, &snapshot);

    let jpeg = image_io::encode_jpeg(canvas.image(), JPEG_QUALITY)?;
    debug!(score, "report rendered");
    Ok(Report {
        jpeg,
        score,
        width: layout.canvas_width(),
        height: layout.canvas_height(),
    })
}

#[allow(clippy::too_many_arguments)]
fn draw_panel(
    surface: &mut impl Surface,
    layout: &ReportLayout,
    slot: usize,
    mode: RenderMode,
    label: &str,
    reference: &Raster,
    overlay: &Raster,
    projected: &ScaledTransform,
) {
    let panel = layout.panel_rect(slot);
    surface.fill_rect(panel, Rgb(COLOR_CANVAS_BG));

    if mode != RenderMode::OverlayOnly {
        let fit = contain_rect(
            reference.width(),
            reference.height(),
            panel.width,
            panel.height,
        );
        surface.draw_raster(
            reference,
            panel,
            fit,
            &ScaledTransform::identity(),
            Compositing::Opaque,
        );
    }

    if mode != RenderMode::BaseOnly {
        let fit = contain_rect(overlay.width(), overlay.height(), panel.width, panel.height);
        let compositing = match mode {
            RenderMode::AlphaBlend { opacity } => Compositing::Alpha(opacity as f32 / 100.0),
            RenderMode::Difference => Compositing::Difference {
                contrast: DIFF_CONTRAST,
                brightness: DIFF_BRIGHTNESS,
            },
            _ => Compositing::Opaque,
        };
        surface.draw_raster(overlay, panel, fit, projected, compositing);
    }

    // The difference panel is the analytic one; its frame gets the accent.
    let accent = mode == RenderMode::Difference;
    let border = if accent { COLOR_ACCENT } else { COLOR_BORDER };
    let text = if accent { COLOR_ACCENT } else { COLOR_LABEL };
    surface.stroke_rect(panel, 2, Rgb(border));
    surface.draw_text(label, panel.x + 20, panel.y + 20, 4, Rgb(text));
}

fn draw_header(surface: &mut impl Surface, layout: &ReportLayout, score: f32) {
    surface.draw_text(REPORT_TITLE, layout.padding, 20, 5, Rgb(COLOR_ACCENT));

    let stamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let meta = format!("MATCH SCORE: {score:.1}% | {stamp}");
    surface.draw_text(&meta, layout.padding, 64, 3, Rgb(COLOR_LABEL));
}

fn draw_footer(surface: &mut impl Surface, layout: &ReportLayout, transform: &Transform) {
    let band = layout.footer_rect();
    surface.fill_rect(band, Rgb(COLOR_FOOTER_BG));

    let x = band.x + 40;
    let readout = format!(
        "LANDMARKS >> ZOOM: {:.0}% | TILT: {:.0}DEG | X: {:.0} | Y: {:.0}",
        transform.scale_percent,
        transform.rotation_degrees,
        transform.offset_x,
        transform.offset_y,
    );
    surface.draw_text(&readout, x, band.y + 12, 3, Rgb(COLOR_ACCENT));

    for (i, line) in LEGEND_LINES.iter().enumerate() {
        surface.draw_text(line, x, band.y + 48 + i as u32 * 22, 2, Rgb(COLOR_LEGEND));
    }
    surface.draw_text(VERDICT_LINE, x, band.y + 118, 2, Rgb(COLOR_ACCENT));
}
