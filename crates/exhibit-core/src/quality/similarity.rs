use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{
    ANALYSIS_CROP_FRACTION, COLOR_CANVAS_BG, PANEL_HEIGHT, PANEL_WIDTH, SCORE_CEILING,
    SCORE_CLAMP_THRESHOLD,
};
use crate::raster::Raster;
use crate::render::canvas::{Compositing, RasterCanvas, Surface};
use crate::render::layout::{contain_rect, Rect};
use crate::transform::ScaledTransform;

/// Crude structural-similarity score in [0, 100], one decimal place.
///
/// Renders the reference and the transformed overlay with raw difference
/// compositing into an off-screen panel-sized buffer (never displayed), then
/// scores the centered crop of that buffer. Higher is a closer match.
pub fn similarity_score(reference: &Raster, overlay: &Raster, transform: &ScaledTransform) -> f32 {
    let panel = Rect {
        x: 0,
        y: 0,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
    };
    let mut canvas = RasterCanvas::new(panel.width, panel.height, Rgb(COLOR_CANVAS_BG));

    let ref_fit = contain_rect(reference.width(), reference.height(), panel.width, panel.height);
    canvas.draw_raster(
        reference,
        panel,
        ref_fit,
        &ScaledTransform::identity(),
        Compositing::Opaque,
    );

    let overlay_fit = contain_rect(overlay.width(), overlay.height(), panel.width, panel.height);
    canvas.draw_raster(
        overlay,
        panel,
        overlay_fit,
        transform,
        // Raw |a-b|; the visibility boost is for the displayed panel only.
        Compositing::Difference {
            contrast: 1.0,
            brightness: 1.0,
        },
    );

    score_difference(canvas.image())
}

/// Score a rendered difference buffer.
///
/// The centered crop (half the buffer per axis) is reduced to per-pixel
/// luminance `(R+G+B)/3` and averaged; `100 - avg/255*100` is the raw score.
/// Any raw score above the clamp threshold is reported as the fixed ceiling,
/// never a value in between, so a report cannot claim a perfect match.
pub fn score_difference(diff: &RgbImage) -> f32 {
    let (w, h) = diff.dimensions();
    let crop_w = ((w as f64 * ANALYSIS_CROP_FRACTION) as u32).max(1);
    let crop_h = ((h as f64 * ANALYSIS_CROP_FRACTION) as u32).max(1);
    let x0 = (w - crop_w) / 2;
    let y0 = (h - crop_h) / 2;

    let mut luminance = Array2::<f32>::zeros((crop_h as usize, crop_w as usize));
    for row in 0..crop_h {
        for col in 0..crop_w {
            let p = diff.get_pixel(x0 + col, y0 + row);
            luminance[[row as usize, col as usize]] =
                (p[0] as f32 + p[1] as f32 + p[2] as f32) / 3.0;
        }
    }

    // Accumulate in f64; an f32 running sum drifts over a panel-sized crop.
    let sum: f64 = luminance.iter().map(|&v| v as f64).sum();
    let avg_diff = sum / luminance.len() as f64;
    let raw = 100.0 - (avg_diff / 255.0 * 100.0);
    let score = if raw > SCORE_CLAMP_THRESHOLD {
        SCORE_CEILING
    } else {
        raw
    };
    ((score * 10.0).round() / 10.0) as f32
}
