use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::raster::Raster;
use crate::render::font;
use crate::render::layout::{ContainRect, Rect};
use crate::transform::ScaledTransform;

/// Pixel compositing applied when a raster is drawn onto the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Compositing {
    /// Source replaces destination.
    Opaque,
    /// Source blended over destination with a global alpha in [0, 1].
    Alpha(f32),
    /// Per-channel |src - dst|, then a contrast/brightness boost.
    /// `contrast: 1.0, brightness: 1.0` leaves the raw difference untouched.
    Difference { contrast: f32, brightness: f32 },
}

/// Minimal 2D drawing surface for report composition.
///
/// All raster draws are clipped to an explicit region; there is no ambient
/// clip stack. `fit` places the raster inside the clip box (aspect-preserving
/// contain placement) and `transform` moves that placement about the clip
/// center.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>);

    fn stroke_rect(&mut self, rect: Rect, thickness: u32, color: Rgb<u8>);

    /// Draw `text` with the built-in bitmap font at an integer scale; `(x, y)`
    /// is the top-left corner of the first glyph cell.
    fn draw_text(&mut self, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>);

    /// Draw `raster` into `clip`, contain-fitted per `fit`, moved by
    /// `transform` about the clip center, compositing each covered pixel.
    fn draw_raster(
        &mut self,
        raster: &Raster,
        clip: Rect,
        fit: ContainRect,
        transform: &ScaledTransform,
        compositing: Compositing,
    );
}

/// An in-memory RGB canvas. Each render call owns one; nothing is shared.
pub struct RasterCanvas {
    pixels: RgbImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }

    fn clamp_rect(&self, rect: Rect) -> Rect {
        let x = rect.x.min(self.pixels.width());
        let y = rect.y.min(self.pixels.height());
        Rect {
            x,
            y,
            width: rect.width.min(self.pixels.width() - x),
            height: rect.height.min(self.pixels.height() - y),
        }
    }
}

impl Surface for RasterCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        let rect = self.clamp_rect(rect);
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                self.pixels.put_pixel(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: u32, color: Rgb<u8>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let t = thickness.min(rect.width / 2).min(rect.height / 2).max(1);
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect { x, y, width, height: t }, color);
        self.fill_rect(
            Rect { x, y: y + height - t, width, height: t },
            color,
        );
        self.fill_rect(Rect { x, y, width: t, height }, color);
        self.fill_rect(
            Rect { x: x + width - t, y, width: t, height },
            color,
        );
    }

    fn draw_text(&mut self, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
        let scale = scale.max(1);
        let mut pen_x = x;
        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        let block = Rect {
                            x: pen_x + col * scale,
                            y: y + row as u32 * scale,
                            width: scale,
                            height: scale,
                        };
                        self.fill_rect(block, color);
                    }
                }
            }
            pen_x += font::GLYPH_ADVANCE * scale;
        }
    }

    fn draw_raster(
        &mut self,
        raster: &Raster,
        clip: Rect,
        fit: ContainRect,
        transform: &ScaledTransform,
        compositing: Compositing,
    ) {
        let clip = self.clamp_rect(clip);
        if clip.width == 0 || clip.height == 0 {
            return;
        }

        let src = raster.pixels();
        if fit.width <= 0.0 || fit.height <= 0.0 || transform.scale_percent <= 0.0 {
            return;
        }
        let center_x = clip.x as f64 + clip.width as f64 / 2.0 + transform.offset_x;
        let center_y = clip.y as f64 + clip.height as f64 / 2.0 + transform.offset_y;
        let scale = transform.scale_percent / 100.0;
        let theta = transform.rotation_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let half_w = fit.width / 2.0;
        let half_h = fit.height / 2.0;
        let sx_per_fit = src.width() as f64 / fit.width;
        let sy_per_fit = src.height() as f64 / fit.height;

        let stride = self.pixels.width() as usize * 3;
        let row_range = clip.y as usize..(clip.y + clip.height) as usize;
        let col_range = clip.x as usize..(clip.x + clip.width) as usize;

        let render_row = |y: usize, row: &mut [u8]| {
            for x in col_range.clone() {
                // Invert the panel-space transform: un-translate, un-scale,
                // un-rotate, landing in fit-local coordinates about center.
                let dx = x as f64 + 0.5 - center_x;
                let dy = y as f64 + 0.5 - center_y;
                let qx = (cos * dx + sin * dy) / scale;
                let qy = (-sin * dx + cos * dy) / scale;
                if qx < -half_w || qx > half_w || qy < -half_h || qy > half_h {
                    continue;
                }

                let src_x = (qx + half_w) * sx_per_fit - 0.5;
                let src_y = (qy + half_h) * sy_per_fit - 0.5;
                let sample = bilinear_sample(src, src_x, src_y);

                let i = x * 3;
                let dst = &mut row[i..i + 3];
                composite_pixel(dst, sample, compositing);
            }
        };

        let buf: &mut [u8] = &mut self.pixels;
        if (clip.width * clip.height) as usize >= PARALLEL_PIXEL_THRESHOLD {
            buf.par_chunks_mut(stride)
                .enumerate()
                .skip(row_range.start)
                .take(clip.height as usize)
                .for_each(|(y, row)| render_row(y, row));
        } else {
            for (y, row) in buf
                .chunks_mut(stride)
                .enumerate()
                .skip(row_range.start)
                .take(clip.height as usize)
            {
                render_row(y, row);
            }
        }
    }
}

fn composite_pixel(dst: &mut [u8], src: [f32; 3], compositing: Compositing) {
    match compositing {
        Compositing::Opaque => {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.round().clamp(0.0, 255.0) as u8;
            }
        }
        Compositing::Alpha(alpha) => {
            let alpha = alpha.clamp(0.0, 1.0);
            for (d, s) in dst.iter_mut().zip(src) {
                let blended = s * alpha + *d as f32 * (1.0 - alpha);
                *d = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
        Compositing::Difference { contrast, brightness } => {
            for (d, s) in dst.iter_mut().zip(src) {
                let diff = (s - *d as f32).abs() / 255.0;
                let boosted = ((diff - 0.5) * contrast + 0.5) * brightness;
                *d = (boosted.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }
    }
}

/// Bilinear sample with edge clamping; `x`/`y` are in source pixel centers.
fn bilinear_sample(src: &RgbImage, x: f64, y: f64) -> [f32; 3] {
    let (w, h) = (src.width() as i64, src.height() as i64);

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let sample = |px: i64, py: i64| -> &Rgb<u8> {
        let cx = px.clamp(0, w - 1) as u32;
        let cy = py.clamp(0, h - 1) as u32;
        src.get_pixel(cx, cy)
    };

    let p00 = sample(x0, y0);
    let p10 = sample(x0 + 1, y0);
    let p01 = sample(x0, y0 + 1);
    let p11 = sample(x0 + 1, y0 + 1);

    let mut out = [0.0f32; 3];
    for c in 0..3 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        out[c] = top * (1.0 - fy) + bottom * fy;
    }
    out
}
