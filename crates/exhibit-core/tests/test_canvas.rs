use image::{Rgb, RgbImage};

use exhibit_core::raster::Raster;
use exhibit_core::render::canvas::{Compositing, RasterCanvas, Surface};
use exhibit_core::render::font;
use exhibit_core::render::layout::{contain_rect, ContainRect, Rect};
use exhibit_core::transform::ScaledTransform;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn full_rect(size: u32) -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: size,
        height: size,
    }
}

fn full_fit(size: u32) -> ContainRect {
    ContainRect {
        x: 0.0,
        y: 0.0,
        width: size as f64,
        height: size as f64,
    }
}

#[test]
fn test_fill_rect_is_clamped_to_the_canvas() {
    let mut canvas = RasterCanvas::new(4, 4, BLACK);
    canvas.fill_rect(
        Rect {
            x: 2,
            y: 2,
            width: 10,
            height: 10,
        },
        WHITE,
    );

    assert_eq!(*canvas.image().get_pixel(1, 1), BLACK);
    assert_eq!(*canvas.image().get_pixel(2, 2), WHITE);
    assert_eq!(*canvas.image().get_pixel(3, 3), WHITE);
}

#[test]
fn test_stroke_rect_leaves_the_interior_untouched() {
    let mut canvas = RasterCanvas::new(8, 8, BLACK);
    canvas.stroke_rect(full_rect(8), 1, WHITE);

    assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
    assert_eq!(*canvas.image().get_pixel(7, 7), WHITE);
    assert_eq!(*canvas.image().get_pixel(3, 0), WHITE);
    assert_eq!(*canvas.image().get_pixel(3, 3), BLACK);
}

#[test]
fn test_draw_text_renders_glyph_pixels() {
    let mut canvas = RasterCanvas::new(10, 10, BLACK);
    // 'I' row 0 is 01110: columns 1..4 set.
    canvas.draw_text("I", 0, 0, 1, WHITE);

    assert_eq!(*canvas.image().get_pixel(2, 0), WHITE);
    assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);

    assert_eq!(font::text_width("AB", 2), 24);
}

#[test]
fn test_opaque_identity_draw_copies_pixels_exactly() {
    let src = RgbImage::from_fn(2, 2, |x, y| Rgb([(x * 100) as u8, (y * 100) as u8, 7]));
    let raster = Raster::new(src.clone()).unwrap();

    let mut canvas = RasterCanvas::new(2, 2, BLACK);
    canvas.draw_raster(
        &raster,
        full_rect(2),
        full_fit(2),
        &ScaledTransform::identity(),
        Compositing::Opaque,
    );

    assert_eq!(canvas.image(), &src);
}

#[test]
fn test_alpha_blend_halves_toward_the_destination() {
    let raster = Raster::new(RgbImage::from_pixel(2, 2, WHITE)).unwrap();

    let mut canvas = RasterCanvas::new(2, 2, BLACK);
    canvas.draw_raster(
        &raster,
        full_rect(2),
        full_fit(2),
        &ScaledTransform::identity(),
        Compositing::Alpha(0.5),
    );

    assert_eq!(*canvas.image().get_pixel(0, 0), Rgb([128, 128, 128]));
}

#[test]
fn test_difference_boost_saturates_extremes() {
    let white = Raster::new(RgbImage::from_pixel(2, 2, WHITE)).unwrap();
    let boost = Compositing::Difference {
        contrast: 1.5,
        brightness: 1.2,
    };

    // Full mismatch saturates high.
    let mut canvas = RasterCanvas::new(2, 2, BLACK);
    canvas.draw_raster(
        &white,
        full_rect(2),
        full_fit(2),
        &ScaledTransform::identity(),
        boost,
    );
    assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);

    // Perfect match collapses to black, even with the boost.
    let mut canvas = RasterCanvas::new(2, 2, WHITE);
    canvas.draw_raster(
        &white,
        full_rect(2),
        full_fit(2),
        &ScaledTransform::identity(),
        boost,
    );
    assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
}

#[test]
fn test_raw_difference_is_the_absolute_channel_delta() {
    let gray = Raster::new(RgbImage::from_pixel(2, 2, Rgb([200, 60, 0]))).unwrap();

    let mut canvas = RasterCanvas::new(2, 2, Rgb([150, 100, 0]));
    canvas.draw_raster(
        &gray,
        full_rect(2),
        full_fit(2),
        &ScaledTransform::identity(),
        Compositing::Difference {
            contrast: 1.0,
            brightness: 1.0,
        },
    );

    assert_eq!(*canvas.image().get_pixel(0, 0), Rgb([50, 40, 0]));
}

#[test]
fn test_translated_draw_leaves_uncovered_pixels_alone() {
    let white = Raster::new(RgbImage::from_pixel(4, 4, WHITE)).unwrap();
    let shifted = ScaledTransform {
        offset_x: 2.0,
        ..ScaledTransform::identity()
    };

    let mut canvas = RasterCanvas::new(4, 4, BLACK);
    canvas.draw_raster(&white, full_rect(4), full_fit(4), &shifted, Compositing::Opaque);

    // Left columns fall outside the shifted fit; right columns are covered.
    assert_eq!(*canvas.image().get_pixel(0, 1), BLACK);
    assert_eq!(*canvas.image().get_pixel(3, 1), WHITE);
}

#[test]
fn test_contain_fit_centers_a_non_square_raster() {
    // 2x1 image in a 4x4 clip: fit is 4x2 centered at y=1..3.
    let white = Raster::new(RgbImage::from_pixel(2, 1, WHITE)).unwrap();
    let fit = contain_rect(2, 1, 4, 4);

    let mut canvas = RasterCanvas::new(4, 4, BLACK);
    canvas.draw_raster(
        &white,
        full_rect(4),
        fit,
        &ScaledTransform::identity(),
        Compositing::Opaque,
    );

    assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
    assert_eq!(*canvas.image().get_pixel(0, 2), WHITE);
    assert_eq!(*canvas.image().get_pixel(3, 3), BLACK);
}
