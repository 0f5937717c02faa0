use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use exhibit_core::io::image_io::{decode_image, decode_pair, encode_jpeg, load_image};

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 30) as u8, (y * 40) as u8, 128])
    })
}

fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn test_decode_png_preserves_pixels() {
    let img = gradient(8, 5);
    let raster = decode_image(&png_bytes(&img)).unwrap();

    assert_eq!(raster.width(), 8);
    assert_eq!(raster.height(), 5);
    assert_eq!(raster.pixels(), &img);
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(decode_image(&[0u8; 64]).is_err());
}

#[test]
fn test_decode_pair_fails_if_either_side_fails() {
    let good = png_bytes(&gradient(4, 4));

    assert!(decode_pair(&good, &good).is_ok());
    assert!(decode_pair(&good, b"garbage").is_err());
    assert!(decode_pair(b"garbage", &good).is_err());
}

#[test]
fn test_encode_jpeg_emits_a_jpeg_stream() {
    let img = gradient(16, 16);
    let bytes = encode_jpeg(&img, 90).unwrap();

    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 16);
}

#[test]
fn test_load_image_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exhibit.png");
    gradient(6, 9).save(&path).unwrap();

    let raster = load_image(&path).unwrap();
    assert_eq!(raster.width(), 6);
    assert_eq!(raster.height(), 9);

    assert!(load_image(&dir.path().join("missing.png")).is_err());
}
