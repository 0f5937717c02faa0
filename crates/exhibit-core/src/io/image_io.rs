use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::Result;
use crate::raster::Raster;

/// Decode an image from raw bytes; the format is sniffed from the payload.
pub fn decode_image(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes)?;
    Raster::new(img.to_rgb8())
}

/// Decode a reference/overlay byte pair.
///
/// The two decodes are independent, so they run as a join on the Rayon pool;
/// either failure aborts the pair.
pub fn decode_pair(reference: &[u8], overlay: &[u8]) -> Result<(Raster, Raster)> {
    let (a, b) = rayon::join(|| decode_image(reference), || decode_image(overlay));
    Ok((a?, b?))
}

/// Load an image file into a Raster.
pub fn load_image(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    Raster::new(img.to_rgb8())
}

/// Encode a composed canvas as JPEG at the given quality (1-100).
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}
