use image::RgbImage;

use crate::error::{ExhibitError, Result};

/// A decoded RGB raster.
///
/// Pixel values are 8-bit per channel. A raster is built once from decoded
/// bytes and never mutated afterwards; the renderer only reads from it.
#[derive(Clone, Debug)]
pub struct Raster {
    data: RgbImage,
}

impl Raster {
    pub fn new(data: RgbImage) -> Result<Self> {
        let (width, height) = data.dimensions();
        if width == 0 || height == 0 {
            return Err(ExhibitError::InvalidDimensions { width, height });
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.data
    }
}
