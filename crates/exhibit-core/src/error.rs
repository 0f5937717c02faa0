use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExhibitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing input: both a reference and an overlay image are required")]
    MissingInput,

    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("viewport width unavailable or zero; cannot project transform")]
    ViewportUnavailable,
}

pub type Result<T> = std::result::Result<T, ExhibitError>;
