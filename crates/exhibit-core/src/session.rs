use crate::consts::DEFAULT_OPACITY;
use crate::error::{ExhibitError, Result};
use crate::io::image_io;
use crate::raster::Raster;
use crate::render::{self, Report};
use crate::transform::Transform;

/// All state for one comparison: the two decoded images, the current
/// transform, and the live-preview flags.
///
/// Owned by the caller and passed into render calls; there is no ambient
/// state. The preview flags (`opacity`, `diff_mode`) belong to the
/// interactive surface and do not affect the rendered report.
#[derive(Clone, Debug)]
pub struct Session {
    pub reference: Option<Raster>,
    pub overlay: Option<Raster>,
    pub transform: Transform,
    pub opacity: u8,
    pub diff_mode: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            reference: None,
            overlay: None,
            transform: Transform::identity(),
            opacity: DEFAULT_OPACITY,
            diff_mode: false,
        }
    }

    pub fn load_reference(&mut self, bytes: &[u8]) -> Result<()> {
        self.reference = Some(image_io::decode_image(bytes)?);
        Ok(())
    }

    pub fn load_overlay(&mut self, bytes: &[u8]) -> Result<()> {
        self.overlay = Some(image_io::decode_image(bytes)?);
        Ok(())
    }

    /// Decode both images together; the decodes run as an unordered join and
    /// neither image is stored unless both succeed.
    pub fn load_pair(&mut self, reference: &[u8], overlay: &[u8]) -> Result<()> {
        let (reference, overlay) = image_io::decode_pair(reference, overlay)?;
        self.reference = Some(reference);
        self.overlay = Some(overlay);
        Ok(())
    }

    /// Back to the identity transform and default preview flags. Loaded
    /// images are kept.
    pub fn reset(&mut self) {
        self.transform.reset();
        self.opacity = DEFAULT_OPACITY;
        self.diff_mode = false;
    }

    /// Render the quad-panel report for the current state.
    ///
    /// Fails with [`ExhibitError::MissingInput`] unless both images have been
    /// supplied; no partial canvas is produced.
    pub fn render_report(&self, viewport_width: Option<f64>) -> Result<Report> {
        let (reference, overlay) = match (&self.reference, &self.overlay) {
            (Some(reference), Some(overlay)) => (reference, overlay),
            _ => return Err(ExhibitError::MissingInput),
        };
        render::render_report(reference, overlay, &self.transform, viewport_width)
    }
}
