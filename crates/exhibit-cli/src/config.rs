use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use exhibit_core::consts::DEFAULT_OPACITY;
use exhibit_core::transform::Transform;

/// Everything needed to render a report non-interactively, loadable from a
/// TOML file via `exhibit report --config`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reference image (exhibit A).
    pub reference: PathBuf,
    /// Overlay image (exhibit B).
    pub overlay: PathBuf,
    /// Output JPEG path; a timestamped name is generated when absent.
    pub output: Option<PathBuf>,
    /// Live-preview opacity in percent; the report blend panel ignores it.
    #[serde(default = "default_opacity")]
    pub opacity: u8,
    /// Measured preview viewport width in pixels, used to project drag
    /// offsets into report space.
    pub viewport_width: Option<f64>,
    #[serde(default)]
    pub transform: Transform,
}

fn default_opacity() -> u8 {
    DEFAULT_OPACITY
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference: PathBuf::from("exhibit_a.png"),
            overlay: PathBuf::from("exhibit_b.png"),
            output: None,
            opacity: DEFAULT_OPACITY,
            viewport_width: None,
            transform: Transform::identity(),
        }
    }
}
