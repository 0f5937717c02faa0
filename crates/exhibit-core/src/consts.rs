/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Report panel width in report pixels.
pub const PANEL_WIDTH: u32 = 1000;

/// Report panel height in report pixels.
pub const PANEL_HEIGHT: u32 = 1200;

/// Padding between panels and around the canvas edge.
pub const PANEL_PADDING: u32 = 40;

/// Height of the header band above the first panel row.
pub const HEADER_HEIGHT: u32 = 100;

/// Height of the footer band (readout + legend) below the last panel row.
pub const FOOTER_HEIGHT: u32 = 180;

/// Minimum overlay scale, in percent.
pub const MIN_SCALE_PERCENT: f64 = 10.0;

/// Maximum overlay scale, in percent.
pub const MAX_SCALE_PERCENT: f64 = 300.0;

/// Overlay rotation range, in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 45.0;

/// Identity scale, in percent.
pub const IDENTITY_SCALE_PERCENT: f64 = 100.0;

/// Default live-preview opacity, in percent.
pub const DEFAULT_OPACITY: u8 = 50;

/// Global alpha used for the blend panel in the rendered report. The live
/// preview follows the user's opacity slider; the report does not.
pub const REPORT_BLEND_ALPHA: f32 = 0.5;

/// Contrast boost applied to the visible difference panel.
pub const DIFF_CONTRAST: f32 = 1.5;

/// Brightness boost applied to the visible difference panel, after contrast.
pub const DIFF_BRIGHTNESS: f32 = 1.2;

/// Fraction of the panel (per axis) analysed for the similarity score.
pub const ANALYSIS_CROP_FRACTION: f64 = 0.5;

/// Raw scores above this threshold are reported as [`SCORE_CEILING`] instead,
/// so the report never claims a perfect match.
pub const SCORE_CLAMP_THRESHOLD: f64 = 90.0;

/// The score reported for any raw score above [`SCORE_CLAMP_THRESHOLD`].
pub const SCORE_CEILING: f64 = 98.0;

/// JPEG quality of the encoded report.
pub const JPEG_QUALITY: u8 = 90;

/// Canvas background.
pub const COLOR_CANVAS_BG: [u8; 3] = [5, 5, 5];

/// Footer band background.
pub const COLOR_FOOTER_BG: [u8; 3] = [17, 17, 17];

/// Neutral panel border.
pub const COLOR_BORDER: [u8; 3] = [51, 51, 51];

/// Accent used for the analytic (difference) panel and key readouts.
pub const COLOR_ACCENT: [u8; 3] = [0, 255, 65];

/// Neutral label text.
pub const COLOR_LABEL: [u8; 3] = [200, 200, 200];

/// Dim legend text.
pub const COLOR_LEGEND: [u8; 3] = [150, 150, 150];

/// Report title line.
pub const REPORT_TITLE: &str = "EXHIBIT // FORENSIC OVERLAY REPORT";

/// Panel labels, in panel order.
pub const PANEL_LABELS: [&str; 4] = [
    "EXHIBIT A: REFERENCE",
    "EXHIBIT B: TARGET",
    "OVERLAY BLEND",
    "FORENSIC DIFFERENCE",
];

/// Legend explaining how to read the difference panel.
pub const LEGEND_LINES: [&str; 3] = [
    "VOID BLACK  = PERFECT ALIGNMENT",
    "GHOST GRAY  = TONAL MISMATCH",
    "NEON EDGES  = STRUCTURAL MISMATCH",
];

/// Closing banner line of the report footer.
pub const VERDICT_LINE: &str = "VERDICT: SYMMETRY_PRO // DATA_LOCK_SECURE";
