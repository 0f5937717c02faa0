use crate::consts::{FOOTER_HEIGHT, HEADER_HEIGHT, PANEL_HEIGHT, PANEL_PADDING, PANEL_WIDTH};

/// An axis-aligned pixel rectangle on the report canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The largest centered aspect-preserving placement of an image inside a box,
/// in box-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fixed report geometry: a 2x2 panel grid with a header band above and a
/// footer band below, all in report pixels.
#[derive(Clone, Copy, Debug)]
pub struct ReportLayout {
    pub panel_width: u32,
    pub panel_height: u32,
    pub padding: u32,
    pub header_height: u32,
    pub footer_height: u32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            padding: PANEL_PADDING,
            header_height: HEADER_HEIGHT,
            footer_height: FOOTER_HEIGHT,
        }
    }
}

impl ReportLayout {
    pub fn canvas_width(&self) -> u32 {
        2 * self.panel_width + 3 * self.padding
    }

    pub fn canvas_height(&self) -> u32 {
        self.header_height + 2 * self.panel_height + 3 * self.padding + self.footer_height
    }

    /// Panel region for slot 0..4, row-major.
    pub fn panel_rect(&self, slot: usize) -> Rect {
        let col = (slot % 2) as u32;
        let row = (slot / 2) as u32;
        Rect {
            x: self.padding + col * (self.panel_width + self.padding),
            y: self.header_height + self.padding + row * (self.panel_height + self.padding),
            width: self.panel_width,
            height: self.panel_height,
        }
    }

    /// The footer band, inset by the horizontal padding.
    pub fn footer_rect(&self) -> Rect {
        Rect {
            x: self.padding,
            y: self.canvas_height() - self.footer_height,
            width: self.canvas_width() - 2 * self.padding,
            height: self.footer_height - self.padding,
        }
    }
}

/// Largest centered rectangle with the image's aspect ratio that fits inside
/// a `box_w` x `box_h` box.
pub fn contain_rect(img_w: u32, img_h: u32, box_w: u32, box_h: u32) -> ContainRect {
    let ratio = (box_w as f64 / img_w as f64).min(box_h as f64 / img_h as f64);
    let width = img_w as f64 * ratio;
    let height = img_h as f64 * ratio;
    ContainRect {
        x: (box_w as f64 - width) / 2.0,
        y: (box_h as f64 - height) / 2.0,
        width,
        height,
    }
}
