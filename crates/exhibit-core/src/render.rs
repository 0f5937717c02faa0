pub mod canvas;
pub mod font;
pub mod layout;
pub mod report;

pub use report::{render_report, RenderMode, Report};
