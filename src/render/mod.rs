//! Rendering pipeline: canvas abstraction, theme backgrounds, card content
//! flow, crop marks, and the PDF backend.

pub mod background;
pub mod canvas;
pub mod card;
pub mod marks;
pub mod pdf;
pub mod trace;

pub use background::CardTheme;
pub use canvas::{Align, Canvas, FillPath, PathSeg, Point, Rect, with_clip};
pub use card::{draw_card_front, draw_themed_card};
pub use marks::draw_crop_marks;
pub use pdf::PdfCanvas;
pub use trace::{DrawCmd, TraceCanvas};
