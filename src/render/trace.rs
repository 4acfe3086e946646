//! Command-recording canvas used by the test suite.

use anyhow::Result;

use crate::render::canvas::{Align, Canvas, FillPath, Point, Rect};
use crate::style::{Color, FontRole};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    SetFill(Color),
    SetStroke(Color, f32),
    Rect(Rect),
    Path(FillPath),
    Circle { center: Point, radius: f32 },
    Line { from: Point, to: Point },
    Text {
        text: String,
        role: FontRole,
        size: f32,
        at: Point,
        align: Align,
    },
    Qr { payload: String, rect: Rect },
    Push,
    Pop,
    Clip(Rect),
    PageBreak,
}

/// Canvas backend that records every call instead of drawing.
///
/// Text width uses a flat per-character metric so position assertions stay
/// deterministic without font files.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    pub commands: Vec<DrawCmd>,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands split into pages at each [`DrawCmd::PageBreak`].
    pub fn pages(&self) -> Vec<&[DrawCmd]> {
        self.commands
            .split(|cmd| matches!(cmd, DrawCmd::PageBreak))
            .collect()
    }

    /// The flat metric used by [`Canvas::text_width`] on this backend.
    pub fn flat_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}

impl Canvas for TraceCanvas {
    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCmd::SetFill(color));
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.commands.push(DrawCmd::SetStroke(color, width));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::Rect(rect));
    }

    fn fill_path(&mut self, path: &FillPath) {
        self.commands.push(DrawCmd::Path(path.clone()));
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.commands.push(DrawCmd::Circle { center, radius });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCmd::Line { from, to });
    }

    fn text(&mut self, text: &str, role: FontRole, size: f32, at: Point, align: Align) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            role,
            size,
            at,
            align,
        });
    }

    fn text_width(&self, text: &str, _role: FontRole, size: f32) -> f32 {
        Self::flat_width(text, size)
    }

    fn qr_symbol(&mut self, payload: &str, rect: Rect) -> Result<()> {
        self.commands.push(DrawCmd::Qr {
            payload: payload.to_string(),
            rect,
        });
        Ok(())
    }

    fn push_state(&mut self) {
        self.commands.push(DrawCmd::Push);
    }

    fn pop_state(&mut self) {
        self.commands.push(DrawCmd::Pop);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::Clip(rect));
    }

    fn end_page(&mut self) {
        self.commands.push(DrawCmd::PageBreak);
    }
}
