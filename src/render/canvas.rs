//! Drawing capability surface consumed by every renderer.
//!
//! Renderers receive style explicitly and emit ordered draw calls against
//! this trait, so they can be exercised against a command-recording backend
//! (see [`crate::render::trace`]) as well as the PDF backend.

use anyhow::Result;

use crate::style::{Color, FontRole};

/// A position in page coordinates, in points, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, bottom-left corner plus extent, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Segment of a filled path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    Line(Point),
    /// Cubic bezier: two control points, then the end point.
    Curve(Point, Point, Point),
}

/// A closed filled path: start point plus segments, implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPath {
    pub start: Point,
    pub segs: Vec<PathSeg>,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Abstract drawing surface for one multi-page document.
pub trait Canvas {
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color, width: f32);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_path(&mut self, path: &FillPath);
    fn fill_circle(&mut self, center: Point, radius: f32);
    fn line(&mut self, from: Point, to: Point);

    /// Draw `text` with the current fill color at `at` (baseline anchor).
    fn text(&mut self, text: &str, role: FontRole, size: f32, at: Point, align: Align);
    /// Rendered width of `text` in points for the given role and size.
    fn text_width(&self, text: &str, role: FontRole, size: f32) -> f32;

    /// Draw a scannable code for `payload` filling `rect`.
    fn qr_symbol(&mut self, payload: &str, rect: Rect) -> Result<()>;

    fn push_state(&mut self);
    fn pop_state(&mut self);
    fn clip_rect(&mut self, rect: Rect);

    /// Finalize the current page and begin the next one.
    fn end_page(&mut self);
}

/// Run `draw` inside a pushed graphics state clipped to `rect`.
///
/// The state is popped whether or not `draw` succeeds, so theme fills can
/// never leak color or clip into later cards.
pub fn with_clip<C, F>(canvas: &mut C, rect: Rect, draw: F) -> Result<()>
where
    C: Canvas + ?Sized,
    F: FnOnce(&mut C) -> Result<()>,
{
    canvas.push_state();
    canvas.clip_rect(rect);
    let result = draw(canvas);
    canvas.pop_state();
    result
}
