//! Core library for generating print-ready KABUL rule-card PDFs.
//!
//! Three editions are produced from one bilingual content table: a 4-card
//! deck with decorative duplex backs, a compact 2-card deck with rules on
//! both faces, and a single title/info card with a QR code. All geometry is
//! bleed-aware with crop marks, and back pages are mirrored for long-edge
//! duplex printing.

mod content;
mod edition;
mod fonts;
mod geometry;
mod page;
mod render;
mod style;

pub use content::{
    Captions, CardSpec, ContentBlock, ContentSet, FooterNote, Language, Section, ValueRow,
};
pub use edition::{
    compose_compact_deck, compose_rule_deck, compose_title_card, generate_compact_deck,
    generate_rule_deck, generate_title_card,
};
pub use fonts::{FontSet, LoadedFont};
pub use geometry::{GeometryError, PrintLayout, mm};
pub use page::{draw_page_footer, grid_positions, pair_positions, single_position};
pub use render::{
    Align, Canvas, CardTheme, DrawCmd, FillPath, PathSeg, PdfCanvas, Point, Rect, TraceCanvas,
    draw_card_front, draw_crop_marks, draw_themed_card, with_clip,
};
pub use style::{Color, FontRole, Palette, TypeScale};
