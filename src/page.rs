//! Multi-card page grids, duplex mirroring and the page footer.
//!
//! Positions are trim-box bottom-left corners. Back-page sets are a
//! permutation of the front set (left/right swapped per row), so a sheet
//! flipped along its long edge lines every back up with its front.

use crate::geometry::{PrintLayout, mm};
use crate::render::canvas::{Align, Canvas, Point};
use crate::style::{FontRole, Palette, TypeScale};

/// Front and mirrored-back positions for the 2x2 grid, row-major from the
/// top-left.
pub fn grid_positions(layout: &PrintLayout) -> (Vec<Point>, Vec<Point>) {
    let total_width = 2.0 * layout.card_width_bleed + layout.card_spacing;
    let total_height = 2.0 * layout.card_height_bleed + layout.card_spacing;

    let start_x = (layout.page_width - total_width) / 2.0 + layout.bleed;
    let start_y = (layout.page_height - total_height) / 2.0 + layout.bleed;

    let left = start_x;
    let right = start_x + layout.card_width_bleed + layout.card_spacing;
    let bottom = start_y;
    let top = start_y + layout.card_height_bleed + layout.card_spacing;

    let front = vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(left, bottom),
        Point::new(right, bottom),
    ];
    let back = vec![
        Point::new(right, top),
        Point::new(left, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ];
    (front, back)
}

/// Front and mirrored-back positions for two cards side by side, vertically
/// centered on the page.
pub fn pair_positions(layout: &PrintLayout) -> (Vec<Point>, Vec<Point>) {
    let total_width = 2.0 * layout.card_width_bleed + layout.card_spacing;
    let start_x = (layout.page_width - total_width) / 2.0 + layout.bleed;
    let start_y = (layout.page_height - layout.card_height_bleed) / 2.0 + layout.bleed;

    let left = Point::new(start_x, start_y);
    let right = Point::new(
        start_x + layout.card_width_bleed + layout.card_spacing,
        start_y,
    );
    (vec![left, right], vec![right, left])
}

/// Single card centered on the page (title-card edition).
pub fn single_position(layout: &PrintLayout) -> Point {
    Point::new(
        (layout.page_width - layout.card_width) / 2.0,
        (layout.page_height - layout.card_height) / 2.0,
    )
}

/// Metadata line at the bottom-left; back pages also get a right-aligned
/// duplex orientation hint.
#[allow(clippy::too_many_arguments)]
pub fn draw_page_footer<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    brand: &str,
    edition: &str,
    page: usize,
    total: usize,
    description: &str,
    duplex_hint: Option<&str>,
) {
    canvas.set_fill(Palette::FOOTER);
    let info = format!(
        "{brand} {edition} | Page {page}/{total} | {description} | {}",
        layout.trim_size_label()
    );
    canvas.text(
        &info,
        FontRole::Body,
        TypeScale::PAGE_FOOTER,
        Point::new(mm(15.0), mm(10.0)),
        Align::Left,
    );

    if let Some(hint) = duplex_hint {
        canvas.text(
            hint,
            FontRole::Body,
            TypeScale::PAGE_FOOTER,
            Point::new(layout.page_width - mm(15.0), mm(10.0)),
            Align::Right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::trace::{DrawCmd, TraceCanvas};
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_mirrors_each_row_horizontally() {
        let layout = PrintLayout::poker_a4();
        let (front, back) = grid_positions(&layout);
        assert_eq!(front.len(), 4);
        // Row-major: back[row][col] == front[row][1-col].
        assert_eq!(back[0], front[1]);
        assert_eq!(back[1], front[0]);
        assert_eq!(back[2], front[3]);
        assert_eq!(back[3], front[2]);
    }

    #[test]
    fn pair_mirror_swaps_the_two_positions() {
        let layout = PrintLayout::poker_a4();
        let (front, back) = pair_positions(&layout);
        assert_eq!(back[0], front[1]);
        assert_eq!(back[1], front[0]);
    }

    #[test]
    fn grid_is_centered_on_the_page() {
        let layout = PrintLayout::poker_a4();
        let (front, _) = grid_positions(&layout);
        // Left margin to the leftmost bleed edge equals right margin from
        // the rightmost bleed edge.
        let left_margin = front[0].x - layout.bleed;
        let right_edge = front[1].x + layout.card_width + layout.bleed;
        assert!((left_margin - (layout.page_width - right_edge)).abs() < 1e-3);
    }

    #[test]
    fn positions_are_deterministic() {
        let layout = PrintLayout::poker_a4();
        assert_eq!(grid_positions(&layout), grid_positions(&layout));
        assert_eq!(pair_positions(&layout), pair_positions(&layout));
    }

    #[test]
    fn footer_orders_edition_page_description_and_size() {
        let layout = PrintLayout::poker_a4();
        let mut canvas = TraceCanvas::new();
        draw_page_footer(
            &mut canvas,
            &layout,
            "KABUL",
            "Compact",
            1,
            2,
            "Front Sides",
            None,
        );
        let text = canvas
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(text, "KABUL Compact | Page 1/2 | Front Sides | 63×88mm");
    }

    #[test]
    fn duplex_hint_is_right_aligned_when_present() {
        let layout = PrintLayout::poker_a4();
        let mut canvas = TraceCanvas::new();
        draw_page_footer(
            &mut canvas,
            &layout,
            "KABUL",
            "Rule Cards",
            2,
            2,
            "Back Sides",
            Some("↻ Duplex: Long Edge Flip"),
        );
        let hint = canvas
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::Text { text, align, .. } if text.starts_with('↻') => Some(*align),
                _ => None,
            })
            .unwrap();
        assert_eq!(hint, Align::Right);
    }
}
