//! Crop marks locating the trim line at each card corner.

use crate::geometry::PrintLayout;
use crate::render::canvas::{Canvas, Point};
use crate::style::Palette;

/// Draw the eight crop-mark segments for one card.
///
/// `trim` is the bottom-left corner of the trim box. Each mark starts
/// `crop_offset` outside the trim line and extends `crop_length` further,
/// so the gap between trim line and mark survives cutting.
pub fn draw_crop_marks<C: Canvas>(canvas: &mut C, layout: &PrintLayout, trim: Point) {
    let left = trim.x;
    let right = trim.x + layout.card_width;
    let bottom = trim.y;
    let top = trim.y + layout.card_height;
    let offset = layout.crop_offset;
    let reach = layout.crop_offset + layout.crop_length;

    canvas.push_state();
    canvas.set_stroke(Palette::CROP_MARK, layout.crop_line_width);

    // Top-left corner.
    canvas.line(Point::new(left - reach, top), Point::new(left - offset, top));
    canvas.line(Point::new(left, top + offset), Point::new(left, top + reach));

    // Top-right corner.
    canvas.line(Point::new(right + offset, top), Point::new(right + reach, top));
    canvas.line(Point::new(right, top + offset), Point::new(right, top + reach));

    // Bottom-left corner.
    canvas.line(
        Point::new(left - reach, bottom),
        Point::new(left - offset, bottom),
    );
    canvas.line(
        Point::new(left, bottom - reach),
        Point::new(left, bottom - offset),
    );

    // Bottom-right corner.
    canvas.line(
        Point::new(right + offset, bottom),
        Point::new(right + reach, bottom),
    );
    canvas.line(
        Point::new(right, bottom - reach),
        Point::new(right, bottom - offset),
    );

    canvas.pop_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::trace::{DrawCmd, TraceCanvas};

    #[test]
    fn marks_keep_exact_offset_gap_to_trim_line() {
        let layout = PrintLayout::poker_a4();
        let trim = Point::new(100.0, 200.0);
        let mut canvas = TraceCanvas::new();
        draw_crop_marks(&mut canvas, &layout, trim);

        let lines: Vec<(Point, Point)> = canvas
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 8);

        let left = trim.x;
        let right = trim.x + layout.card_width;
        let bottom = trim.y;
        let top = trim.y + layout.card_height;

        for (from, to) in lines {
            // Perpendicular distance from the nearest trim line to the
            // nearest mark endpoint must be exactly the configured offset.
            let gap = if from.y == to.y {
                // Horizontal mark beside the left or right trim edge.
                let near = if to.x <= left { left - to.x } else { from.x - right };
                near
            } else {
                let near = if to.y <= bottom {
                    bottom - to.y
                } else {
                    from.y - top
                };
                near
            };
            assert!(
                (gap - layout.crop_offset).abs() < 1e-4,
                "gap {gap} != offset {}",
                layout.crop_offset
            );
            // Segment length equals the configured mark length.
            let len = ((to.x - from.x).abs()).max((to.y - from.y).abs());
            assert!((len - layout.crop_length).abs() < 1e-4);
        }
    }
}
