//! Card face pipelines: title block, the two text-flow algorithms, and the
//! background/clip/crop-mark composition around them.

use anyhow::Result;

use crate::content::{CardSpec, ContentBlock, FooterNote, Section, ValueRow};
use crate::geometry::{PrintLayout, mm};
use crate::render::background::{self, CardTheme};
use crate::render::canvas::{Align, Canvas, Point, Rect, with_clip};
use crate::render::marks;
use crate::style::{Color, FontRole, Palette, TypeScale};

/// Suit-glyph runs recolored inside value-table labels.
const SUIT_RUNS: [(&str, Color); 2] = [
    ("♠♣", Palette::SUIT_BLACK),
    ("♥♦", Palette::SUIT_RED),
];

/// Vertical offset of the content cursor below the trim-box top.
const CONTENT_TOP_MM: f32 = 21.0;

fn bleed_box(layout: &PrintLayout, trim: Point) -> Rect {
    Rect::new(
        trim.x - layout.bleed,
        trim.y - layout.bleed,
        layout.card_width_bleed,
        layout.card_height_bleed,
    )
}

/// Left column origin shared by both text-flow algorithms.
fn label_column(layout: &PrintLayout, trim: Point) -> f32 {
    trim.x + layout.content_margin + mm(1.0)
}

/// Render a complete rule-card front: themed background (clipped to the
/// bleed box), title block, content flow, crop marks.
pub fn draw_card_front<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    spec: &CardSpec,
    brand: &str,
) -> Result<()> {
    with_clip(canvas, bleed_box(layout, trim), |c| {
        background::paint(c, layout, trim, &CardTheme::FrontRules)
    })?;

    draw_title(canvas, layout, trim, brand, &spec.title, &spec.slot);

    match &spec.content {
        ContentBlock::ValuesTable { rows, footers } => {
            draw_values_table(canvas, layout, trim, rows, footers)
        }
        ContentBlock::Sections(sections) => draw_sections(canvas, layout, trim, sections),
    }

    marks::draw_crop_marks(canvas, layout, trim);
    Ok(())
}

/// Render a background-only face (decorative back, cover, info card).
pub fn draw_themed_card<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    theme: &CardTheme<'_>,
) -> Result<()> {
    with_clip(canvas, bleed_box(layout, trim), |c| {
        background::paint(c, layout, trim, theme)
    })?;
    marks::draw_crop_marks(canvas, layout, trim);
    Ok(())
}

/// Brand line, card subtitle and slot label shared by every rule card.
fn draw_title<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    brand: &str,
    title: &str,
    slot: &str,
) {
    let center_x = trim.x + layout.card_width / 2.0;

    canvas.set_fill(Palette::TEXT);
    canvas.text(
        brand,
        FontRole::Heading,
        TypeScale::TITLE,
        Point::new(center_x, trim.y + layout.card_height - mm(11.0)),
        Align::Center,
    );

    canvas.set_fill(Palette::HEADING);
    canvas.text(
        title,
        FontRole::Body,
        TypeScale::SUBTITLE,
        Point::new(center_x, trim.y + layout.card_height - mm(16.5)),
        Align::Center,
    );

    canvas.set_fill(Palette::ACCENT);
    canvas.text(
        slot,
        FontRole::Body,
        TypeScale::NUMBER,
        Point::new(
            trim.x + layout.card_width - layout.content_margin - mm(0.5),
            trim.y + layout.content_margin + mm(1.0),
        ),
        Align::Right,
    );
}

/// Tabular layout: aligned label/=/value columns with optional action lines.
fn draw_values_table<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    rows: &[ValueRow],
    footers: &[FooterNote],
) {
    let col_label = label_column(layout, trim);
    // Fixed columns: rows align no matter how long the labels run.
    let col_equals = trim.x + mm(24.0);
    let col_value = trim.x + mm(27.0);

    let mut cursor = trim.y + layout.card_height - mm(CONTENT_TOP_MM);

    for row in rows {
        draw_label(canvas, col_label, cursor, &row.label);

        canvas.set_fill(Palette::TEXT);
        canvas.text(
            "=",
            FontRole::Body,
            TypeScale::BODY,
            Point::new(col_equals, cursor),
            Align::Left,
        );
        canvas.text(
            &row.value,
            FontRole::Body,
            TypeScale::BODY,
            Point::new(col_value, cursor),
            Align::Left,
        );

        if let Some(action) = &row.action {
            cursor -= mm(2.8);
            canvas.set_fill(Palette::HEADING);
            canvas.text(
                &format!("→ {action}"),
                FontRole::Body,
                TypeScale::BODY,
                Point::new(col_value, cursor),
                Align::Left,
            );
            canvas.set_fill(Palette::TEXT);
        }

        cursor -= mm(3.2);
    }

    cursor -= mm(1.5);
    for footer in footers {
        canvas.set_fill(Palette::HEADING);
        canvas.text(
            &footer.heading,
            FontRole::Heading,
            TypeScale::HEADING,
            Point::new(col_label, cursor),
            Align::Left,
        );

        let heading_width = canvas.text_width(
            &format!("{}  ", footer.heading),
            FontRole::Heading,
            TypeScale::HEADING,
        );
        canvas.set_fill(Palette::TEXT);
        canvas.text(
            &footer.text,
            FontRole::Body,
            TypeScale::BODY,
            Point::new(col_label + heading_width, cursor),
            Align::Left,
        );
        cursor -= mm(3.5);
    }
}

/// Draw a row label, recoloring an embedded suit-glyph run if present.
fn draw_label<C: Canvas>(canvas: &mut C, col_label: f32, cursor: f32, label: &str) {
    for (run, color) in SUIT_RUNS {
        if let Some(pos) = label.find(run) {
            let prefix = &label[..pos];
            canvas.set_fill(Palette::TEXT);
            canvas.text(
                prefix,
                FontRole::Body,
                TypeScale::BODY,
                Point::new(col_label, cursor),
                Align::Left,
            );
            let run_x = col_label + canvas.text_width(prefix, FontRole::Body, TypeScale::BODY);
            canvas.set_fill(color);
            canvas.text(
                run,
                FontRole::Body,
                TypeScale::BODY,
                Point::new(run_x, cursor),
                Align::Left,
            );
            return;
        }
    }
    canvas.set_fill(Palette::TEXT);
    canvas.text(
        label,
        FontRole::Body,
        TypeScale::BODY,
        Point::new(col_label, cursor),
        Align::Left,
    );
}

/// Sectioned layout: heading plus indented body lines with arrow emphasis.
fn draw_sections<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    sections: &[Section],
) {
    let col = label_column(layout, trim);
    let mut cursor = trim.y + layout.card_height - mm(CONTENT_TOP_MM);

    for section in sections {
        canvas.set_fill(Palette::HEADING);
        canvas.text(
            &section.heading,
            FontRole::Heading,
            TypeScale::HEADING,
            Point::new(col, cursor),
            Align::Left,
        );
        cursor -= mm(3.3);

        canvas.set_fill(Palette::TEXT);
        for raw in &section.lines {
            // Leading 3-space marker requests a continuation indent.
            let (indent, line) = match raw.strip_prefix("   ") {
                Some(rest) => (mm(2.5), rest),
                None => (0.0, raw.as_str()),
            };

            if let Some(rest) = line.strip_prefix('→') {
                // Arrow in accent color, remainder after the arrow and one
                // separator character.
                canvas.set_fill(Palette::ACCENT);
                canvas.text(
                    "→",
                    FontRole::Body,
                    TypeScale::BODY,
                    Point::new(col + indent, cursor),
                    Align::Left,
                );
                canvas.set_fill(Palette::TEXT);
                let body = rest.strip_prefix(' ').unwrap_or(rest);
                canvas.text(
                    body,
                    FontRole::Body,
                    TypeScale::BODY,
                    Point::new(col + indent + mm(3.0), cursor),
                    Align::Left,
                );
            } else {
                canvas.text(
                    line,
                    FontRole::Body,
                    TypeScale::BODY,
                    Point::new(col + indent, cursor),
                    Align::Left,
                );
            }

            cursor -= mm(2.9);
        }

        cursor -= mm(1.2);
    }
}
