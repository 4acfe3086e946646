//! Layered theme backgrounds for the four card faces.
//!
//! Every recipe covers the full bleed rectangle and is deterministic given
//! the trim-box origin. Callers clip to the bleed rectangle before painting
//! (see [`crate::render::canvas::with_clip`]).

use anyhow::Result;

use crate::geometry::{PrintLayout, mm};
use crate::render::canvas::{Align, Canvas, FillPath, PathSeg, Point, Rect};
use crate::style::{Color, FontRole, Palette, TypeScale};

/// Theme recipe selected per card slot, carrying the text it needs.
#[derive(Debug, Clone)]
pub enum CardTheme<'a> {
    /// White rule-card front: gray waves, pink accent circle, red top bar.
    FrontRules,
    /// Red decorative back with centered branding (4-card edition).
    DecorativeBack { title: &'a str, subtitle: &'a str },
    /// Red cover face of the title card.
    TitleCover { title: &'a str, subtitle: &'a str },
    /// White info face: description paragraph, QR code, caption.
    TitleBack {
        heading: &'a str,
        paragraph: &'a [String],
        url: &'a str,
        caption: &'a str,
    },
}

/// Paint `theme` for the card whose trim box starts at `trim`.
pub fn paint<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    theme: &CardTheme<'_>,
) -> Result<()> {
    match theme {
        CardTheme::FrontRules => front_rules(canvas, layout, trim),
        CardTheme::DecorativeBack { title, subtitle } => {
            red_cover(canvas, layout, trim);
            canvas.set_fill(Palette::BG);
            centered(canvas, layout, trim, title, FontRole::Heading, TypeScale::BACK_TITLE, mm(5.0));
            centered(
                canvas,
                layout,
                trim,
                subtitle,
                FontRole::Body,
                TypeScale::BACK_SUBTITLE,
                -mm(5.0),
            );
        }
        CardTheme::TitleCover { title, subtitle } => {
            red_cover(canvas, layout, trim);
            canvas.set_fill(Palette::BG);
            centered(canvas, layout, trim, title, FontRole::Heading, TypeScale::COVER_TITLE, mm(8.0));
            centered(
                canvas,
                layout,
                trim,
                subtitle,
                FontRole::Body,
                TypeScale::COVER_SUBTITLE,
                -mm(4.0),
            );
        }
        CardTheme::TitleBack {
            heading,
            paragraph,
            url,
            caption,
        } => title_back(canvas, layout, trim, heading, paragraph, url, caption)?,
    }
    Ok(())
}

/// Bleed-inclusive drawing rectangle for a card at `trim`.
fn bleed_box(layout: &PrintLayout, trim: Point) -> Rect {
    Rect::new(
        trim.x - layout.bleed,
        trim.y - layout.bleed,
        layout.card_width_bleed,
        layout.card_height_bleed,
    )
}

/// One wave layer: a cubic sweep from the left bleed edge to the right,
/// closed along the bottom of the bleed box. Coordinates in mm relative to
/// the trim origin.
struct Wave {
    start_h: f32,
    ctrl1: (f32, f32),
    ctrl2: (f32, f32),
    end_h: f32,
}

fn wave<C: Canvas>(canvas: &mut C, layout: &PrintLayout, trim: Point, spec: &Wave, color: Color) {
    let bbox = bleed_box(layout, trim);
    let right = bbox.x + bbox.width;
    let path = FillPath {
        start: Point::new(bbox.x, trim.y + mm(spec.start_h)),
        segs: vec![
            PathSeg::Curve(
                Point::new(trim.x + mm(spec.ctrl1.0), trim.y + mm(spec.ctrl1.1)),
                Point::new(trim.x + mm(spec.ctrl2.0), trim.y + mm(spec.ctrl2.1)),
                Point::new(right, trim.y + mm(spec.end_h)),
            ),
            PathSeg::Line(Point::new(right, bbox.y)),
            PathSeg::Line(Point::new(bbox.x, bbox.y)),
        ],
    };
    canvas.set_fill(color);
    canvas.fill_path(&path);
}

/// Thin accent bar across the top edge, bleeding past the trim line.
fn accent_bar<C: Canvas>(canvas: &mut C, layout: &PrintLayout, trim: Point) {
    let bbox = bleed_box(layout, trim);
    canvas.set_fill(Palette::ACCENT);
    canvas.fill_rect(Rect::new(
        bbox.x,
        trim.y + layout.card_height - mm(3.5),
        bbox.width,
        mm(3.5) + layout.bleed,
    ));
}

fn front_rules<C: Canvas>(canvas: &mut C, layout: &PrintLayout, trim: Point) {
    canvas.set_fill(Palette::BG);
    canvas.fill_rect(bleed_box(layout, trim));

    wave(
        canvas,
        layout,
        trim,
        &Wave { start_h: 25.0, ctrl1: (20.0, 35.0), ctrl2: (35.0, 50.0), end_h: 60.0 },
        Palette::WAVE_LIGHT,
    );
    wave(
        canvas,
        layout,
        trim,
        &Wave { start_h: 15.0, ctrl1: (25.0, 22.0), ctrl2: (40.0, 35.0), end_h: 45.0 },
        Palette::WAVE_MEDIUM,
    );

    canvas.set_fill(Palette::CIRCLE_ACCENT);
    canvas.fill_circle(Point::new(trim.x + mm(50.0), trim.y + mm(20.0)), mm(12.0));

    accent_bar(canvas, layout, trim);
}

/// Shared red base of the decorative back and the title cover.
fn red_cover<C: Canvas>(canvas: &mut C, layout: &PrintLayout, trim: Point) {
    canvas.set_fill(Palette::BACK_BASE);
    canvas.fill_rect(bleed_box(layout, trim));

    wave(
        canvas,
        layout,
        trim,
        &Wave { start_h: 30.0, ctrl1: (20.0, 40.0), ctrl2: (40.0, 55.0), end_h: 65.0 },
        Palette::BACK_WAVE1,
    );
    wave(
        canvas,
        layout,
        trim,
        &Wave { start_h: 18.0, ctrl1: (25.0, 25.0), ctrl2: (45.0, 38.0), end_h: 48.0 },
        Palette::BACK_WAVE2,
    );

    canvas.set_fill(Palette::BACK_CIRCLE);
    canvas.fill_circle(Point::new(trim.x + mm(50.0), trim.y + mm(22.0)), mm(10.0));
}

/// Text centered horizontally, `offset` points above the vertical middle.
fn centered<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    text: &str,
    role: FontRole,
    size: f32,
    offset: f32,
) {
    canvas.text(
        text,
        role,
        size,
        Point::new(
            trim.x + layout.card_width / 2.0,
            trim.y + layout.card_height / 2.0 + offset,
        ),
        Align::Center,
    );
}

fn title_back<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    trim: Point,
    heading: &str,
    paragraph: &[String],
    url: &str,
    caption: &str,
) -> Result<()> {
    canvas.set_fill(Palette::BG);
    canvas.fill_rect(bleed_box(layout, trim));
    accent_bar(canvas, layout, trim);

    let center_x = trim.x + layout.card_width / 2.0;

    canvas.set_fill(Palette::TEXT);
    canvas.text(
        heading,
        FontRole::Heading,
        TypeScale::INFO_TITLE,
        Point::new(center_x, trim.y + layout.card_height - mm(12.0)),
        Align::Center,
    );

    // Description paragraph; blank input lines become a smaller gap.
    let mut text_y = trim.y + layout.card_height - mm(20.0);
    for line in paragraph {
        if line.is_empty() {
            text_y -= mm(2.0);
        } else {
            canvas.text(
                line,
                FontRole::Body,
                TypeScale::INFO_BODY,
                Point::new(center_x, text_y),
                Align::Center,
            );
            text_y -= mm(3.2);
        }
    }

    let qr_size = mm(18.0);
    canvas.qr_symbol(
        url,
        Rect::new(center_x - qr_size / 2.0, trim.y + mm(12.0), qr_size, qr_size),
    )?;

    canvas.set_fill(Palette::HEADING);
    canvas.text(
        caption,
        FontRole::Body,
        TypeScale::INFO_CAPTION,
        Point::new(center_x, trim.y + mm(8.0)),
        Align::Center,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::trace::{DrawCmd, TraceCanvas};

    fn cmds_for(theme: &CardTheme<'_>) -> Vec<DrawCmd> {
        let layout = PrintLayout::poker_a4();
        let mut canvas = TraceCanvas::new();
        paint(&mut canvas, &layout, Point::new(50.0, 60.0), theme).unwrap();
        canvas.commands
    }

    #[test]
    fn front_theme_layers_in_fixed_order() {
        let cmds = cmds_for(&CardTheme::FrontRules);
        let kinds: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect(_) => Some("rect"),
                DrawCmd::Path(_) => Some("wave"),
                DrawCmd::Circle { .. } => Some("circle"),
                _ => None,
            })
            .collect();
        // Base, two waves, accent circle, top bar.
        assert_eq!(kinds, vec!["rect", "wave", "wave", "circle", "rect"]);
    }

    #[test]
    fn theme_is_deterministic_for_a_fixed_origin() {
        let a = cmds_for(&CardTheme::FrontRules);
        let b = cmds_for(&CardTheme::FrontRules);
        assert_eq!(a, b);
    }

    #[test]
    fn info_face_renders_blank_lines_as_gaps() {
        let paragraph = vec!["one".to_string(), String::new(), "two".to_string()];
        let theme = CardTheme::TitleBack {
            heading: "About",
            paragraph: &paragraph,
            url: "https://example.invalid/repo",
            caption: "example.invalid/repo",
        };
        let cmds = cmds_for(&theme);
        let body_lines: Vec<(&str, f32)> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, size, at, .. } if *size == TypeScale::INFO_BODY => {
                    Some((text.as_str(), at.y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(body_lines.len(), 2);
        let (first, second) = (body_lines[0], body_lines[1]);
        assert_eq!(first.0, "one");
        assert_eq!(second.0, "two");
        // Gap of one regular line plus the blank-line spacing.
        assert!(((first.1 - second.1) - (mm(3.2) + mm(2.0))).abs() < 1e-4);
        assert!(cmds.iter().any(|c| matches!(c, DrawCmd::Qr { .. })));
    }
}
