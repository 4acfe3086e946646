//! Orchestration of the three output documents.
//!
//! Each `compose_*` function draws a whole edition onto any [`Canvas`];
//! the `generate_*` wrappers bind it to a [`PdfCanvas`] and persist the
//! document in one pass, so a failed edition never leaves a partial file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::content::ContentSet;
use crate::fonts::FontSet;
use crate::geometry::PrintLayout;
use crate::page::{draw_page_footer, grid_positions, pair_positions, single_position};
use crate::render::background::CardTheme;
use crate::render::canvas::Canvas;
use crate::render::card::{draw_card_front, draw_themed_card};
use crate::render::pdf::PdfCanvas;

/// 4-card edition: front grid, then decorative backs at mirrored positions.
pub fn compose_rule_deck<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    content: &ContentSet,
) -> Result<()> {
    let (front, back) = grid_positions(layout);
    let captions = &content.captions;

    for (pos, spec) in front.iter().zip(&content.cards) {
        draw_card_front(canvas, layout, *pos, spec, &content.brand)?;
    }
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.rule_edition,
        1,
        2,
        &captions.rule_front,
        None,
    );
    canvas.end_page();

    let theme = CardTheme::DecorativeBack {
        title: &content.back_title,
        subtitle: &content.back_subtitle,
    };
    for pos in &back {
        draw_themed_card(canvas, layout, *pos, &theme)?;
    }
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.rule_edition,
        2,
        2,
        &captions.rule_back,
        Some(&captions.duplex_hint),
    );
    Ok(())
}

/// Compact edition: rules on both faces. The back page reuses the front-card
/// pipeline at the mirrored pair positions, so every physical card carries
/// two independent rule faces.
pub fn compose_compact_deck<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    content: &ContentSet,
) -> Result<()> {
    let (front_pos, back_pos) = pair_positions(layout);
    let (front_cards, back_cards) = content.compact_pages();
    let captions = &content.captions;

    for (pos, spec) in front_pos.iter().zip(&front_cards) {
        draw_card_front(canvas, layout, *pos, spec, &content.brand)?;
    }
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.compact_edition,
        1,
        2,
        &captions.compact_front,
        None,
    );
    canvas.end_page();

    for (pos, spec) in back_pos.iter().zip(&back_cards) {
        draw_card_front(canvas, layout, *pos, spec, &content.brand)?;
    }
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.compact_edition,
        2,
        2,
        &captions.compact_back,
        Some(&captions.duplex_hint),
    );
    Ok(())
}

/// Single title card: red cover face, then the info face with the QR code.
pub fn compose_title_card<C: Canvas>(
    canvas: &mut C,
    layout: &PrintLayout,
    content: &ContentSet,
) -> Result<()> {
    let pos = single_position(layout);
    let captions = &content.captions;

    draw_themed_card(
        canvas,
        layout,
        pos,
        &CardTheme::TitleCover {
            title: &content.cover_title,
            subtitle: &content.cover_subtitle,
        },
    )?;
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.title_edition,
        1,
        2,
        &captions.title_front,
        None,
    );
    canvas.end_page();

    draw_themed_card(
        canvas,
        layout,
        pos,
        &CardTheme::TitleBack {
            heading: &content.about_title,
            paragraph: &content.description,
            url: &content.repo_url,
            caption: &content.repo_label,
        },
    )?;
    draw_page_footer(
        canvas,
        layout,
        &content.brand,
        &captions.title_edition,
        2,
        2,
        &captions.title_back,
        Some(&captions.duplex_hint),
    );
    Ok(())
}

pub fn generate_rule_deck(
    layout: &PrintLayout,
    content: &ContentSet,
    fonts: FontSet,
    path: &Path,
) -> Result<()> {
    let mut canvas = PdfCanvas::new("KABUL Rule Cards", layout, fonts)
        .context("rule deck: failed to open document")?;
    compose_rule_deck(&mut canvas, layout, content).context("rule deck: failed to render")?;
    canvas.finish(path).context("rule deck: failed to save")
}

pub fn generate_compact_deck(
    layout: &PrintLayout,
    content: &ContentSet,
    fonts: FontSet,
    path: &Path,
) -> Result<()> {
    let mut canvas = PdfCanvas::new("KABUL Compact Cards", layout, fonts)
        .context("compact deck: failed to open document")?;
    compose_compact_deck(&mut canvas, layout, content)
        .context("compact deck: failed to render")?;
    canvas.finish(path).context("compact deck: failed to save")
}

pub fn generate_title_card(
    layout: &PrintLayout,
    content: &ContentSet,
    fonts: FontSet,
    path: &Path,
) -> Result<()> {
    let mut canvas = PdfCanvas::new("KABUL Title Card", layout, fonts)
        .context("title card: failed to open document")?;
    compose_title_card(&mut canvas, layout, content).context("title card: failed to render")?;
    canvas.finish(path).context("title card: failed to save")
}
