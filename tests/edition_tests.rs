//! End-to-end composition checks on the command-recording canvas.

use kabul_cards::{
    Align, ContentSet, DrawCmd, Language, PrintLayout, TraceCanvas, compose_compact_deck,
    compose_rule_deck, compose_title_card, grid_positions, pair_positions,
};
use pretty_assertions::assert_eq;

fn texts(page: &[DrawCmd]) -> Vec<&str> {
    page.iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn clips(page: &[DrawCmd]) -> Vec<&DrawCmd> {
    page.iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Clip(_)))
        .collect()
}

#[test]
fn rule_deck_renders_four_fronts_and_mirrored_backs() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::En);
    let mut canvas = TraceCanvas::new();
    compose_rule_deck(&mut canvas, &layout, &content).unwrap();

    let pages = canvas.pages();
    assert_eq!(pages.len(), 2);

    // Page 1 carries all four card titles and the front footer.
    let front_texts = texts(pages[0]);
    for spec in &content.cards {
        assert!(front_texts.contains(&spec.title.as_str()), "{}", spec.title);
    }
    assert!(
        front_texts
            .iter()
            .any(|t| t.contains("Rule Cards") && t.contains("1/2"))
    );
    assert!(!front_texts.iter().any(|t| t.starts_with('↻')));

    // Page 2 is decorative: four clipped card areas, no rule titles,
    // back footer with the duplex hint.
    assert_eq!(clips(pages[1]).len(), 4);
    let back_texts = texts(pages[1]);
    for spec in &content.cards {
        assert!(!back_texts.contains(&spec.title.as_str()));
    }
    assert!(back_texts.iter().any(|t| t.contains("2/2")));
    assert!(back_texts.contains(&content.captions.duplex_hint.as_str()));
}

#[test]
fn rule_deck_backs_land_on_mirrored_positions() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::De);
    let mut canvas = TraceCanvas::new();
    compose_rule_deck(&mut canvas, &layout, &content).unwrap();

    let (_, back) = grid_positions(&layout);
    let pages = canvas.pages();
    let back_clips: Vec<_> = pages[1]
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Clip(rect) => Some((rect.x, rect.y)),
            _ => None,
        })
        .collect();

    // Clip rects are bleed boxes, offset by -bleed from the trim origin.
    let expected: Vec<_> = back
        .iter()
        .map(|p| (p.x - layout.bleed, p.y - layout.bleed))
        .collect();
    assert_eq!(back_clips, expected);
}

#[test]
fn compact_deck_splits_cards_across_the_two_pages() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::En);
    let mut canvas = TraceCanvas::new();
    compose_compact_deck(&mut canvas, &layout, &content).unwrap();

    let pages = canvas.pages();
    assert_eq!(pages.len(), 2);

    let front_texts = texts(pages[0]);
    let back_texts = texts(pages[1]);

    // Cards 1 and 3 on the front page, 2 and 4 on the back page.
    assert!(front_texts.contains(&content.cards[0].title.as_str()));
    assert!(front_texts.contains(&content.cards[2].title.as_str()));
    assert!(back_texts.contains(&content.cards[1].title.as_str()));
    assert!(back_texts.contains(&content.cards[3].title.as_str()));
    assert!(!front_texts.contains(&content.cards[1].title.as_str()));
    assert!(!back_texts.contains(&content.cards[0].title.as_str()));

    // Compact slot labels replace the 4-card ones.
    assert!(front_texts.contains(&"1a"));
    assert!(front_texts.contains(&"2a"));
    assert!(back_texts.contains(&"1b"));
    assert!(back_texts.contains(&"2b"));
}

#[test]
fn compact_backs_swap_the_pair_positions() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::En);
    let mut canvas = TraceCanvas::new();
    compose_compact_deck(&mut canvas, &layout, &content).unwrap();

    let (front, _) = pair_positions(&layout);
    let pages = canvas.pages();

    let clip_origins = |page: &[DrawCmd]| -> Vec<(f32, f32)> {
        page.iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Clip(rect) => Some((rect.x, rect.y)),
                _ => None,
            })
            .collect()
    };

    let front_clips = clip_origins(pages[0]);
    let back_clips = clip_origins(pages[1]);
    assert_eq!(front_clips.len(), 2);
    // Back page draws the right slot first, then the left one.
    assert_eq!(back_clips, vec![front_clips[1], front_clips[0]]);
    assert_eq!(
        front_clips[0],
        (front[0].x - layout.bleed, front[0].y - layout.bleed)
    );
}

#[test]
fn title_card_has_cover_then_qr_back() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::En);
    let mut canvas = TraceCanvas::new();
    compose_title_card(&mut canvas, &layout, &content).unwrap();

    let pages = canvas.pages();
    assert_eq!(pages.len(), 2);

    let front_texts = texts(pages[0]);
    assert!(front_texts.contains(&content.cover_title.as_str()));
    assert!(front_texts.contains(&content.cover_subtitle.as_str()));
    assert!(!pages[0].iter().any(|c| matches!(c, DrawCmd::Qr { .. })));

    let qr = pages[1].iter().find_map(|cmd| match cmd {
        DrawCmd::Qr { payload, .. } => Some(payload.as_str()),
        _ => None,
    });
    assert_eq!(qr, Some(content.repo_url.as_str()));

    let back_texts = texts(pages[1]);
    assert!(back_texts.contains(&content.about_title.as_str()));
    assert!(back_texts.contains(&content.repo_label.as_str()));
}

#[test]
fn every_page_balances_push_and_pop() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::De);

    for compose in [
        compose_rule_deck::<TraceCanvas>,
        compose_compact_deck::<TraceCanvas>,
        compose_title_card::<TraceCanvas>,
    ] {
        let mut canvas = TraceCanvas::new();
        compose(&mut canvas, &layout, &content).unwrap();
        for page in canvas.pages() {
            let pushes = page.iter().filter(|c| matches!(c, DrawCmd::Push)).count();
            let pops = page.iter().filter(|c| matches!(c, DrawCmd::Pop)).count();
            assert_eq!(pushes, pops);
        }
    }
}

#[test]
fn composition_is_deterministic() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::En);

    let mut a = TraceCanvas::new();
    let mut b = TraceCanvas::new();
    compose_rule_deck(&mut a, &layout, &content).unwrap();
    compose_rule_deck(&mut b, &layout, &content).unwrap();
    assert_eq!(a.commands, b.commands);
}

#[test]
fn duplex_hint_only_appears_right_aligned_on_back_pages() {
    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(Language::De);
    let mut canvas = TraceCanvas::new();
    compose_rule_deck(&mut canvas, &layout, &content).unwrap();

    let hints: Vec<_> = canvas
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, align, .. } if text == &content.captions.duplex_hint => {
                Some(*align)
            }
            _ => None,
        })
        .collect();
    assert_eq!(hints, vec![Align::Right]);
}
