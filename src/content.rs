//! Language-agnostic card content records.
//!
//! The renderer never interprets language; it consumes one fully populated
//! [`ContentSet`] selected by [`Language`]. Lines may carry two presentation
//! hints: a leading 3-space continuation marker (extra indent) and a leading
//! `→` arrow (accent-colored emphasis).

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

impl Language {
    /// Suffix used in output file names, e.g. `kabul_cards_4card_de.pdf`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

/// One row of the card-values table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRow {
    pub label: String,
    pub value: String,
    /// Optional action text, rendered arrow-prefixed on its own line.
    pub action: Option<String>,
    /// Authoring hint that the label embeds suit glyphs; the renderer
    /// detects the glyph run from the label text itself.
    pub suit_glyphs: bool,
}

/// A `heading: text` pair rendered below the values table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterNote {
    pub heading: String,
    pub text: String,
}

/// A heading plus its body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

/// The two card layout types. Exactly one variant per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    ValuesTable {
        rows: Vec<ValueRow>,
        footers: Vec<FooterNote>,
    },
    Sections(Vec<Section>),
}

/// One renderable card face: title, slot label, content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub title: String,
    pub slot: String,
    pub content: ContentBlock,
}

impl CardSpec {
    /// Same content under a different slot label (compact edition reuse).
    pub fn with_slot(&self, slot: &str) -> Self {
        Self {
            slot: slot.to_string(),
            ..self.clone()
        }
    }
}

/// Page footer captions and edition labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    pub rule_edition: String,
    pub rule_front: String,
    pub rule_back: String,
    pub compact_edition: String,
    pub compact_front: String,
    pub compact_back: String,
    pub title_edition: String,
    pub title_front: String,
    pub title_back: String,
    pub duplex_hint: String,
}

/// A complete, language-specific set of renderable content.
#[derive(Debug, Clone)]
pub struct ContentSet {
    /// Brand line drawn on every rule-card face.
    pub brand: String,
    /// The four rule cards with their canonical slot labels.
    pub cards: Vec<CardSpec>,
    pub back_title: String,
    pub back_subtitle: String,
    pub cover_title: String,
    pub cover_subtitle: String,
    pub about_title: String,
    /// Description paragraph; empty lines render as a smaller vertical gap.
    pub description: Vec<String>,
    pub repo_url: String,
    /// Short caption printed beneath the QR code.
    pub repo_label: String,
    pub captions: Captions,
}

impl ContentSet {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::De => german(),
            Language::En => english(),
        }
    }

    /// Compact-edition faces: cards {1,3} on the front page, {2,4} on the
    /// mirrored back page, re-labelled so each physical card reads 1a/1b
    /// and 2a/2b.
    pub fn compact_pages(&self) -> (Vec<CardSpec>, Vec<CardSpec>) {
        let front = vec![self.cards[0].with_slot("1a"), self.cards[2].with_slot("2a")];
        let back = vec![self.cards[1].with_slot("1b"), self.cards[3].with_slot("2b")];
        (front, back)
    }
}

fn row(label: &str, value: &str, action: Option<&str>, suit_glyphs: bool) -> ValueRow {
    ValueRow {
        label: label.to_string(),
        value: value.to_string(),
        action: action.map(str::to_string),
        suit_glyphs,
    }
}

fn note(heading: &str, text: &str) -> FooterNote {
    FooterNote {
        heading: heading.to_string(),
        text: text.to_string(),
    }
}

fn section(heading: &str, lines: &[&str]) -> Section {
    Section {
        heading: heading.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn card(title: &str, slot: &str, content: ContentBlock) -> CardSpec {
    CardSpec {
        title: title.to_string(),
        slot: slot.to_string(),
        content,
    }
}

fn german() -> ContentSet {
    let card_1 = card(
        "Kartenwerte & Aktionen",
        "1/4",
        ContentBlock::ValuesTable {
            rows: vec![
                row("Joker", "-1 Punkt", None, false),
                row("Ass", "1 Punkt", None, false),
                row("2–6", "Kartenwert", None, false),
                row("7, 8", "Kartenwert", Some("Eigene ansehen"), false),
                row("9, 10", "Kartenwert", Some("Fremde ansehen"), false),
                row("Bube, Dame", "10 Punkte", Some("Tauschen"), false),
                row("König ♠♣", "10 Punkte", Some("2× Ansehen & Tauschen?"), false),
                row("König ♥♦", "0 Punkte", None, true),
            ],
            footers: vec![
                note("Ziel", "Niedrigste Gesamtpunktzahl"),
                note("Ende", "Erster Spieler > 100 Punkte"),
            ],
        },
    );

    let card_2 = card(
        "Spielablauf",
        "2/4",
        ContentBlock::Sections(vec![
            section(
                "Setup",
                &[
                    "4 Karten verdeckt im Quadrat",
                    "Untere 2 Karten einmal ansehen",
                    "Erste Karte vom Stapel aufdecken",
                ],
            ),
            section(
                "Spielzug",
                &[
                    "1. Karte ziehen von Stapel o. Ablage",
                    "2. Wählen: Ablegen, Ersetzen",
                    "   oder Kartenaktion ausführen",
                ],
            ),
            section(
                "Abwerfen",
                &[
                    "Gleiche Karte wie auf der Ablage?",
                    "→ Eigene/fremde Karte draufschmeißen!",
                    "Schnellster gewinnt · 1× pro Abwerfen",
                ],
            ),
            section("Kabul", &["Bei ≤4 Punkten: Kabul rufen", "→ Löst letzte Runde aus"]),
        ]),
    );

    let card_3 = card(
        "Detailregeln",
        "3/4",
        ContentBlock::Sections(vec![
            section(
                "Abwerfen-Details",
                &[
                    "Auch fremde Karten abwerfbar",
                    "Eigene Karte als Ersatz geben",
                    "Schnellster gewinnt",
                    "Berührt Ablage = gültig",
                    "Zählt nicht als Spielzug",
                ],
            ),
            section(
                "Karte ersetzen",
                &["Sofort umdrehen & zeigen", "Nicht erst anschauen!"],
            ),
            section(
                "Sonderfälle",
                &[
                    "Stapel leer → Ablage mischen",
                    "Keine Karten mehr → Kabul (Pflicht)",
                ],
            ),
        ]),
    );

    let card_4 = card(
        "Strafen & Regeln",
        "4/4",
        ContentBlock::Sections(vec![
            section(
                "Strafen (+1 Karte)",
                &["Setup: Karten 2× angesehen", "Falsches Abwerfen"],
            ),
            section(
                "Kabul-Strafe",
                &[
                    "Nicht niedrigste Anzahl oder >4 Punkte?",
                    "→ Kartenzahl verdoppelt",
                    "oder",
                    "→ Nächste Runde: 5 Karten",
                ],
            ),
            section(
                "Wichtig",
                &[
                    "Kabul erst ab ≤4 Punkte rufbar",
                    "Am Ende: Bestätigung nötig",
                    "Nach Abwerfen: Eigener Zug möglich",
                    "Kartenaktion = Ablegen + Aktion",
                ],
            ),
            section("Gleichstand", &["Der, der Kabul gerufen hat gewinnt"]),
        ]),
    );

    ContentSet {
        brand: "KABUL".to_string(),
        cards: vec![card_1, card_2, card_3, card_4],
        back_title: "KABUL".to_string(),
        back_subtitle: "Kartenspiel".to_string(),
        cover_title: "KABUL".to_string(),
        cover_subtitle: "Spielregeln".to_string(),
        about_title: "Über das Spiel".to_string(),
        description: vec![
            "KABUL ist ein schnelles Kartenspiel für 2-6 Spieler,".to_string(),
            "inspiriert von Cabo, Skyjo oder Golf. Ziel ist es, die".to_string(),
            "niedrigste Punktzahl zu erreichen – aber Vorsicht:".to_string(),
            "Du kennst nicht alle deine Karten!".to_string(),
            String::new(),
            "Merke dir deine Karten, tausche clever und rufe".to_string(),
            "»Kabul!«, wenn du glaubst zu gewinnen.".to_string(),
            String::new(),
            "Spieldauer: ca. 15-20 Minuten".to_string(),
        ],
        repo_url: "https://github.com/hazelwalker/kabul-instructions".to_string(),
        repo_label: "github.com/hazelwalker/kabul-instructions".to_string(),
        captions: Captions {
            rule_edition: "Regelkarten".to_string(),
            rule_front: "Vorderseiten".to_string(),
            rule_back: "Rückseiten".to_string(),
            compact_edition: "Kompakt".to_string(),
            compact_front: "Vorderseiten: Kartenwerte | Detailregeln".to_string(),
            compact_back: "Rückseiten: Spielablauf | Strafen".to_string(),
            title_edition: "Title Card".to_string(),
            title_front: "Vorderseite".to_string(),
            title_back: "Rückseite".to_string(),
            duplex_hint: "↻ Duplex: Lange Kante spiegeln".to_string(),
        },
    }
}

fn english() -> ContentSet {
    let card_1 = card(
        "Card Values & Actions",
        "1/4",
        ContentBlock::ValuesTable {
            rows: vec![
                row("Joker", "-1 Point", None, false),
                row("Ace", "1 Point", None, false),
                row("2–6", "Face Value", None, false),
                row("7, 8", "Face Value", Some("View own card"), false),
                row("9, 10", "Face Value", Some("View other's card"), false),
                row("Jack, Queen", "10 Points", Some("Swap cards"), false),
                row("King ♠♣", "10 Points", Some("2× View & Swap?"), false),
                row("King ♥♦", "0 Points", None, true),
            ],
            footers: vec![
                note("Goal", "Lowest total score"),
                note("End", "First player > 100 points"),
            ],
        },
    );

    let card_2 = card(
        "Gameplay",
        "2/4",
        ContentBlock::Sections(vec![
            section(
                "Setup",
                &[
                    "4 cards face-down in a square",
                    "Look at bottom 2 cards once",
                    "Flip first card from draw pile",
                ],
            ),
            section(
                "Turn",
                &[
                    "1. Draw card from pile or discard",
                    "2. Choose: Discard, Replace",
                    "   or use card action",
                ],
            ),
            section(
                "Smash",
                &[
                    "Same card as on discard pile?",
                    "→ Smash your/other's card on top!",
                    "Fastest wins · 1× per smash",
                ],
            ),
            section("Kabul", &["At ≤4 points: Call Kabul", "→ Triggers final round"]),
        ]),
    );

    let card_3 = card(
        "Detailed Rules",
        "3/4",
        ContentBlock::Sections(vec![
            section(
                "Smash Details",
                &[
                    "Can smash other players' cards too",
                    "Give own card as replacement",
                    "Fastest player wins",
                    "Touching discard = valid",
                    "Does not count as turn",
                ],
            ),
            section(
                "Replace Card",
                &["Flip immediately & show", "Don't peek first!"],
            ),
            section(
                "Special Cases",
                &[
                    "Draw pile empty → Shuffle discard",
                    "No cards left → Kabul (mandatory)",
                ],
            ),
        ]),
    );

    let card_4 = card(
        "Penalties & Rules",
        "4/4",
        ContentBlock::Sections(vec![
            section(
                "Penalties (+1 Card)",
                &["Setup: Looked at cards twice", "Wrong smash"],
            ),
            section(
                "Kabul Penalty",
                &[
                    "Not lowest or >4 points?",
                    "→ Double your card count",
                    "or",
                    "→ Next round: 5 cards",
                ],
            ),
            section(
                "Important",
                &[
                    "Kabul only callable at ≤4 points",
                    "End: Confirmation required",
                    "After smash: Own turn possible",
                    "Card action = Discard + Action",
                ],
            ),
            section("Tie", &["Kabul caller wins"]),
        ]),
    );

    ContentSet {
        brand: "KABUL".to_string(),
        cards: vec![card_1, card_2, card_3, card_4],
        back_title: "KABUL".to_string(),
        back_subtitle: "Card Game".to_string(),
        cover_title: "KABUL".to_string(),
        cover_subtitle: "Game Rules".to_string(),
        about_title: "About the Game".to_string(),
        description: vec![
            "KABUL is a fast-paced card game for 2-6 players,".to_string(),
            "inspired by Cabo, Skyjo and Golf. The goal is to achieve".to_string(),
            "the lowest score – but beware:".to_string(),
            "You don't know all your cards!".to_string(),
            String::new(),
            "Memorize your cards, swap cleverly, and call".to_string(),
            "»Kabul!« when you think you'll win.".to_string(),
            String::new(),
            "Duration: approx. 15-20 minutes".to_string(),
        ],
        repo_url: "https://github.com/hazelwalker/kabul-instructions".to_string(),
        repo_label: "github.com/hazelwalker/kabul-instructions".to_string(),
        captions: Captions {
            rule_edition: "Rule Cards".to_string(),
            rule_front: "Front Sides".to_string(),
            rule_back: "Back Sides".to_string(),
            compact_edition: "Compact".to_string(),
            compact_front: "Front: Card Values | Detailed Rules".to_string(),
            compact_back: "Back: Gameplay | Penalties".to_string(),
            title_edition: "Title Card".to_string(),
            title_front: "Front Side".to_string(),
            title_back: "Back Side".to_string(),
            duplex_hint: "↻ Duplex: Long Edge Flip".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_languages_carry_four_cards() {
        for lang in [Language::De, Language::En] {
            let set = ContentSet::for_language(lang);
            assert_eq!(set.cards.len(), 4);
            assert!(matches!(set.cards[0].content, ContentBlock::ValuesTable { .. }));
            for spec in &set.cards[1..] {
                assert!(matches!(spec.content, ContentBlock::Sections(_)));
            }
        }
    }

    #[test]
    fn compact_pages_cross_assign_cards() {
        let set = ContentSet::for_language(Language::En);
        let (front, back) = set.compact_pages();
        assert_eq!(front[0].title, set.cards[0].title);
        assert_eq!(front[1].title, set.cards[2].title);
        assert_eq!(back[0].title, set.cards[1].title);
        assert_eq!(back[1].title, set.cards[3].title);
        assert_eq!(
            front.iter().map(|c| c.slot.as_str()).collect::<Vec<_>>(),
            vec!["1a", "2a"]
        );
        assert_eq!(
            back.iter().map(|c| c.slot.as_str()).collect::<Vec<_>>(),
            vec!["1b", "2b"]
        );
    }

    #[test]
    fn description_keeps_blank_gap_lines() {
        let set = ContentSet::for_language(Language::De);
        assert_eq!(set.description.iter().filter(|l| l.is_empty()).count(), 2);
    }
}
