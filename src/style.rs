//! Color palette and type scale shared by every card face.

/// 8-bit RGB color, converted by the active canvas backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed KABUL palette (Japanese-red accent on white card stock).
pub struct Palette;

impl Palette {
    /// Card background, kept white for clean print results.
    pub const BG: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TEXT: Color = Color::rgb(0x1A, 0x1A, 0x1A);
    pub const ACCENT: Color = Color::rgb(0xC4, 0x1E, 0x3A);
    pub const HEADING: Color = Color::rgb(0x2D, 0x2D, 0x2D);

    /// ♥ ♦ suit glyphs.
    pub const SUIT_RED: Color = Color::rgb(0xC4, 0x1E, 0x3A);
    /// ♠ ♣ suit glyphs.
    pub const SUIT_BLACK: Color = Color::rgb(0x1A, 0x1A, 0x1A);

    // Front-side decoration.
    pub const WAVE_LIGHT: Color = Color::rgb(0xF7, 0xF7, 0xF7);
    pub const WAVE_MEDIUM: Color = Color::rgb(0xEE, 0xEE, 0xEE);
    pub const CIRCLE_ACCENT: Color = Color::rgb(0xFE, 0xF5, 0xF6);

    // Decorative back side (4-card edition) and title cover.
    pub const BACK_BASE: Color = Color::rgb(0xC4, 0x1E, 0x3A);
    pub const BACK_WAVE1: Color = Color::rgb(0xA0, 0x18, 0x30);
    pub const BACK_WAVE2: Color = Color::rgb(0x8A, 0x14, 0x28);
    pub const BACK_CIRCLE: Color = Color::rgb(0xD4, 0x2A, 0x4A);

    pub const CROP_MARK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const FOOTER: Color = Color::rgb(0x99, 0x99, 0x99);
}

/// Logical font roles; the resolver maps them to concrete families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Body,
    /// Bold face, used for titles and section headings alike.
    Heading,
}

/// Font sizes in points.
pub struct TypeScale;

impl TypeScale {
    /// "KABUL" brand line at the top of every rule card.
    pub const TITLE: f32 = 13.0;
    pub const SUBTITLE: f32 = 7.5;
    pub const HEADING: f32 = 7.0;
    pub const BODY: f32 = 6.2;
    /// Slot number such as "1/4" in the lower-right corner.
    pub const NUMBER: f32 = 6.0;

    // Cover and info faces.
    pub const BACK_TITLE: f32 = 18.0;
    pub const BACK_SUBTITLE: f32 = 8.0;
    pub const COVER_TITLE: f32 = 20.0;
    pub const COVER_SUBTITLE: f32 = 9.0;
    pub const INFO_TITLE: f32 = 11.0;
    pub const INFO_BODY: f32 = 6.0;
    pub const INFO_CAPTION: f32 = 4.5;
    pub const PAGE_FOOTER: f32 = 7.0;
}
