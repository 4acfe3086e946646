//! Cross-platform font resolution.
//!
//! Probes well-known Windows (Arial) and Linux (DejaVu Sans) font paths for
//! a regular/bold pair, loading metrics through `fontdue`. When nothing is
//! found the PDF backend degrades to the builtin Helvetica faces with an
//! approximate width metric; rendering proceeds either way.

use std::path::Path;

use fontdue::{Font, FontSettings};
use log::warn;

use crate::style::FontRole;

/// Average advance, as a fraction of the font size, used when only the
/// builtin fallback faces are available and no metrics can be read.
const FALLBACK_ADVANCE: f32 = 0.54;

const WINDOWS_FONTS: [(&str, &str); 2] = [
    ("C:/Windows/Fonts/arial.ttf", "C:/Windows/Fonts/arialbd.ttf"),
    ("C:/Windows/Fonts/segoeui.ttf", "C:/Windows/Fonts/segoeuib.ttf"),
];

const LINUX_FONTS: [(&str, &str); 2] = [
    (
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    ),
];

/// A TTF loaded from disk: raw bytes for embedding plus parsed metrics.
#[derive(Clone)]
pub struct LoadedFont {
    pub data: Vec<u8>,
    pub metrics: Font,
}

/// Resolved pair of font faces for the two logical roles.
///
/// `None` means the face could not be resolved and the backend should fall
/// back to a guaranteed-available builtin family.
#[derive(Clone)]
pub struct FontSet {
    pub body: Option<LoadedFont>,
    pub heading: Option<LoadedFont>,
}

impl FontSet {
    /// Probe platform font paths, preferring the current platform's set.
    pub fn resolve() -> Self {
        let (primary, secondary) = if cfg!(windows) {
            (&WINDOWS_FONTS[..], &LINUX_FONTS[..])
        } else {
            (&LINUX_FONTS[..], &WINDOWS_FONTS[..])
        };

        for (regular, bold) in primary.iter().chain(secondary.iter()) {
            if let Some(set) = Self::try_pair(regular, bold) {
                return set;
            }
        }

        warn!("no usable TTF fonts found, falling back to builtin Helvetica");
        Self {
            body: None,
            heading: None,
        }
    }

    fn try_pair(regular: &str, bold: &str) -> Option<Self> {
        let body = load_font(regular)?;
        // Missing bold is tolerable: reuse the regular face.
        let heading = match load_font(bold) {
            Some(font) => Some(font),
            None => {
                warn!("bold face {bold} not found, reusing {regular}");
                load_font(regular)
            }
        };
        Some(Self {
            body: Some(body),
            heading,
        })
    }

    fn face(&self, role: FontRole) -> Option<&LoadedFont> {
        match role {
            FontRole::Body => self.body.as_ref(),
            FontRole::Heading => self.heading.as_ref(),
        }
    }

    /// Rendered width of `text` in points at `size`.
    pub fn width(&self, role: FontRole, text: &str, size: f32) -> f32 {
        match self.face(role) {
            Some(font) => text
                .chars()
                .map(|ch| font.metrics.metrics(ch, size).advance_width)
                .sum(),
            None => text.chars().count() as f32 * size * FALLBACK_ADVANCE,
        }
    }
}

fn load_font(path: &str) -> Option<LoadedFont> {
    if !Path::new(path).exists() {
        return None;
    }
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("could not read font {path}: {err}");
            return None;
        }
    };
    match Font::from_bytes(data.clone(), FontSettings::default()) {
        Ok(metrics) => Some(LoadedFont { data, metrics }),
        Err(err) => {
            warn!("could not parse font {path}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_metric_scales_with_text_and_size() {
        let set = FontSet {
            body: None,
            heading: None,
        };
        let one = set.width(FontRole::Body, "x", 10.0);
        let four = set.width(FontRole::Body, "xxxx", 10.0);
        assert!((four - 4.0 * one).abs() < 1e-6);
        assert!(one > 0.0);
    }
}
