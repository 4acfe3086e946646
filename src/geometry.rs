use thiserror::Error;

/// Points per millimeter (PDF user space runs at 72 points per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert a physical length in millimeters to drawing points.
///
/// Every length in the crate is expressed in points; millimeter values only
/// appear at the configuration boundary and inside the fixed layout recipes.
pub const fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// A4 page size in millimeters.
const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Resolved print geometry, all values in points.
///
/// Built once from millimeter inputs; downstream renderers consume only the
/// derived values and never convert physical units themselves.
#[derive(Debug, Clone)]
pub struct PrintLayout {
    pub card_width: f32,
    pub card_height: f32,
    pub bleed: f32,
    pub crop_length: f32,
    pub crop_offset: f32,
    pub crop_line_width: f32,
    pub card_spacing: f32,
    pub content_margin: f32,
    pub page_width: f32,
    pub page_height: f32,
    /// Trim box plus bleed on both sides.
    pub card_width_bleed: f32,
    pub card_height_bleed: f32,
    /// Nominal trim size in millimeters, kept for the footer label.
    card_width_mm: f32,
    card_height_mm: f32,
}

impl PrintLayout {
    /// Poker-size cards (63x88mm) on A4 with 3mm bleed, the shipped preset.
    pub fn poker_a4() -> Self {
        // The preset values are known-good, so the error can't actually occur.
        Self::new(63.0, 88.0, 3.0, 5.0, 3.0, 0.25, 8.0, 3.5)
            .expect("built-in layout preset is valid")
    }

    /// Build a layout from millimeter inputs (crop line width in points).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        card_width_mm: f32,
        card_height_mm: f32,
        bleed_mm: f32,
        crop_length_mm: f32,
        crop_offset_mm: f32,
        crop_line_width: f32,
        card_spacing_mm: f32,
        content_margin_mm: f32,
    ) -> Result<Self, GeometryError> {
        let checks = [
            ("card width", card_width_mm),
            ("card height", card_height_mm),
            ("bleed", bleed_mm),
            ("crop mark length", crop_length_mm),
            ("crop mark offset", crop_offset_mm),
            ("crop line width", crop_line_width),
            ("card spacing", card_spacing_mm),
            ("content margin", content_margin_mm),
        ];
        for (name, value) in checks {
            if value <= 0.0 {
                return Err(GeometryError::NonPositive { name, value });
            }
        }

        let card_width = mm(card_width_mm);
        let card_height = mm(card_height_mm);
        let bleed = mm(bleed_mm);
        Ok(Self {
            card_width,
            card_height,
            bleed,
            crop_length: mm(crop_length_mm),
            crop_offset: mm(crop_offset_mm),
            crop_line_width,
            card_spacing: mm(card_spacing_mm),
            content_margin: mm(content_margin_mm),
            page_width: mm(A4_WIDTH_MM),
            page_height: mm(A4_HEIGHT_MM),
            card_width_bleed: card_width + 2.0 * bleed,
            card_height_bleed: card_height + 2.0 * bleed,
            card_width_mm,
            card_height_mm,
        })
    }

    /// Nominal trim size label printed in the page footer, e.g. `63×88mm`.
    pub fn trim_size_label(&self) -> String {
        format!("{:.0}×{:.0}mm", self.card_width_mm, self.card_height_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn millimeter_conversion_matches_pdf_points() {
        assert!((mm(25.4) - 72.0).abs() < 1e-4);
        assert!((mm(1.0) - 2.834_645_7).abs() < 1e-4);
    }

    #[test]
    fn bleed_box_is_derived_once() {
        let layout = PrintLayout::poker_a4();
        assert!((layout.card_width_bleed - (layout.card_width + 2.0 * layout.bleed)).abs() < 1e-6);
        assert!(
            (layout.card_height_bleed - (layout.card_height + 2.0 * layout.bleed)).abs() < 1e-6
        );
    }

    #[test]
    fn non_positive_dimension_is_rejected() {
        let err = PrintLayout::new(63.0, 88.0, 0.0, 5.0, 3.0, 0.25, 8.0, 3.5).unwrap_err();
        assert!(matches!(err, GeometryError::NonPositive { name: "bleed", .. }));
    }

    #[test]
    fn footer_label_uses_nominal_millimeters() {
        assert_eq!(PrintLayout::poker_a4().trim_size_label(), "63×88mm");
    }
}
