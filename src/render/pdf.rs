//! PDF canvas backend over `printpdf`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::{DynamicImage, Luma};
use printpdf::{
    BuiltinFont, Color as PdfColor, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line as PdfLine, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point as PdfPoint, Polygon, Pt, Px, Rgb,
    calculate_points_for_circle,
    path::{PaintMode, WindingOrder},
};
use qrcode::{EcLevel, QrCode};

use crate::fonts::FontSet;
use crate::geometry::{PT_PER_MM, PrintLayout};
use crate::render::canvas::{Align, Canvas, FillPath, PathSeg, Point, Rect};
use crate::style::{Color, FontRole};

const LAYER_NAME: &str = "Layer 1";

/// Multi-page PDF document implementing [`Canvas`].
///
/// All positions arrive in points (bottom-left origin, PDF-native), so the
/// only conversion happening here is point -> `Mm` at the `printpdf` API
/// boundary.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    page_width: f32,
    page_height: f32,
    body_font: IndirectFontRef,
    heading_font: IndirectFontRef,
    fonts: FontSet,
}

impl PdfCanvas {
    /// Create a document with one empty page of the layout's page size.
    pub fn new(title: &str, layout: &PrintLayout, fonts: FontSet) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            to_mm(layout.page_width),
            to_mm(layout.page_height),
            LAYER_NAME,
        );
        let layer = doc.get_page(page).get_layer(layer);

        let body_font = embed_font(&doc, &fonts, FontRole::Body)?;
        let heading_font = embed_font(&doc, &fonts, FontRole::Heading)?;

        Ok(Self {
            doc,
            layer,
            page_width: layout.page_width,
            page_height: layout.page_height,
            body_font,
            heading_font,
            fonts,
        })
    }

    /// Write the finished document to `path` in one pass.
    pub fn finish(self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn font_ref(&self, role: FontRole) -> &IndirectFontRef {
        match role {
            FontRole::Body => &self.body_font,
            FontRole::Heading => &self.heading_font,
        }
    }
}

fn embed_font(
    doc: &PdfDocumentReference,
    fonts: &FontSet,
    role: FontRole,
) -> Result<IndirectFontRef> {
    let loaded = match role {
        FontRole::Body => fonts.body.as_ref(),
        FontRole::Heading => fonts.heading.as_ref(),
    };
    match loaded {
        Some(font) => doc
            .add_external_font(font.data.as_slice())
            .map_err(|e| anyhow!("failed to embed font: {e}")),
        None => {
            let builtin = match role {
                FontRole::Body => BuiltinFont::Helvetica,
                FontRole::Heading => BuiltinFont::HelveticaBold,
            };
            doc.add_builtin_font(builtin)
                .map_err(|e| anyhow!("failed to register builtin font: {e}"))
        }
    }
}

fn to_mm(pt: f32) -> Mm {
    Mm::from(Pt(pt))
}

fn to_point(p: Point) -> PdfPoint {
    PdfPoint { x: Pt(p.x), y: Pt(p.y) }
}

fn to_rgb(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

fn rect_ring(rect: Rect) -> Vec<(PdfPoint, bool)> {
    vec![
        (to_point(Point::new(rect.x, rect.y)), false),
        (to_point(Point::new(rect.x + rect.width, rect.y)), false),
        (
            to_point(Point::new(rect.x + rect.width, rect.y + rect.height)),
            false,
        ),
        (to_point(Point::new(rect.x, rect.y + rect.height)), false),
    ]
}

impl Canvas for PdfCanvas {
    fn set_fill(&mut self, color: Color) {
        self.layer.set_fill_color(to_rgb(color));
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.layer.set_outline_color(to_rgb(color));
        self.layer.set_outline_thickness(width);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.layer.add_polygon(Polygon {
            rings: vec![rect_ring(rect)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn fill_path(&mut self, path: &FillPath) {
        let mut points: Vec<(PdfPoint, bool)> = vec![(to_point(path.start), false)];
        for seg in &path.segs {
            match seg {
                PathSeg::Line(p) => points.push((to_point(*p), false)),
                PathSeg::Curve(c1, c2, end) => {
                    // A cubic segment needs the previous point flagged as the
                    // curve start, followed by the two control handles.
                    if let Some(last) = points.last_mut() {
                        last.1 = true;
                    }
                    points.push((to_point(*c1), true));
                    points.push((to_point(*c2), true));
                    points.push((to_point(*end), false));
                }
            }
        }
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        let points = calculate_points_for_circle(Pt(radius), Pt(center.x), Pt(center.y));
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.layer.add_line(PdfLine {
            points: vec![(to_point(from), false), (to_point(to), false)],
            is_closed: false,
        });
    }

    fn text(&mut self, text: &str, role: FontRole, size: f32, at: Point, align: Align) {
        let x = match align {
            Align::Left => at.x,
            Align::Center => at.x - self.text_width(text, role, size) / 2.0,
            Align::Right => at.x - self.text_width(text, role, size),
        };
        self.layer
            .use_text(text, size, to_mm(x), to_mm(at.y), self.font_ref(role));
    }

    fn text_width(&self, text: &str, role: FontRole, size: f32) -> f32 {
        self.fonts.width(role, text, size)
    }

    fn qr_symbol(&mut self, payload: &str, rect: Rect) -> Result<()> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|e| anyhow!("failed to build QR code: {e:?}"))?;
        let gray = code.render::<Luma<u8>>().build();
        let rgb = DynamicImage::ImageLuma8(gray).to_rgb8();
        let (width_px, height_px) = rgb.dimensions();

        let image = Image::from(ImageXObject {
            width: Px(width_px as usize),
            height: Px(height_px as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: false,
            image_data: rgb.into_raw(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // Scale the pixel grid to the requested physical size.
        let dpi = width_px as f32 / (rect.width / PT_PER_MM / 25.4);
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(to_mm(rect.x)),
                translate_y: Some(to_mm(rect.y)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn push_state(&mut self) {
        self.layer.save_graphics_state();
    }

    fn pop_state(&mut self) {
        self.layer.restore_graphics_state();
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.layer.add_polygon(Polygon {
            rings: vec![rect_ring(rect)],
            mode: PaintMode::Clip,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn end_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(to_mm(self.page_width), to_mm(self.page_height), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }
}
