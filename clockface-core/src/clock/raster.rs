use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Canvas,
        error::{ClockfaceError, ClockfaceResult},
    },
    render::frame::FrameRGB,
};

/// Rasterizes SVG documents of a fixed size into opaque frames.
///
/// Holds the parse options so the system font database is scanned once per run.
pub struct SvgRasterizer {
    canvas: Canvas,
    options: usvg::Options<'static>,
}

impl SvgRasterizer {
    /// Build a rasterizer with the system fonts loaded.
    pub fn new(canvas: Canvas) -> ClockfaceResult<Self> {
        canvas.validate()?;
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Ok(Self::with_fontdb(canvas, Arc::new(db)))
    }

    /// Build a rasterizer over an existing font database.
    ///
    /// Text whose family is not installed falls back to the generic sans-serif, serif and
    /// monospace faces, then to any face in the database.
    pub fn with_fontdb(canvas: Canvas, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        let options = usvg::Options {
            fontdb,
            font_resolver: numeral_font_resolver(),
            ..Default::default()
        };
        Self { canvas, options }
    }

    /// Parse `svg` and render it scaled to the canvas.
    pub fn render(&self, svg: &str) -> ClockfaceResult<FrameRGB> {
        let tree = usvg::Tree::from_str(svg, &self.options).context("parse clock svg")?;

        let (width, height) = (self.canvas.width, self.canvas.height);
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ClockfaceError::render("failed to allocate clock pixmap"))?;
        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        // Premultiplied RGBA; the document paints an opaque background first, so dropping alpha
        // is exact.
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for px in pixmap.data().chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        FrameRGB::new(width, height, data)
    }
}

fn numeral_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families: Vec<Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => Family::Serif,
                    usvg::FontFamily::SansSerif => Family::SansSerif,
                    usvg::FontFamily::Cursive => Family::Cursive,
                    usvg::FontFamily::Fantasy => Family::Fantasy,
                    usvg::FontFamily::Monospace => Family::Monospace,
                    usvg::FontFamily::Named(name) => Family::Name(name),
                })
                .collect();
            families.extend([Family::SansSerif, Family::Serif, Family::Monospace]);

            let stretch = match font.stretch() {
                usvg::FontStretch::UltraCondensed => Stretch::UltraCondensed,
                usvg::FontStretch::ExtraCondensed => Stretch::ExtraCondensed,
                usvg::FontStretch::Condensed => Stretch::Condensed,
                usvg::FontStretch::SemiCondensed => Stretch::SemiCondensed,
                usvg::FontStretch::Normal => Stretch::Normal,
                usvg::FontStretch::SemiExpanded => Stretch::SemiExpanded,
                usvg::FontStretch::Expanded => Stretch::Expanded,
                usvg::FontStretch::ExtraExpanded => Stretch::ExtraExpanded,
                usvg::FontStretch::UltraExpanded => Stretch::UltraExpanded,
            };
            let style = match font.style() {
                usvg::FontStyle::Normal => Style::Normal,
                usvg::FontStyle::Italic => Style::Italic,
                usvg::FontStyle::Oblique => Style::Oblique,
            };

            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch,
                style,
            };
            // Generic names map to fixed families (e.g. Arial) that may be missing.
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|face| face.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/raster.rs"]
mod tests;
