use crate::foundation::core::Point;
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::render::surface::affine_to_cpu;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Straight-alpha RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TextBrushRgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Stateful helper for building Parley text layouts.
///
/// The footer font is registered once with [`TextLayoutEngine::install_font`];
/// subsequent layouts resolve against the stored family name. Without an
/// installed font, layout requests fail and callers skip their text runs.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
        }
    }

    /// Register font bytes and remember the first family they provide.
    pub fn install_font(&mut self, font_bytes: &[u8]) -> VitrineResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| VitrineError::validation("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| VitrineError::validation("registered font family has no name"))?
            .to_string();
        self.family_name = Some(family_name);
        Ok(())
    }

    pub fn has_font(&self) -> bool {
        self.family_name.is_some()
    }

    /// Shape and lay out plain text in the installed font.
    pub fn layout_plain(
        &mut self,
        text: &str,
        size_px: f32,
        weight: parley::FontWeight,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> VitrineResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(VitrineError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family_name = self
            .family_name
            .clone()
            .ok_or_else(|| VitrineError::validation("no font installed"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }
}

/// Baseline of the layout's first glyph run, in layout-local pixels.
///
/// Canvas text positions name the baseline, so callers subtract this from
/// the target y to find the layout origin.
pub(crate) fn first_baseline(layout: &parley::Layout<TextBrushRgba8>) -> f32 {
    for line in layout.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                return run.baseline();
            }
        }
    }
    0.0
}

/// Draw a laid-out text block with its top-left corner at `origin`.
pub(crate) fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
    origin: Point,
) {
    ctx.set_transform(affine_to_cpu(crate::foundation::core::Affine::translate((
        origin.x, origin.y,
    ))));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_without_font_rejects_layout() {
        let mut engine = TextLayoutEngine::new();
        assert!(!engine.has_font());
        let brush = TextBrushRgba8::new(255, 255, 255, 255);
        assert!(engine
            .layout_plain("hello", 16.0, parley::FontWeight::NORMAL, brush, None)
            .is_err());
    }

    #[test]
    fn invalid_font_bytes_are_rejected() {
        let mut engine = TextLayoutEngine::new();
        assert!(engine.install_font(&[0u8; 8]).is_err());
        assert!(!engine.has_font());
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut engine = TextLayoutEngine::new();
        let brush = TextBrushRgba8::default();
        assert!(engine
            .layout_plain("x", 0.0, parley::FontWeight::NORMAL, brush, None)
            .is_err());
    }
}
