use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::error::VitrineResult;
use crate::render::surface::{
    affine_to_cpu, bezpath_to_cpu, blur_rgba8_premul_q16, gaussian_kernel_q16,
    pixmap_from_premul_bytes,
};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine, draw_layout, first_baseline};

/// A decoded image wrapped as a vello paint, with its natural size.
#[derive(Clone)]
pub(crate) struct ImagePaint {
    pub(crate) paint: vello_cpu::Image,
    pub(crate) w: u32,
    pub(crate) h: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct BlurKernelKey {
    radius_px: u32,
    sigma_bits: u32,
}

/// Reusable drawing state shared across frames.
///
/// Owns the vector render context (recreated only when the surface size
/// changes), the text engine with the installed footer font, and the scratch
/// buffers and quantized kernels for the blur passes.
pub struct Painter {
    ctx: Option<vello_cpu::RenderContext>,
    text: TextLayoutEngine,
    font_data: Option<vello_cpu::peniko::FontData>,
    blur_scratch_a: Vec<u8>,
    blur_scratch_b: Vec<u8>,
    blur_kernels: HashMap<BlurKernelKey, Arc<Vec<u32>>>,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        Self {
            ctx: None,
            text: TextLayoutEngine::new(),
            font_data: None,
            blur_scratch_a: Vec::new(),
            blur_scratch_b: Vec::new(),
            blur_kernels: HashMap::new(),
        }
    }

    /// Register the footer font for both layout and glyph rasterization.
    pub fn install_font(&mut self, font_bytes: &[u8]) -> VitrineResult<()> {
        self.text.install_font(font_bytes)?;
        self.font_data = Some(vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        ));
        Ok(())
    }

    pub fn has_font(&self) -> bool {
        self.font_data.is_some() && self.text.has_font()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> VitrineResult<R>,
    ) -> VitrineResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Run one vector pass and rasterize it into `dst`, which must match
    /// `width` x `height`.
    pub(crate) fn render_pass(
        &mut self,
        width: u16,
        height: u16,
        dst: &mut vello_cpu::Pixmap,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> VitrineResult<()>,
    ) -> VitrineResult<()> {
        self.with_ctx_mut(width, height, |this, ctx| {
            ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            f(this, ctx)?;
            ctx.flush();
            ctx.render_to_pixmap(dst);
            Ok(())
        })
    }

    /// Separable gaussian blur of a premultiplied pixmap, in place.
    ///
    /// Kernels are cached per (radius, sigma); radius 0 is a no-op.
    pub(crate) fn blur_in_place(
        &mut self,
        pixmap: &mut vello_cpu::Pixmap,
        radius_px: u32,
        sigma: f32,
    ) -> VitrineResult<()> {
        if radius_px == 0 {
            return Ok(());
        }
        let key = BlurKernelKey {
            radius_px,
            sigma_bits: sigma.to_bits(),
        };
        let kernel = match self.blur_kernels.get(&key) {
            Some(k) => Arc::clone(k),
            None => {
                let k = Arc::new(gaussian_kernel_q16(radius_px, sigma)?);
                self.blur_kernels.insert(key, Arc::clone(&k));
                k
            }
        };

        let width = u32::from(pixmap.width());
        let height = u32::from(pixmap.height());
        let bytes = pixmap.data_as_u8_slice_mut();
        let len = bytes.len();
        if self.blur_scratch_a.len() < len {
            self.blur_scratch_a.resize(len, 0);
        }
        if self.blur_scratch_b.len() < len {
            self.blur_scratch_b.resize(len, 0);
        }
        self.blur_scratch_a[..len].copy_from_slice(bytes);
        blur_rgba8_premul_q16(
            &self.blur_scratch_a[..len],
            bytes,
            &mut self.blur_scratch_b[..len],
            width,
            height,
            &kernel,
        );
        Ok(())
    }

    /// Lay out and draw a single text run with its baseline at `baseline_at`.
    ///
    /// A no-op when no footer font is installed.
    pub(crate) fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: f32,
        weight: parley::FontWeight,
        rgba: [u8; 4],
        baseline_at: Point,
        max_width_px: Option<f32>,
    ) -> VitrineResult<()> {
        let Some(font) = self.font_data.clone() else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let brush = TextBrushRgba8::new(rgba[0], rgba[1], rgba[2], rgba[3]);
        let layout = self.text.layout_plain(text, size_px, weight, brush, max_width_px)?;
        let baseline = f64::from(first_baseline(&layout));
        let origin = Point::new(baseline_at.x, baseline_at.y - baseline);
        draw_layout(ctx, &layout, &font, origin);
        Ok(())
    }
}

pub(crate) fn image_paint(image: &PreparedImage) -> VitrineResult<ImagePaint> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    Ok(ImagePaint {
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
        w: image.width,
        h: image.height,
    })
}

/// Draw an image scaled into `dest`. Parts outside the surface are clipped
/// by the rasterizer, which is how the panning background overflows.
pub(crate) fn draw_image_into_rect(
    ctx: &mut vello_cpu::RenderContext,
    paint: &ImagePaint,
    dest: Rect,
) {
    if paint.w == 0 || paint.h == 0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
        return;
    }
    let sx = dest.width() / f64::from(paint.w);
    let sy = dest.height() / f64::from(paint.h);
    let tr = Affine::translate((dest.x0, dest.y0)) * Affine::scale_non_uniform(sx, sy);
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(paint.paint.clone());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(paint.w),
        f64::from(paint.h),
    ));
}

/// Fill a path with a straight-alpha color, in canvas coordinates.
pub(crate) fn fill_path_straight(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    rgba: [u8; 4],
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
    ctx.fill_path(&bezpath_to_cpu(path));
}

/// Fill a rect with a straight-alpha color, in canvas coordinates.
pub(crate) fn fill_rect_straight(ctx: &mut vello_cpu::RenderContext, rect: Rect, rgba: [u8; 4]) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        rect.x0, rect.y0, rect.x1, rect.y1,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::clear_pixmap;

    #[test]
    fn render_pass_fills_requested_color() {
        let mut painter = Painter::new();
        let mut pm = vello_cpu::Pixmap::new(4, 4);
        painter
            .render_pass(4, 4, &mut pm, |_, ctx| {
                fill_rect_straight(ctx, Rect::new(0.0, 0.0, 4.0, 4.0), [255, 0, 0, 255]);
                Ok(())
            })
            .unwrap();
        let px = pm.data_as_u8_slice();
        assert_eq!(&px[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn blur_zero_radius_is_identity() {
        let mut painter = Painter::new();
        let mut pm = vello_cpu::Pixmap::new(2, 2);
        clear_pixmap(&mut pm, [10, 20, 30, 255]);
        let before = pm.data_as_u8_slice().to_vec();
        painter.blur_in_place(&mut pm, 0, 0.0).unwrap();
        assert_eq!(pm.data_as_u8_slice(), &before[..]);
    }

    #[test]
    fn blur_softens_an_edge() {
        let mut painter = Painter::new();
        let mut pm = vello_cpu::Pixmap::new(8, 1);
        // Left half opaque white, right half transparent.
        for (i, px) in pm.data_as_u8_slice_mut().chunks_exact_mut(4).enumerate() {
            if i < 4 {
                px.copy_from_slice(&[255, 255, 255, 255]);
            }
        }
        painter.blur_in_place(&mut pm, 2, 1.0).unwrap();
        let px = pm.data_as_u8_slice();
        // The pixel just past the edge picks up spread from the white side.
        let edge_alpha = px[4 * 4 + 3];
        assert!(edge_alpha > 0 && edge_alpha < 255, "alpha {edge_alpha}");
    }

    #[test]
    fn draw_text_without_font_is_a_noop() {
        let mut painter = Painter::new();
        let mut pm = vello_cpu::Pixmap::new(4, 4);
        painter
            .render_pass(4, 4, &mut pm, |this, ctx| {
                this.draw_text(
                    ctx,
                    "ignored",
                    16.0,
                    parley::FontWeight::NORMAL,
                    [255, 255, 255, 255],
                    Point::new(0.0, 0.0),
                    None,
                )
            })
            .unwrap();
        assert!(pm.data_as_u8_slice().iter().all(|&b| b == 0));
    }
}
