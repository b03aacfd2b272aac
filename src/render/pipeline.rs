use crate::assets::color::CssColor;
use crate::assets::store::AssetStore;
use crate::foundation::core::{BezPath, Rect, Vec2};
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::geometry::fit::cover_fit;
use crate::geometry::path::{circle_path, rounded_rect_path};
use crate::render::footer::{self, BACKDROP_BLUR_RADIUS, FooterMetrics};
use crate::render::painter::{
    ImagePaint, Painter, draw_image_into_rect, fill_path_straight, fill_rect_straight, image_paint,
};
use crate::render::surface::{mask_apply_rgba8_premul, premul_over_in_place};
use crate::scene::model::{LOGO_DIAMETER, LayoutProfile, SceneState};

/// Background fallback when no photo asset is loaded.
const BACKGROUND_FALLBACK_RGBA: [u8; 4] = [17, 17, 17, 255];

/// A rendered frame in RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether `data` carries premultiplied alpha. The pipeline always
    /// produces premultiplied frames; encoders unpremultiply on write.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Placement of the pasted image resolved against the current profile.
struct PastedDraw {
    paint: ImagePaint,
    /// Where the asset pixels land (may overflow `clip` in the compact
    /// profile's cover crop).
    dest: Rect,
    /// Rounded-rect clip path of the placement box.
    clip: BezPath,
}

/// Render the scene to a frame. Pixel-identical for identical inputs.
pub fn render_frame(
    scene: &SceneState,
    assets: &AssetStore,
    painter: &mut Painter,
) -> VitrineResult<FrameRGBA> {
    scene.validate()?;
    let (w16, h16) = canvas_dims_u16(scene)?;

    let bg_paint = assets.background().map(image_paint).transpose()?;
    let pasted = pasted_draw(scene)?;

    let mut base = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut base, |_, ctx| {
        draw_background(ctx, bg_paint.as_ref(), scene);
        Ok(())
    })?;

    if let Some(pasted) = &pasted {
        draw_pasted_layer(scene, painter, pasted, &mut base, w16, h16)?;
    }

    if let Some(logo) = assets.logo() {
        let paint = image_paint(logo)?;
        draw_logo_layer(scene, painter, &paint, &mut base, w16, h16)?;
    }

    draw_footer_layer(
        scene,
        painter,
        bg_paint.as_ref(),
        pasted.as_ref(),
        &mut base,
        w16,
        h16,
    )?;

    Ok(FrameRGBA {
        width: scene.canvas.width,
        height: scene.canvas.height,
        data: base.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn canvas_dims_u16(scene: &SceneState) -> VitrineResult<(u16, u16)> {
    let w: u16 = scene
        .canvas
        .width
        .try_into()
        .map_err(|_| VitrineError::render("canvas width exceeds u16"))?;
    let h: u16 = scene
        .canvas
        .height
        .try_into()
        .map_err(|_| VitrineError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn draw_background(
    ctx: &mut vello_cpu::RenderContext,
    bg: Option<&ImagePaint>,
    scene: &SceneState,
) {
    let cw = f64::from(scene.canvas.width);
    let ch = f64::from(scene.canvas.height);
    match bg {
        Some(paint) if paint.w > 0 && paint.h > 0 => {
            let fit = cover_fit(cw, ch, f64::from(paint.w), f64::from(paint.h));
            draw_image_into_rect(ctx, paint, fit.dest_rect(scene.background_offset));
        }
        _ => fill_rect_straight(ctx, scene.canvas.rect(), BACKGROUND_FALLBACK_RGBA),
    }
}

fn pasted_draw(scene: &SceneState) -> VitrineResult<Option<PastedDraw>> {
    let Some(pasted) = &scene.pasted_image else {
        return Ok(None);
    };
    let Some((bw, bh)) = scene.pasted_box() else {
        return Ok(None);
    };
    let bx = scene.pasted_image_position.x - bw / 2.0;
    let by = scene.pasted_image_position.y - bh / 2.0;

    let paint = image_paint(&pasted.image)?;
    let dest = match scene.layout {
        LayoutProfile::Expanded => Rect::new(bx, by, bx + bw, by + bh),
        LayoutProfile::Compact => {
            cover_fit(bw, bh, f64::from(paint.w), f64::from(paint.h)).dest_rect(Vec2::new(bx, by))
        }
    };
    let clip = rounded_rect_path(bx, by, bw, bh, f64::from(scene.style.border_radius));
    Ok(Some(PastedDraw { paint, dest, clip }))
}

/// Drop shadow (when enabled), then the image clipped to its rounded box.
fn draw_pasted_layer(
    scene: &SceneState,
    painter: &mut Painter,
    pasted: &PastedDraw,
    base: &mut vello_cpu::Pixmap,
    w16: u16,
    h16: u16,
) -> VitrineResult<()> {
    let strength = scene.style.shadow_strength;
    if strength > 0 {
        let color = CssColor::parse_or(&scene.style.shadow_color, CssColor::BLACK).to_rgba8();
        let mut shadow = vello_cpu::Pixmap::new(w16, h16);
        painter.render_pass(w16, h16, &mut shadow, |_, ctx| {
            fill_path_straight(ctx, &pasted.clip, color);
            Ok(())
        })?;
        painter.blur_in_place(&mut shadow, strength, strength as f32 / 2.0)?;
        premul_over_in_place(base.data_as_u8_slice_mut(), shadow.data_as_u8_slice())?;
    }

    let mut layer = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut layer, |_, ctx| {
        draw_image_into_rect(ctx, &pasted.paint, pasted.dest);
        Ok(())
    })?;

    let mut mask = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut mask, |_, ctx| {
        fill_path_straight(ctx, &pasted.clip, [255, 255, 255, 255]);
        Ok(())
    })?;

    let mut masked = vec![0u8; layer.data_as_u8_slice().len()];
    mask_apply_rgba8_premul(layer.data_as_u8_slice(), mask.data_as_u8_slice(), &mut masked);
    premul_over_in_place(base.data_as_u8_slice_mut(), &masked)
}

/// Logo cover-fit into its bounding square, clipped to the badge circle.
fn draw_logo_layer(
    scene: &SceneState,
    painter: &mut Painter,
    paint: &ImagePaint,
    base: &mut vello_cpu::Pixmap,
    w16: u16,
    h16: u16,
) -> VitrineResult<()> {
    if paint.w == 0 || paint.h == 0 {
        return Ok(());
    }
    let square_origin = Vec2::new(
        scene.logo_position.x - LOGO_DIAMETER / 2.0,
        scene.logo_position.y - LOGO_DIAMETER / 2.0,
    );
    let dest = cover_fit(
        LOGO_DIAMETER,
        LOGO_DIAMETER,
        f64::from(paint.w),
        f64::from(paint.h),
    )
    .dest_rect(square_origin);

    let mut layer = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut layer, |_, ctx| {
        draw_image_into_rect(ctx, paint, dest);
        Ok(())
    })?;

    let mut mask = vello_cpu::Pixmap::new(w16, h16);
    let circle = circle_path(scene.logo_position, LOGO_DIAMETER);
    painter.render_pass(w16, h16, &mut mask, |_, ctx| {
        fill_path_straight(ctx, &circle, [255, 255, 255, 255]);
        Ok(())
    })?;

    let mut masked = vec![0u8; layer.data_as_u8_slice().len()];
    mask_apply_rgba8_premul(layer.data_as_u8_slice(), mask.data_as_u8_slice(), &mut masked);
    premul_over_in_place(base.data_as_u8_slice_mut(), &masked)
}

/// Frosted backdrop, then the glass overlay with text and glyphs.
fn draw_footer_layer(
    scene: &SceneState,
    painter: &mut Painter,
    bg: Option<&ImagePaint>,
    pasted: Option<&PastedDraw>,
    base: &mut vello_cpu::Pixmap,
    w16: u16,
    h16: u16,
) -> VitrineResult<()> {
    let metrics = FooterMetrics::for_canvas(scene.canvas);
    let panel = metrics.panel_path();

    // Re-render background and the plain (unclipped, unshadowed) image, blur,
    // and keep only the panel region.
    let mut backdrop = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut backdrop, |_, ctx| {
        draw_background(ctx, bg, scene);
        if let Some(pasted) = pasted {
            draw_image_into_rect(ctx, &pasted.paint, pasted.dest);
        }
        Ok(())
    })?;
    painter.blur_in_place(
        &mut backdrop,
        BACKDROP_BLUR_RADIUS,
        BACKDROP_BLUR_RADIUS as f32 / 2.0,
    )?;

    let mut mask = vello_cpu::Pixmap::new(w16, h16);
    painter.render_pass(w16, h16, &mut mask, |_, ctx| {
        fill_path_straight(ctx, &panel, [255, 255, 255, 255]);
        Ok(())
    })?;

    let mut masked = vec![0u8; backdrop.data_as_u8_slice().len()];
    mask_apply_rgba8_premul(
        backdrop.data_as_u8_slice(),
        mask.data_as_u8_slice(),
        &mut masked,
    );
    premul_over_in_place(base.data_as_u8_slice_mut(), &masked)?;

    let mut overlay = vello_cpu::Pixmap::new(w16, h16);
    footer::render_overlay(painter, scene, &mut overlay)?;
    premul_over_in_place(base.data_as_u8_slice_mut(), overlay.data_as_u8_slice())
}
