//! The frosted-glass spec footer.
//!
//! The panel's backdrop blur is composed in the pipeline; this module owns
//! the panel geometry, the grid layout for both profiles, and the overlay
//! pass that draws scrim, border, title, divider, labels and glyphs.

use crate::foundation::core::{BezPath, CanvasSize, Point, Rect};
use crate::foundation::error::VitrineResult;
use crate::geometry::path::rounded_rect_path;
use crate::render::glyphs::SpecGlyph;
use crate::render::painter::{Painter, fill_path_straight, fill_rect_straight};
use crate::scene::model::{LayoutProfile, SceneState};
use crate::scene::spec_record::{
    KEY_CPU, KEY_FBID, KEY_GPU, KEY_LAPTOP_MODEL, KEY_MONITOR_SIZE, KEY_RAM, KEY_SSD, SpecRecord,
};

pub const FOOTER_MARGIN: f64 = 24.0;
pub const FOOTER_PADDING: f64 = 28.0;
pub const FOOTER_HEIGHT: f64 = 200.0;
pub const FOOTER_RADIUS: f64 = 12.0;
/// Blur radius of the backdrop showing through the glass.
pub const BACKDROP_BLUR_RADIUS: u32 = 25;

const TITLE_SIZE: f32 = 32.0;
const GRID_TEXT_SIZE: f32 = 19.0;
const ROW_GAP: f64 = 50.0;
const LABEL_INSET: f64 = 30.0;

const SCRIM_RGBA: [u8; 4] = [0, 0, 0, 166];
const BORDER_RGBA: [u8; 4] = [255, 255, 255, 64];
const DIVIDER_RGBA: [u8; 4] = [255, 255, 255, 51];
const TITLE_RGBA: [u8; 4] = [255, 255, 255, 255];
const GRID_TEXT_RGBA: [u8; 4] = [255, 255, 255, 242];
const GLYPH_RGBA: [u8; 4] = [255, 255, 255, 204];

/// Panel placement for a given canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterMetrics {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl FooterMetrics {
    pub fn for_canvas(canvas: CanvasSize) -> Self {
        let w = f64::from(canvas.width) - FOOTER_MARGIN * 2.0;
        let h = FOOTER_HEIGHT;
        Self {
            x: FOOTER_MARGIN,
            y: f64::from(canvas.height) - FOOTER_MARGIN - h,
            w,
            h,
        }
    }

    pub fn panel_path(&self) -> BezPath {
        rounded_rect_path(self.x, self.y, self.w, self.h, FOOTER_RADIUS)
    }

    pub fn title_baseline(&self) -> Point {
        Point::new(self.x + FOOTER_PADDING, self.y + FOOTER_PADDING + 25.0)
    }

    pub fn divider_y(&self) -> f64 {
        self.y + FOOTER_PADDING + 52.0
    }

    pub fn grid_y(&self) -> f64 {
        self.y + FOOTER_PADDING + 95.0
    }

    pub fn available_width(&self) -> f64 {
        self.w - FOOTER_PADDING * 2.0
    }

    pub fn column_x(&self, fraction: f64) -> f64 {
        self.x + FOOTER_PADDING + self.available_width() * fraction
    }

    /// Baseline of the compact profile's trailing line, near the panel
    /// bottom.
    pub fn trailing_y(&self) -> f64 {
        self.y + self.h - 12.0
    }
}

/// One glyph-plus-label cell of the spec grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEntry<'a> {
    pub glyph: SpecGlyph,
    pub text: &'a str,
    pub x: f64,
    pub baseline_y: f64,
}

/// Grid cells for the scene's layout profile, in draw order.
pub fn grid_entries<'a>(
    spec: &'a SpecRecord,
    layout: LayoutProfile,
    metrics: &FooterMetrics,
) -> Vec<GridEntry<'a>> {
    let gy = metrics.grid_y();
    let cell = |glyph, key, fallback, fraction: f64, row: usize| GridEntry {
        glyph,
        text: spec.field_or(key, fallback),
        x: metrics.column_x(fraction),
        baseline_y: gy + ROW_GAP * row as f64,
    };

    match layout {
        LayoutProfile::Expanded => vec![
            cell(SpecGlyph::Cpu, KEY_CPU, "CPU", 0.0, 0),
            cell(SpecGlyph::Ram, KEY_RAM, "RAM", 0.0, 1),
            cell(SpecGlyph::Gpu, KEY_GPU, "GPU", 0.35, 0),
            cell(SpecGlyph::Ssd, KEY_SSD, "SSD", 0.35, 1),
            cell(SpecGlyph::Display, KEY_MONITOR_SIZE, "Monitor", 0.7, 0),
            cell(SpecGlyph::Identifier, KEY_FBID, "FBID", 0.7, 1),
        ],
        LayoutProfile::Compact => {
            let ty = metrics.trailing_y();
            let mut cells = vec![
                cell(SpecGlyph::Cpu, KEY_CPU, "CPU", 0.0, 0),
                cell(SpecGlyph::Ram, KEY_RAM, "RAM", 0.0, 1),
                cell(SpecGlyph::Gpu, KEY_GPU, "GPU", 0.5, 0),
                cell(SpecGlyph::Ssd, KEY_SSD, "SSD", 0.5, 1),
            ];
            cells.push(GridEntry {
                glyph: SpecGlyph::Display,
                text: spec.field_or(KEY_MONITOR_SIZE, "Monitor"),
                x: metrics.column_x(0.0),
                baseline_y: ty,
            });
            cells.push(GridEntry {
                glyph: SpecGlyph::Identifier,
                text: spec.field_or(KEY_FBID, "FBID"),
                x: metrics.column_x(0.5),
                baseline_y: ty,
            });
            cells
        }
    }
}

/// Draw scrim, border, title, divider and the spec grid into `dst`.
///
/// `dst` must be a canvas-sized transparent pixmap; the caller composites it
/// over the frame after the blurred backdrop has been applied.
pub(crate) fn render_overlay(
    painter: &mut Painter,
    scene: &SceneState,
    dst: &mut vello_cpu::Pixmap,
) -> VitrineResult<()> {
    let metrics = FooterMetrics::for_canvas(scene.canvas);
    let panel = metrics.panel_path();
    let width = dst.width();
    let height = dst.height();

    painter.render_pass(width, height, dst, |this, ctx| {
        fill_path_straight(ctx, &panel, SCRIM_RGBA);

        let border = kurbo::stroke(
            panel.elements().iter().copied(),
            &kurbo::Stroke::new(1.5),
            &kurbo::StrokeOpts::default(),
            0.05,
        );
        fill_path_straight(ctx, &border, BORDER_RGBA);

        this.draw_text(
            ctx,
            scene.spec.field_or(KEY_LAPTOP_MODEL, "Laptop Model"),
            TITLE_SIZE,
            parley::FontWeight::BOLD,
            TITLE_RGBA,
            metrics.title_baseline(),
            None,
        )?;

        let dy = metrics.divider_y();
        fill_rect_straight(
            ctx,
            Rect::new(
                metrics.x + FOOTER_PADDING,
                dy - 0.5,
                metrics.x + metrics.w - FOOTER_PADDING,
                dy + 0.5,
            ),
            DIVIDER_RGBA,
        );

        for entry in grid_entries(&scene.spec, scene.layout, &metrics) {
            fill_path_straight(ctx, &entry.glyph.outline(entry.x, entry.baseline_y), GLYPH_RGBA);
            this.draw_text(
                ctx,
                entry.text,
                GRID_TEXT_SIZE,
                parley::FontWeight::MEDIUM,
                GRID_TEXT_RGBA,
                Point::new(entry.x + LABEL_INSET, entry.baseline_y),
                None,
            )?;
        }
        Ok(())
    })
}
