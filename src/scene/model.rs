use serde::{Deserialize, Serialize};

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{CanvasSize, Point, Vec2};
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::geometry::fit::contain_fit;
use crate::scene::spec_record::SpecRecord;

/// Diameter of the circular logo badge, in canvas pixels.
pub const LOGO_DIAMETER: f64 = 100.0;
/// Inset from the right edge for the default logo placement.
pub const LOGO_DEFAULT_INSET: f64 = 80.0;

pub const DEFAULT_IMAGE_SIZE: u32 = 400;
pub const DEFAULT_BORDER_RADIUS: u32 = 20;
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";
pub const DEFAULT_SHADOW_STRENGTH: u32 = 40;

/// How the pasted image and footer arrange themselves on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutProfile {
    /// Aspect-preserving subject box and a three-column spec grid.
    #[default]
    Expanded,
    /// Square cover-cropped subject box and a two-column grid.
    Compact,
}

/// User-adjustable styling for the pasted subject image.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleParams {
    /// Size budget of the subject box, in canvas pixels.
    pub image_size: u32,
    /// Corner radius of the subject box, in canvas pixels.
    pub border_radius: u32,
    /// CSS color string for the drop shadow.
    pub shadow_color: String,
    /// Blur radius of the drop shadow; zero disables the shadow.
    pub shadow_strength: u32,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            border_radius: DEFAULT_BORDER_RADIUS,
            shadow_color: DEFAULT_SHADOW_COLOR.to_owned(),
            shadow_strength: DEFAULT_SHADOW_STRENGTH,
        }
    }
}

/// A pasted subject image plus the paste sequence number that produced it.
#[derive(Debug, Clone)]
pub struct PastedImage {
    pub image: PreparedImage,
    /// Sequence ticket of the paste that installed this image. Used to
    /// discard completions of pastes that were superseded mid-decode.
    pub seq: u64,
}

/// Everything the renderer needs for one card.
///
/// Positions are centers in canvas pixels. `background_offset` pans the
/// cover-fitted backdrop; `Point::ZERO` logo position is the unplaced
/// sentinel resolved by [`SceneState::place_logo_default`].
#[derive(Debug, Clone)]
pub struct SceneState {
    pub canvas: CanvasSize,
    pub style: StyleParams,
    pub background_offset: Vec2,
    pub logo_position: Point,
    pub pasted_image_position: Point,
    pub spec: SpecRecord,
    pub pasted_image: Option<PastedImage>,
    pub layout: LayoutProfile,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            style: StyleParams::default(),
            background_offset: Vec2::ZERO,
            logo_position: Point::ZERO,
            pasted_image_position: Point::ZERO,
            spec: SpecRecord::default(),
            pasted_image: None,
            layout: LayoutProfile::default(),
        }
    }
}

impl SceneState {
    pub fn validate(&self) -> VitrineResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(VitrineError::validation("canvas must be non-empty"));
        }
        if !self.background_offset.x.is_finite()
            || !self.background_offset.y.is_finite()
            || !self.logo_position.x.is_finite()
            || !self.logo_position.y.is_finite()
            || !self.pasted_image_position.x.is_finite()
            || !self.pasted_image_position.y.is_finite()
        {
            return Err(VitrineError::validation("positions must be finite"));
        }
        Ok(())
    }

    /// Drawn size of the pasted subject box, if an image is installed.
    ///
    /// The expanded profile contains the image inside a square budget while
    /// keeping its aspect ratio; the compact profile always yields a square
    /// (the image is cover-cropped into it at draw time).
    pub fn pasted_box(&self) -> Option<(f64, f64)> {
        let pasted = self.pasted_image.as_ref()?;
        let size = f64::from(self.style.image_size);
        match self.layout {
            LayoutProfile::Expanded => Some(contain_fit(
                size,
                f64::from(pasted.image.width),
                f64::from(pasted.image.height),
            )),
            LayoutProfile::Compact => Some((size, size)),
        }
    }

    /// Resolve the unplaced-logo sentinel to the top-right default spot.
    pub fn place_logo_default(&mut self) {
        if self.logo_position == Point::ZERO {
            self.logo_position = Point::new(
                f64::from(self.canvas.width) - LOGO_DEFAULT_INSET,
                LOGO_DEFAULT_INSET,
            );
        }
    }

    /// Install a freshly pasted image, centered on the canvas.
    pub fn install_pasted(&mut self, image: PreparedImage, seq: u64) {
        self.pasted_image = Some(PastedImage { image, seq });
        self.pasted_image_position = self.canvas.center();
    }
}
