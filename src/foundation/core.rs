use crate::foundation::error::{VitrineError, VitrineResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Default canvas width in pixels when no setting is stored.
pub const DEFAULT_CANVAS_WIDTH: u32 = 900;
/// Default canvas height in pixels when no setting is stored.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;

/// Intrinsic canvas pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Both dimensions must be positive and fit the raster backend's 16-bit
    /// surface addressing.
    pub fn new(width: u32, height: u32) -> VitrineResult<Self> {
        if width == 0 || height == 0 {
            return Err(VitrineError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(VitrineError::validation("canvas dimensions must fit u16"));
        }
        Ok(Self { width, height })
    }

    /// Canvas-space center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-canvas rect at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_rejects_degenerate_dims() {
        assert!(CanvasSize::new(0, 100).is_err());
        assert!(CanvasSize::new(100, 0).is_err());
        assert!(CanvasSize::new(70_000, 100).is_err());
        assert!(CanvasSize::new(900, 1080).is_ok());
    }

    #[test]
    fn canvas_size_default_matches_bootstrap() {
        let c = CanvasSize::default();
        assert_eq!((c.width, c.height), (900, 1080));
        assert_eq!(c.center(), Point::new(450.0, 540.0));
        assert_eq!(c.rect(), Rect::new(0.0, 0.0, 900.0, 1080.0));
    }
}
