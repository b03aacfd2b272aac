use crate::foundation::core::{CanvasSize, Point};

/// Size of the view surface pointer events arrive in, next to the canvas
/// resolution it displays.
///
/// A canvas shown scaled (a fitted preview, a high-DPI surface) reports
/// pointer positions in view pixels; hit tests and drags work in canvas
/// pixels, so events are remapped on entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    pub view_width: f64,
    pub view_height: f64,
    pub canvas: CanvasSize,
}

impl ViewMetrics {
    /// A view rendered 1:1 with the canvas.
    pub fn identity(canvas: CanvasSize) -> Self {
        Self {
            view_width: f64::from(canvas.width),
            view_height: f64::from(canvas.height),
            canvas,
        }
    }

    /// Map a view-space point to canvas space.
    ///
    /// Degenerate view sizes fall back to the identity mapping rather than
    /// dividing by zero.
    pub fn to_canvas(&self, p: Point) -> Point {
        if self.view_width <= 0.0 || self.view_height <= 0.0 {
            return p;
        }
        Point::new(
            p.x * f64::from(self.canvas.width) / self.view_width,
            p.y * f64::from(self.canvas.height) / self.view_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_points_unchanged() {
        let m = ViewMetrics::identity(CanvasSize::default());
        assert_eq!(m.to_canvas(Point::new(12.5, 40.0)), Point::new(12.5, 40.0));
    }

    #[test]
    fn scaled_view_remaps_proportionally() {
        let m = ViewMetrics {
            view_width: 450.0,
            view_height: 540.0,
            canvas: CanvasSize::default(),
        };
        assert_eq!(m.to_canvas(Point::new(225.0, 270.0)), Point::new(450.0, 540.0));
    }

    #[test]
    fn degenerate_view_falls_back_to_identity() {
        let m = ViewMetrics {
            view_width: 0.0,
            view_height: 0.0,
            canvas: CanvasSize::default(),
        };
        assert_eq!(m.to_canvas(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }
}
