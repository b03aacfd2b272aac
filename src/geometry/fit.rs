use kurbo::{Rect, Vec2};

/// Cover-fit placement of an asset over a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub draw_w: f64,
    pub draw_h: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl CoverFit {
    /// Destination rect after applying a user pan offset.
    pub fn dest_rect(self, pan: Vec2) -> Rect {
        Rect::new(
            self.offset_x + pan.x,
            self.offset_y + pan.y,
            self.offset_x + pan.x + self.draw_w,
            self.offset_y + pan.y + self.draw_h,
        )
    }
}

/// Scale an asset so it fully covers the container, cropping overflow.
///
/// Scale factor is `max(container_w/asset_w, container_h/asset_h)`; the result
/// is centered over the container and overflows on at most one axis.
pub fn cover_fit(container_w: f64, container_h: f64, asset_w: f64, asset_h: f64) -> CoverFit {
    let scale = (container_w / asset_w).max(container_h / asset_h);
    let draw_w = asset_w * scale;
    let draw_h = asset_h * scale;
    CoverFit {
        draw_w,
        draw_h,
        offset_x: (container_w - draw_w) / 2.0,
        offset_y: (container_h - draw_h) / 2.0,
    }
}

/// Scale an asset to fit entirely inside a square budget without cropping.
///
/// Landscape assets take the full budget on width, portrait and square assets
/// on height; the other axis shrinks by the aspect ratio.
pub fn contain_fit(budget: f64, asset_w: f64, asset_h: f64) -> (f64, f64) {
    let aspect = asset_w / asset_h;
    if aspect > 1.0 {
        (budget, budget / aspect)
    } else {
        (budget * aspect, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_fit_never_leaves_gaps() {
        for (iw, ih) in [(400.0, 300.0), (300.0, 400.0), (900.0, 1080.0), (16.0, 9.0)] {
            let f = cover_fit(900.0, 1080.0, iw, ih);
            assert!(f.draw_w >= 900.0 - 1e-9, "gap on x for {iw}x{ih}");
            assert!(f.draw_h >= 1080.0 - 1e-9, "gap on y for {iw}x{ih}");
        }
    }

    #[test]
    fn cover_fit_centers_overflow_symmetrically() {
        let f = cover_fit(900.0, 1080.0, 400.0, 300.0);
        // Height-bound: overflow is horizontal only.
        assert!((f.draw_h - 1080.0).abs() < 1e-9);
        assert!((f.draw_w - 1440.0).abs() < 1e-9);
        assert!((f.offset_x - (900.0 - 1440.0) / 2.0).abs() < 1e-9);
        assert!(f.offset_y.abs() < 1e-9);

        let r = f.dest_rect(Vec2::ZERO);
        assert!((r.x0 + r.x1 - 900.0).abs() < 1e-9);
        assert!((r.y0 + r.y1 - 1080.0).abs() < 1e-9);
    }

    #[test]
    fn cover_fit_dest_rect_applies_pan() {
        let f = cover_fit(100.0, 100.0, 50.0, 50.0);
        let r = f.dest_rect(Vec2::new(7.0, -3.0));
        assert_eq!(r, Rect::new(7.0, -3.0, 107.0, 97.0));
    }

    #[test]
    fn contain_fit_obeys_aspect_law() {
        let (w, h) = contain_fit(400.0, 800.0, 400.0);
        assert_eq!((w, h), (400.0, 200.0));

        let (w, h) = contain_fit(400.0, 400.0, 800.0);
        assert_eq!((w, h), (200.0, 400.0));

        let (w, h) = contain_fit(400.0, 512.0, 512.0);
        assert_eq!((w, h), (400.0, 400.0));
    }

    #[test]
    fn contain_fit_never_exceeds_budget() {
        for (iw, ih) in [(1.0, 999.0), (999.0, 1.0), (640.0, 480.0), (480.0, 640.0)] {
            let (w, h) = contain_fit(250.0, iw, ih);
            assert!(w <= 250.0 + 1e-9);
            assert!(h <= 250.0 + 1e-9);
            assert!(w == 250.0 || h == 250.0);
        }
    }
}
