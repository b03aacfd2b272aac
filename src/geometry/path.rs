use kurbo::{BezPath, Circle, Point, Shape};

/// Rounded-rectangle outline with quadratic corner curves.
///
/// The corner radius is clamped to `min(radius, w/2, h/2)`: oversized values
/// degrade to a capsule instead of producing overlapping corners. Vertex order
/// starts at `(x + r, y)` and runs clockwise.
pub fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, radius: f64) -> BezPath {
    let r = radius.max(0.0).min(w / 2.0).min(h / 2.0);
    let mut p = BezPath::new();
    p.move_to((x + r, y));
    p.line_to((x + w - r, y));
    p.quad_to((x + w, y), (x + w, y + r));
    p.line_to((x + w, y + h - r));
    p.quad_to((x + w, y + h), (x + w - r, y + h));
    p.line_to((x + r, y + h));
    p.quad_to((x, y + h), (x, y + h - r));
    p.line_to((x, y + r));
    p.quad_to((x, y), (x + r, y));
    p.close_path();
    p
}

/// Circle outline as a fillable path.
pub fn circle_path(center: Point, diameter: f64) -> BezPath {
    Circle::new(center, diameter / 2.0).to_path(0.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn rounded_rect_starts_on_top_edge() {
        let p = rounded_rect_path(10.0, 20.0, 100.0, 80.0, 12.0);
        match p.elements().first() {
            Some(PathEl::MoveTo(pt)) => assert_eq!(*pt, Point::new(22.0, 20.0)),
            other => panic!("unexpected first element: {other:?}"),
        }
    }

    #[test]
    fn rounded_rect_stays_inside_box() {
        let p = rounded_rect_path(10.0, 20.0, 100.0, 80.0, 12.0);
        let bb = p.bounding_box();
        assert!((bb.x0 - 10.0).abs() < 1e-9 && (bb.y0 - 20.0).abs() < 1e-9);
        assert!((bb.x1 - 110.0).abs() < 1e-9 && (bb.y1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_radius_clamps_to_half_extent() {
        // r clamps to min(300, 50, 40) = 40; the path must still span the box.
        let p = rounded_rect_path(0.0, 0.0, 100.0, 80.0, 300.0);
        let bb = p.bounding_box();
        assert!(bb.x0.abs() < 1e-9 && bb.y0.abs() < 1e-9);
        assert!((bb.x1 - 100.0).abs() < 1e-9 && (bb.y1 - 80.0).abs() < 1e-9);

        // Top edge straight segment collapses to a single point at x = w/2.
        match p.elements().first() {
            Some(PathEl::MoveTo(pt)) => assert_eq!(*pt, Point::new(50.0, 0.0)),
            other => panic!("unexpected first element: {other:?}"),
        }
    }

    #[test]
    fn negative_radius_behaves_like_zero() {
        let p = rounded_rect_path(0.0, 0.0, 10.0, 10.0, -5.0);
        let bb = p.bounding_box();
        assert!((bb.x1 - 10.0).abs() < 1e-9 && (bb.y1 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn circle_path_spans_its_diameter() {
        let p = circle_path(Point::new(50.0, 60.0), 100.0);
        let bb = p.bounding_box();
        assert!((bb.x0 - 0.0).abs() < 0.5 && (bb.x1 - 100.0).abs() < 0.5);
        assert!((bb.y0 - 10.0).abs() < 0.5 && (bb.y1 - 110.0).abs() < 0.5);
    }
}
