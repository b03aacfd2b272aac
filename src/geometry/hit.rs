use kurbo::Point;

/// Whether `p` lies in the circle of the given diameter centered at `c`.
pub fn circle_hit(p: Point, c: Point, diameter: f64) -> bool {
    p.distance(c) <= diameter / 2.0
}

/// Whether `p` lies in the axis-aligned `w` by `h` box centered at `c`.
/// Bounds are inclusive.
pub fn rect_hit(p: Point, c: Point, w: f64, h: f64) -> bool {
    (p.x - c.x).abs() <= w / 2.0 && (p.y - c.y).abs() <= h / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_hit_boundary_is_inclusive() {
        let c = Point::new(100.0, 100.0);
        assert!(circle_hit(Point::new(100.0, 100.0), c, 100.0));
        assert!(circle_hit(Point::new(150.0, 100.0), c, 100.0));
        assert!(!circle_hit(Point::new(150.1, 100.0), c, 100.0));
        // Corner of the bounding square is outside the circle.
        assert!(!circle_hit(Point::new(140.0, 140.0), c, 100.0));
    }

    #[test]
    fn rect_hit_boundary_is_inclusive() {
        let c = Point::new(50.0, 50.0);
        assert!(rect_hit(Point::new(50.0, 50.0), c, 40.0, 20.0));
        assert!(rect_hit(Point::new(70.0, 60.0), c, 40.0, 20.0));
        assert!(!rect_hit(Point::new(70.1, 50.0), c, 40.0, 20.0));
        assert!(!rect_hit(Point::new(50.0, 60.1), c, 40.0, 20.0));
    }
}
