//! Outline glyphs drawn next to each spec grid entry.
//!
//! Each glyph is a tiny line drawing built from kurbo path segments and
//! expanded to a fillable outline with [`kurbo::stroke`], since the raster
//! backend only fills paths.

use kurbo::{BezPath, Cap, Circle, Join, Shape, Stroke, StrokeOpts};

/// Nominal glyph box, in canvas pixels.
pub const GLYPH_SIZE: f64 = 20.0;
/// Stroke width of the glyph centerlines.
pub const GLYPH_STROKE_WIDTH: f64 = 1.5;

/// The glyph vocabulary of the spec grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecGlyph {
    Cpu,
    Ram,
    Gpu,
    Ssd,
    Display,
    Identifier,
}

impl SpecGlyph {
    /// Filled outline of the glyph anchored at a text position.
    ///
    /// `(x, y)` follows text-drawing conventions: `x` is the glyph's left
    /// edge and `y` the text baseline the glyph sits on. The glyph center
    /// lands slightly above the baseline to line up with the label.
    pub fn outline(self, x: f64, y: f64) -> BezPath {
        let cx = x + GLYPH_SIZE / 2.0;
        let cy = y - GLYPH_SIZE / 2.0 + 5.0;
        let centerline = self.centerline(cx, cy, GLYPH_SIZE);
        let style = Stroke::new(GLYPH_STROKE_WIDTH)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        kurbo::stroke(
            centerline.elements().iter().copied(),
            &style,
            &StrokeOpts::default(),
            0.05,
        )
    }

    fn centerline(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let mut p = BezPath::new();
        match self {
            SpecGlyph::Cpu => {
                let s = size * 0.7;
                rect_outline(&mut p, cx - s / 2.0, cy - s / 2.0, s, s);
                for i in -1..=1 {
                    let i = f64::from(i);
                    p.move_to((cx - s / 2.0 - 3.0, cy + i * 4.0));
                    p.line_to((cx - s / 2.0, cy + i * 4.0));
                    p.move_to((cx + s / 2.0, cy + i * 4.0));
                    p.line_to((cx + s / 2.0 + 3.0, cy + i * 4.0));
                    p.move_to((cx + i * 4.0, cy - s / 2.0 - 3.0));
                    p.line_to((cx + i * 4.0, cy - s / 2.0));
                    p.move_to((cx + i * 4.0, cy + s / 2.0));
                    p.line_to((cx + i * 4.0, cy + s / 2.0 + 3.0));
                }
            }
            SpecGlyph::Ram => {
                let w = size * 0.9;
                let h = size * 0.4;
                rect_outline(&mut p, cx - w / 2.0, cy - h / 2.0, w, h);
                for i in -2..=2 {
                    let i = f64::from(i);
                    p.move_to((cx + i * 3.0, cy + h / 2.0));
                    p.line_to((cx + i * 3.0, cy + h / 2.0 - 3.0));
                }
            }
            SpecGlyph::Gpu => {
                let w = size * 0.9;
                let h = size * 0.5;
                rect_outline(&mut p, cx - w / 2.0, cy - h / 2.0, w, h);
                p.extend(Circle::new((cx - 2.0, cy), h * 0.3).to_path(0.05));
                p.move_to((cx + 4.0, cy - 2.0));
                p.line_to((cx + 8.0, cy - 2.0));
                p.move_to((cx + 4.0, cy + 2.0));
                p.line_to((cx + 8.0, cy + 2.0));
            }
            SpecGlyph::Ssd => {
                let w = size * 0.4;
                let h = size * 0.9;
                rect_outline(&mut p, cx - w / 2.0, cy - h / 2.0, w, h);
                p.move_to((cx - w / 2.0, cy - h / 2.0 + 4.0));
                p.line_to((cx + w / 2.0, cy - h / 2.0 + 4.0));
                p.move_to((cx - 1.0, cy + 4.0));
                p.line_to((cx - 1.0, cy + 8.0));
                p.move_to((cx + 1.0, cy + 4.0));
                p.line_to((cx + 1.0, cy + 8.0));
            }
            SpecGlyph::Display => {
                let w = size * 0.9;
                let h = size * 0.6;
                rect_outline(&mut p, cx - w / 2.0, cy - h / 2.0 - 2.0, w, h);
                p.move_to((cx - 4.0, cy + h / 2.0 + 2.0));
                p.line_to((cx + 4.0, cy + h / 2.0 + 2.0));
                p.move_to((cx, cy + h / 2.0 - 2.0));
                p.line_to((cx, cy + h / 2.0 + 2.0));
            }
            SpecGlyph::Identifier => {
                let s = size * 0.8;
                p.extend(Circle::new((cx, cy), s / 2.0).to_path(0.05));
                // Simplified 'f' monogram inside the ring.
                p.move_to((cx + 2.0, cy + 4.0));
                p.line_to((cx + 2.0, cy - 2.0));
                p.quad_to((cx + 2.0, cy - 4.0), (cx, cy - 4.0));
                p.move_to((cx - 1.0, cy - 1.0));
                p.line_to((cx + 4.0, cy - 1.0));
            }
        }
        p
    }
}

fn rect_outline(p: &mut BezPath, x: f64, y: f64, w: f64, h: f64) {
    p.move_to((x, y));
    p.line_to((x + w, y));
    p.line_to((x + w, y + h));
    p.line_to((x, y + h));
    p.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SpecGlyph; 6] = [
        SpecGlyph::Cpu,
        SpecGlyph::Ram,
        SpecGlyph::Gpu,
        SpecGlyph::Ssd,
        SpecGlyph::Display,
        SpecGlyph::Identifier,
    ];

    #[test]
    fn outlines_are_non_empty() {
        for glyph in ALL {
            let outline = glyph.outline(0.0, 0.0);
            assert!(
                !outline.elements().is_empty(),
                "{glyph:?} produced an empty outline"
            );
        }
    }

    #[test]
    fn outlines_stay_near_the_anchor() {
        for glyph in ALL {
            let bbox = glyph.outline(100.0, 200.0).bounding_box();
            // Center is (x + 10, y - 5); pins and stands reach a little
            // past the nominal box, the stroke adds its half-width.
            assert!(bbox.x0 > 100.0 - GLYPH_SIZE, "{glyph:?} {bbox:?}");
            assert!(bbox.x1 < 100.0 + 2.0 * GLYPH_SIZE, "{glyph:?} {bbox:?}");
            assert!(bbox.y0 > 200.0 - 2.0 * GLYPH_SIZE, "{glyph:?} {bbox:?}");
            assert!(bbox.y1 < 200.0 + GLYPH_SIZE, "{glyph:?} {bbox:?}");
        }
    }

    #[test]
    fn cpu_outline_spans_its_pins() {
        let bbox = SpecGlyph::Cpu.outline(0.0, 0.0).bounding_box();
        // Pin tips sit 10 px out from center on each side, plus stroke.
        let cx = 10.0;
        let cy = -5.0;
        assert!(bbox.x0 <= cx - 10.0);
        assert!(bbox.x1 >= cx + 10.0);
        assert!(bbox.y0 <= cy - 10.0);
        assert!(bbox.y1 >= cy + 10.0);
    }
}
