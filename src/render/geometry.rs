//! Geometry helpers: insets, ring placement and template translation

use glam::{DVec2, dvec2};

use crate::types::{Angle, Length as Mm, Point, PtMm, Scalar, Size, SizeMm};

/// Shrink a rectangle by `inset` on every side.
///
/// Used for strokes centered on the path: insetting by half the stroke width
/// puts the stroke's outer edge on the original rectangle.
pub fn inset_rect(origin: PtMm, size: SizeMm, inset: Mm) -> (PtMm, SizeMm) {
    (
        Point::new(origin.x + inset, origin.y + inset),
        Size::new(size.w - inset * 2.0, size.h - inset * 2.0),
    )
}

/// Point at `angle` on a circle, standard angle convention in a y-down space
/// (0° points right, positive angles turn clockwise on screen).
pub fn ring_point(center: PtMm, radius: Mm, angle: Angle) -> PtMm {
    let dir = DVec2::from_angle(angle.to_radians());
    Point::from_dvec2(center.to_dvec2() + dir * radius.raw())
}

/// Place a shape template around `center`, scaling offsets by `scale`.
pub fn place_template<const N: usize>(
    template: &[(f64, f64); N],
    center: PtMm,
    scale: Scalar,
) -> [PtMm; N] {
    let c = center.to_dvec2();
    template.map(|(dx, dy)| Point::from_dvec2(c + dvec2(dx, dy) * scale.raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_by_half_stroke() {
        let (origin, size) = inset_rect(
            Point::default(),
            Size::new(Mm(520.0), Mm(110.0)),
            Mm(2.5),
        );
        assert_eq!(origin, Point::new(Mm(2.5), Mm(2.5)));
        assert_eq!(size, Size::new(Mm(515.0), Mm(105.0)));
    }

    #[test]
    fn ring_point_quadrants() {
        let c = Point::new(Mm(10.0), Mm(10.0));
        let east = ring_point(c, Mm(2.0), Angle(0.0));
        assert_eq!(east, Point::new(Mm(12.0), Mm(10.0)));

        let south = ring_point(c, Mm(2.0), Angle(90.0));
        assert!((south.x.0 - 10.0).abs() < 1e-12);
        assert!((south.y.0 - 12.0).abs() < 1e-12);
    }

    #[test]
    fn template_is_translated_and_scaled() {
        let pts = place_template(&[(1.0, -1.0), (0.0, 2.0)], Point::new(Mm(5.0), Mm(5.0)), Scalar(2.0));
        assert_eq!(pts[0], Point::new(Mm(7.0), Mm(3.0)));
        assert_eq!(pts[1], Point::new(Mm(5.0), Mm(9.0)));
    }
}
