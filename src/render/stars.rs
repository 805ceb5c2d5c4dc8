//! The twelve-star ring drawn inside the left strip

use crate::types::{Angle, Length as Mm, Point, PtMm};

use super::defaults;
use super::geometry::{place_template, ring_point};

/// One star of the ring
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub angle: Angle,
    pub position: PtMm,
    pub outline: [PtMm; 10],
}

/// Ring of evenly spaced stars
#[derive(Debug, Clone, PartialEq)]
pub struct StarRing {
    pub center: PtMm,
    pub radius: Mm,
    pub stars: Vec<Star>,
}

/// Build the ring for a strip `strip_width` wide on a plate `plate_height` tall.
///
/// The ring is centered at `(W/2, 0.35·H)` with radius `0.25·W`; star `i`
/// sits at `i·30°`.
pub fn star_ring(strip_width: Mm, plate_height: Mm) -> StarRing {
    let center = Point::new(
        strip_width / 2.0,
        plate_height * defaults::STAR_RING_CENTER_Y_RATIO,
    );
    let radius = strip_width * defaults::STAR_RING_RADIUS_RATIO;

    let stars = (0..defaults::STAR_COUNT)
        .map(|i| {
            let angle = Angle(defaults::STAR_STEP.0 * i as f64);
            let position = ring_point(center, radius, angle);
            Star {
                angle,
                position,
                outline: place_template(
                    &defaults::STAR_TEMPLATE,
                    position,
                    defaults::STAR_TEMPLATE_SCALE,
                ),
            }
        })
        .collect();

    StarRing { center, radius, stars }
}
