//! Proportional layout constants (fractions of plate height/strip width, or mm)

use crate::types::{Angle, Length as Mm, Scalar};

/// Left strip width as a fraction of plate height
pub const LEFT_STRIP_RATIO: f64 = 0.45;

/// Star ring center height as a fraction of plate height
pub const STAR_RING_CENTER_Y_RATIO: f64 = 0.35;
/// Star ring radius as a fraction of left strip width
pub const STAR_RING_RADIUS_RATIO: f64 = 0.25;
pub const STAR_COUNT: usize = 12;
pub const STAR_STEP: Angle = Angle(30.0);
pub const STAR_FILL: &str = "yellow";
pub const STAR_TEMPLATE_SCALE: Scalar = Scalar::ONE;

/// Ten-vertex star outline in mm, relative to the star's position
#[rustfmt::skip]
pub const STAR_TEMPLATE: [(f64, f64); 10] = [
    ( 0.0, -1.5),
    ( 0.4, -0.4),
    ( 1.5, -0.4),
    ( 0.6,  0.3),
    ( 1.0,  1.4),
    ( 0.0,  0.7),
    (-1.0,  1.4),
    (-0.6,  0.3),
    (-1.5, -0.4),
    (-0.4, -0.4),
];

/// Country code baseline as a fraction of plate height
pub const COUNTRY_BASELINE_RATIO: f64 = 0.88;
pub const COUNTRY_FONT_RATIO: f64 = 0.22;
pub const COUNTRY_FONT_FAMILY: &str = "Inter, sans-serif";
pub const COUNTRY_FONT_WEIGHT: u16 = 900;
pub const COUNTRY_FILL: &str = "white";

/// Main text size as a fraction of plate height
pub const TEXT_FONT_RATIO: f64 = 0.72;
/// Main text baseline drop below the vertical center, as a fraction of height
pub const TEXT_BASELINE_DROP_RATIO: f64 = 0.20;

/// Corner radius shared by the background and the border
pub const CORNER_RADIUS: Mm = Mm::mm(2.0);

/// Glossy overlay stops: (offset, color, opacity), top to bottom
pub const GLOSS_STOPS: [(f64, &str, f64); 3] = [
    (0.0, "white", 0.15),
    (0.5, "white", 0.05),
    (1.0, "black", 0.08),
];
