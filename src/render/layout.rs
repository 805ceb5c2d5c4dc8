//! Plate layout: every position and size the compositor needs.
//!
//! All values are derived from the parameter set in one pass. Nothing is
//! clamped: strips that overlap, or text pushed off the plate by its offsets,
//! come out exactly as the arithmetic says.

use crate::errors::PlateError;
use crate::params::{ParameterSet, PlateSize};
use crate::types::{Length as Mm, Point, PtMm, Size, SizeMm};

use super::defaults;
use super::fonts::{FontFace, FontResolver};
use super::geometry::inset_rect;
use super::stars::{StarRing, star_ring};

/// A full-height band at one edge of the plate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub x: Mm,
    pub width: Mm,
}

/// Anchor and size of a centered text run
#[derive(Debug, Clone, PartialEq)]
pub struct TextGeometry {
    /// Horizontal center and baseline
    pub anchor: PtMm,
    pub font_size: Mm,
}

/// Stroked border rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderGeometry {
    pub origin: PtMm,
    pub size: SizeMm,
    pub stroke_width: Mm,
}

/// Computed layout of one plate
#[derive(Debug, Clone, PartialEq)]
pub struct PlateLayout {
    pub size: PlateSize,
    /// Width of the left strip, zero when inactive
    pub left_strip_width: Mm,
    pub left_strip: Option<StripGeometry>,
    pub right_strip: Option<StripGeometry>,
    pub star_ring: Option<StarRing>,
    pub country_label: Option<TextGeometry>,
    pub main_text: TextGeometry,
    pub border: Option<BorderGeometry>,
    pub font: FontFace,
}

/// `height · 0.45` when the strip is shown, else zero
pub fn left_strip_width(height: Mm, active: bool) -> Mm {
    if active {
        height * defaults::LEFT_STRIP_RATIO
    } else {
        Mm::ZERO
    }
}

/// Anchor of the main text.
///
/// Starts at the plate center, moves right by half the left strip and left
/// by half the right strip so the text sits centered in the space between
/// them, then applies the user offsets. The baseline sits `0.20·height`
/// below the vertical center.
pub fn main_text_anchor(
    size: PlateSize,
    left_strip: Mm,
    right_strip: Mm,
    offset_x: Mm,
    offset_y: Mm,
) -> PtMm {
    let x = size.width / 2.0 + offset_x + left_strip / 2.0 - right_strip / 2.0;
    let y = size.height / 2.0 + size.height * defaults::TEXT_BASELINE_DROP_RATIO + offset_y;
    Point::new(x, y)
}

/// Border rectangle for a stroke of `thickness`, outer edge on the plate edge
pub fn border_geometry(size: PlateSize, thickness: Mm) -> BorderGeometry {
    let (origin, rect) = inset_rect(
        Point::default(),
        Size::new(size.width, size.height),
        thickness / 2.0,
    );
    BorderGeometry { origin, size: rect, stroke_width: thickness }
}

/// Lay out a plate. Fails before computing anything if a parameter is invalid.
pub fn compute_layout(
    params: &ParameterSet,
    fonts: &dyn FontResolver,
) -> Result<PlateLayout, PlateError> {
    let size = params.validate()?;

    let left_width = left_strip_width(size.height, params.eu_strip_active);
    let left_strip = params
        .eu_strip_active
        .then_some(StripGeometry { x: Mm::ZERO, width: left_width });

    let right_strip = params.right_strip_active.then(|| {
        let width = Mm(params.right_strip_width);
        StripGeometry { x: size.width - width, width }
    });
    let right_width = right_strip.map_or(Mm::ZERO, |s| s.width);

    let star_ring = params
        .stars_visible()
        .then(|| star_ring(left_width, size.height));

    let country_label = params.eu_strip_active.then(|| TextGeometry {
        anchor: Point::new(
            left_width / 2.0,
            size.height * defaults::COUNTRY_BASELINE_RATIO,
        ),
        font_size: size.height * defaults::COUNTRY_FONT_RATIO,
    });

    let main_text = TextGeometry {
        anchor: main_text_anchor(
            size,
            left_width,
            right_width,
            Mm(params.text_position_x),
            Mm(params.text_position_y),
        ),
        font_size: size.height * defaults::TEXT_FONT_RATIO,
    };

    let border = params
        .border_active
        .then(|| border_geometry(size, Mm(params.border_thickness)));

    let font = fonts.resolve(params.font_type);

    crate::log::debug!(
        width = size.width.0,
        height = size.height.0,
        left_strip = left_width.0,
        right_strip = right_width.0,
        text_x = main_text.anchor.x.0,
        text_y = main_text.anchor.y.0,
        font = %font.family,
        "computed plate layout"
    );

    Ok(PlateLayout {
        size,
        left_strip_width: left_width,
        left_strip,
        right_strip,
        star_ring,
        country_label,
        main_text,
        border,
        font,
    })
}
