//! Display scale resolution.
//!
//! The plate is drawn in millimeters; the preview surface is measured in
//! pixels. A single uniform factor maps one onto the other so the aspect
//! ratio never changes. Viewport bounds come from the caller.

use crate::errors::PlateError;
use crate::types::{Length as Mm, Px, Scaler, Size};

/// Available width above which the preview uses its fixed desktop width
pub const DESKTOP_BREAKPOINT: f64 = 768.0;
/// Preview width on wide containers
pub const DESKTOP_MAX_WIDTH: f64 = 800.0;
/// Horizontal padding subtracted on narrow containers
pub const CONTAINER_PADDING: f64 = 32.0;
/// Preview height cap
pub const MAX_HEIGHT: f64 = 300.0;

/// Largest box the preview may occupy, in display pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub max_width: f64,
    pub max_height: f64,
}

impl Viewport {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self { max_width, max_height }
    }

    /// Responsive bounds for a container of the given available width.
    ///
    /// Wide containers get a fixed 800px preview; narrow ones use the full
    /// width minus padding. Height is always capped at 300px.
    pub fn for_container(available_width: f64) -> Self {
        let max_width = if available_width > DESKTOP_BREAKPOINT {
            DESKTOP_MAX_WIDTH
        } else {
            available_width - CONTAINER_PADDING
        };
        Self { max_width, max_height: MAX_HEIGHT }
    }
}

/// Result of fitting a plate into a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub scaler: Scaler,
    pub width: Px,
    pub height: Px,
}

impl DisplayScale {
    pub fn factor(&self) -> f64 {
        self.scaler.factor()
    }
}

/// Fit a `width` × `height` plate into `viewport` with one uniform factor.
///
/// `s = min(maxW / width, maxH / height)`; display size is `(width·s, height·s)`.
pub fn resolve_scale(width: Mm, height: Mm, viewport: Viewport) -> Result<DisplayScale, PlateError> {
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    check_bound("viewport.maxWidth", viewport.max_width)?;
    check_bound("viewport.maxHeight", viewport.max_height)?;

    let factor = (viewport.max_width / width.raw()).min(viewport.max_height / height.raw());
    let scaler = Scaler::try_new(factor)
        .map_err(|_| PlateError::range("scale", factor, "a positive finite factor"))?;
    let size = scaler.size(Size::new(width, height));

    crate::log::trace!(factor, width = size.w.0, height = size.h.0, "resolved display scale");

    Ok(DisplayScale { scaler, width: size.w, height: size.h })
}

fn check_dimension(field: &'static str, value: Mm) -> Result<(), PlateError> {
    Mm::try_positive(value.raw())
        .map(|_| ())
        .map_err(|e| PlateError::dimension(field, value.raw(), e))
}

fn check_bound(field: &'static str, value: f64) -> Result<(), PlateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlateError::range(field, value, "a positive finite pixel count"))
    }
}
