//! Typed plate units.
//!
//! All plate geometry lives in millimeters, origin top-left, y growing down.
//! Display pixels only appear after a [`Scaler`] has been applied.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::DVec2;

/// Why a number was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    NaN,
    Infinite,
    Zero,
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            NumericError::NaN => "NaN",
            NumericError::Infinite => "infinite",
            NumericError::Zero => "zero",
            NumericError::Negative => "negative",
        };
        write!(f, "value is {what}")
    }
}

impl std::error::Error for NumericError {}

/// Accept only finite values greater than zero
fn positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Length in millimeters
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Unchecked constructor for constants
    #[inline]
    pub const fn mm(val: f64) -> Length {
        Length(val)
    }

    /// A finite, strictly positive length (plate dimensions)
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        positive(val).map(Length)
    }

    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Display pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

/// Unitless factor applied to shape templates
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ONE: Scalar = Scalar(1.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Uniform millimeter → pixel conversion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    factor: f64,
}

impl Scaler {
    pub fn try_new(factor: f64) -> Result<Self, NumericError> {
        positive(factor).map(|factor| Scaler { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn len(&self, l: Length) -> Px {
        Px(l.0 * self.factor)
    }

    pub fn size(&self, s: Size<Length>) -> Size<Px> {
        Size { w: self.len(s.w), h: self.len(s.h) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Length> {
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x.0, self.y.0)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Point { x: Length(v.x), y: Length(v.y) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl Default for BBox<Length> {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox<Length> {
    /// Empty box; the first expansion sets both corners
    pub fn new() -> Self {
        BBox {
            min: Point { x: Length(f64::MAX), y: Length(f64::MAX) },
            max: Point { x: Length(f64::MIN), y: Length(f64::MIN) },
        }
    }

    pub fn from_rect(origin: Point<Length>, size: Size<Length>) -> Self {
        BBox {
            min: origin,
            max: Point { x: origin.x + size.w, y: origin.y + size.h },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x.0 > self.max.x.0 || self.min.y.0 > self.max.y.0
    }

    pub fn expand_point(&mut self, p: Point<Length>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn expand_bbox(&mut self, other: &BBox<Length>) {
        if other.is_empty() {
            return;
        }
        self.expand_point(other.min);
        self.expand_point(other.max);
    }

    /// Edges inclusive
    pub fn contains(&self, other: &BBox<Length>) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    pub fn width(&self) -> Length { self.max.x - self.min.x }
}

pub type PtMm = Point<Length>;
pub type SizeMm = Size<Length>;
pub type BoxMm = BBox<Length>;
