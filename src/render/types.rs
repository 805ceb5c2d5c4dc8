//! Drawable primitives and the rendered scene

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{BoxMm, Length as Mm, PtMm, SizeMm};

use super::fonts::FontFace;
use super::svg::SvgOut;

/// Paint-order slot a primitive belongs to.
///
/// Declaration order is paint order; later stages are drawn over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Background,
    LeftStrip,
    StarRing,
    CountryCode,
    RightStrip,
    MainText,
    Border,
    GlossOverlay,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Background,
        Stage::LeftStrip,
        Stage::StarRing,
        Stage::CountryCode,
        Stage::RightStrip,
        Stage::MainText,
        Stage::Border,
        Stage::GlossOverlay,
    ];

    /// Kebab-case label used in logs and messages
    pub fn name(self) -> &'static str {
        match self {
            Stage::Background => "background",
            Stage::LeftStrip => "left-strip",
            Stage::StarRing => "star-ring",
            Stage::CountryCode => "country-code",
            Stage::RightStrip => "right-strip",
            Stage::MainText => "main-text",
            Stage::Border => "border",
            Stage::GlossOverlay => "gloss-overlay",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry shared by every primitive
#[enum_dispatch]
pub trait Drawable {
    /// Area the primitive covers, in plate millimeters.
    ///
    /// Text runs have no glyph metrics here: their box is the anchor point.
    fn bounds(&self) -> BoxMm;
}

/// Serialization of a primitive into an SVG element
#[enum_dispatch]
pub trait WriteSvg {
    fn write_svg(&self, out: &mut SvgOut);
}

/// Stroke applied to the outline of a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: Mm,
}

/// Axis-aligned rectangle, optionally rounded, filled and/or stroked
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub origin: PtMm,
    pub size: SizeMm,
    pub corner_radius: Mm,
    /// `None` leaves the interior unpainted
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl Drawable for RectPrimitive {
    fn bounds(&self) -> BoxMm {
        BoxMm::from_rect(self.origin, self.size)
    }
}

/// Closed polygon with a solid fill
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<PtMm>,
    pub fill: String,
}

impl Drawable for PolygonPrimitive {
    fn bounds(&self) -> BoxMm {
        let mut bb = BoxMm::new();
        for p in &self.points {
            bb.expand_point(*p);
        }
        bb
    }
}

/// Font weight as written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// The face's own weight, never synthesized
    Natural,
    Numeric(u16),
}

impl FontWeight {
    pub fn css(self) -> String {
        match self {
            FontWeight::Natural => "normal".to_string(),
            FontWeight::Numeric(w) => w.to_string(),
        }
    }
}

/// Single horizontally centered line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Horizontal center and baseline of the run
    pub anchor: PtMm,
    pub content: String,
    pub font_family: String,
    pub font_size: Mm,
    pub font_weight: FontWeight,
    pub letter_spacing: Mm,
    pub fill: String,
}

impl Drawable for TextRun {
    fn bounds(&self) -> BoxMm {
        let mut bb = BoxMm::new();
        bb.expand_point(self.anchor);
        bb
    }
}

/// One color stop of a gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, 0.0 (top) to 1.0 (bottom)
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// Full-plate translucent overlay with a top-to-bottom linear gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientOverlay {
    pub id: String,
    pub origin: PtMm,
    pub size: SizeMm,
    pub stops: Vec<GradientStop>,
}

impl Drawable for GradientOverlay {
    fn bounds(&self) -> BoxMm {
        BoxMm::from_rect(self.origin, self.size)
    }
}

/// Any drawable unit of a scene
#[enum_dispatch(Drawable, WriteSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectPrimitive),
    Polygon(PolygonPrimitive),
    Text(TextRun),
    Gradient(GradientOverlay),
}

/// A primitive tagged with the stage that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub stage: Stage,
    pub primitive: Primitive,
}

/// Ordered output of one render call, in plate millimeters
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: Mm,
    pub height: Mm,
    pub items: Vec<SceneItem>,
    /// Face used by the main text run, if one was drawn
    pub text_font: Option<FontFace>,
}

impl Scene {
    pub(crate) fn new(width: Mm, height: Mm) -> Self {
        Self { width, height, items: Vec::new(), text_font: None }
    }

    pub(crate) fn push(&mut self, stage: Stage, primitive: impl Into<Primitive>) {
        crate::log::trace!(stage = stage.name(), index = self.items.len(), "scene primitive");
        self.items.push(SceneItem { stage, primitive: primitive.into() });
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().map(|item| &item.primitive)
    }

    /// Primitives drawn by one stage, in paint order
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &Primitive> {
        self.items
            .iter()
            .filter(move |item| item.stage == stage)
            .map(|item| &item.primitive)
    }

    /// Distinct stages present, in paint order
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages: Vec<Stage> = self.items.iter().map(|item| item.stage).collect();
        stages.dedup();
        stages
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Union of all primitive bounds
    pub fn bounds(&self) -> BoxMm {
        let mut bb = BoxMm::new();
        for primitive in self.primitives() {
            bb.expand_bbox(&primitive.bounds());
        }
        bb
    }

    /// The plate rectangle itself
    pub fn plate_bounds(&self) -> BoxMm {
        BoxMm::from_rect(PtMm::default(), SizeMm::new(self.width, self.height))
    }

    /// True if some primitive reaches outside the plate, such as a text
    /// anchor moved off it by its offsets
    pub fn overflows(&self) -> bool {
        !self.plate_bounds().contains(&self.bounds())
    }
}
