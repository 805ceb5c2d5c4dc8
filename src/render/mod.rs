//! Plate rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Proportional constants
//! - `scale`: Fitting the plate into a viewport
//! - `geometry`: Insets, ring placement, shape templates
//! - `stars`: The twelve-star ring
//! - `fonts`: Font descriptors and the resolver capability
//! - `layout`: Positions and sizes derived from the parameters
//! - `types`: Primitives and the scene
//! - `svg`: SVG generation

pub mod defaults;
pub mod fonts;
pub mod geometry;
pub mod layout;
pub mod scale;
pub mod stars;
pub mod svg;
pub mod types;

// Re-export commonly used items
pub use fonts::{FontFace, FontResolver, FontSource, RemoteFonts, SystemFonts};
pub use layout::{PlateLayout, compute_layout};
pub use scale::{DisplayScale, Viewport, resolve_scale};
pub use svg::{SvgOptions, scene_to_svg};
pub use types::*;

use crate::errors::PlateError;
use crate::params::{ParameterSet, Surface};
use crate::types::{Length as Mm, Point, Size};

/// Id of the gradient referenced by the glossy overlay
pub const GLOSS_GRADIENT_ID: &str = "glossyGradient";

/// Render a plate with fonts referenced by URL.
pub fn render(params: &ParameterSet) -> Result<Scene, PlateError> {
    render_with_fonts(params, &RemoteFonts)
}

/// Render a plate, resolving the main-text font through `fonts`.
///
/// Either the whole scene is produced or an error is returned; there is no
/// partial output.
pub fn render_with_fonts(
    params: &ParameterSet,
    fonts: &dyn FontResolver,
) -> Result<Scene, PlateError> {
    let layout = compute_layout(params, fonts)?;
    let scene = compose(params, &layout);
    crate::log::debug!(primitives = scene.len(), "rendered plate scene");
    Ok(scene)
}

/// Assemble primitives in paint order. Inactive stages add nothing.
pub fn compose(params: &ParameterSet, layout: &PlateLayout) -> Scene {
    let width = layout.size.width;
    let height = layout.size.height;
    let mut scene = Scene::new(width, height);

    // 1. background
    scene.push(
        Stage::Background,
        RectPrimitive {
            origin: Point::default(),
            size: Size::new(width, height),
            corner_radius: defaults::CORNER_RADIUS,
            fill: Some(params.background_color.clone()),
            stroke: None,
        },
    );

    // 2. left strip
    if let Some(strip) = layout.left_strip {
        scene.push(
            Stage::LeftStrip,
            RectPrimitive {
                origin: Point::new(strip.x, Mm::ZERO),
                size: Size::new(strip.width, height),
                corner_radius: Mm::ZERO,
                fill: Some(params.eu_strip_color.clone()),
                stroke: None,
            },
        );
    }

    // 3. star ring
    if let Some(ring) = &layout.star_ring {
        for star in &ring.stars {
            scene.push(
                Stage::StarRing,
                PolygonPrimitive {
                    points: star.outline.to_vec(),
                    fill: defaults::STAR_FILL.to_string(),
                },
            );
        }
    }

    // 4. country code
    if let Some(label) = &layout.country_label {
        if !params.eu_country_code.is_empty() {
            scene.push(
                Stage::CountryCode,
                TextRun {
                    anchor: label.anchor,
                    content: params.eu_country_code.clone(),
                    font_family: defaults::COUNTRY_FONT_FAMILY.to_string(),
                    font_size: label.font_size,
                    font_weight: FontWeight::Numeric(defaults::COUNTRY_FONT_WEIGHT),
                    letter_spacing: Mm::ZERO,
                    fill: defaults::COUNTRY_FILL.to_string(),
                },
            );
        }
    }

    // 5. right strip
    if let Some(strip) = layout.right_strip {
        scene.push(
            Stage::RightStrip,
            RectPrimitive {
                origin: Point::new(strip.x, Mm::ZERO),
                size: Size::new(strip.width, height),
                corner_radius: Mm::ZERO,
                fill: Some(params.right_strip_color.clone()),
                stroke: None,
            },
        );
    }

    // 6. main text
    let content = params.display_text();
    if !content.is_empty() {
        scene.push(
            Stage::MainText,
            TextRun {
                anchor: layout.main_text.anchor,
                content,
                font_family: layout.font.stack.clone(),
                font_size: layout.main_text.font_size,
                font_weight: layout.font.weight,
                letter_spacing: Mm(params.letter_spacing),
                fill: params.font_color.clone(),
            },
        );
        scene.text_font = Some(layout.font.clone());
    }

    // 7. border
    if let Some(border) = layout.border {
        scene.push(
            Stage::Border,
            RectPrimitive {
                origin: border.origin,
                size: border.size,
                corner_radius: defaults::CORNER_RADIUS,
                fill: None,
                stroke: Some(Stroke {
                    color: params.border_color.clone(),
                    width: border.stroke_width,
                }),
            },
        );
    }

    // 8. glossy overlay, above everything including the border
    if params.surface == Surface::Glossy {
        scene.push(
            Stage::GlossOverlay,
            GradientOverlay {
                id: GLOSS_GRADIENT_ID.to_string(),
                origin: Point::default(),
                size: Size::new(width, height),
                stops: defaults::GLOSS_STOPS
                    .iter()
                    .map(|&(offset, color, opacity)| GradientStop {
                        offset,
                        color: color.to_string(),
                        opacity,
                    })
                    .collect(),
            },
        );
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_stages() {
        let scene = render(&ParameterSet::default()).unwrap();
        assert_eq!(
            scene.stages(),
            vec![
                Stage::Background,
                Stage::LeftStrip,
                Stage::StarRing,
                Stage::CountryCode,
                Stage::MainText,
            ]
        );
        assert_eq!(scene.stage(Stage::StarRing).count(), 12);
        assert_eq!(scene.len(), 1 + 1 + 12 + 1 + 1);
    }

    #[test]
    fn everything_on_keeps_paint_order() {
        let params = ParameterSet {
            border_active: true,
            right_strip_active: true,
            surface: Surface::Glossy,
            ..Default::default()
        };
        let scene = render(&params).unwrap();
        assert_eq!(scene.stages(), Stage::ALL.to_vec());
        let stages: Vec<Stage> = scene.items.iter().map(|i| i.stage).collect();
        assert!(stages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scene.items.last().map(|i| i.stage), Some(Stage::GlossOverlay));
    }

    #[test]
    fn inactive_stages_are_omitted() {
        let params = ParameterSet {
            eu_strip_active: false,
            text: String::new(),
            ..Default::default()
        };
        let scene = render(&params).unwrap();
        assert_eq!(scene.stages(), vec![Stage::Background]);
        assert!(scene.text_font.is_none());
    }

    #[test]
    fn empty_country_code_draws_strip_only() {
        let params = ParameterSet { eu_country_code: String::new(), ..Default::default() };
        let scene = render(&params).unwrap();
        assert_eq!(scene.stage(Stage::LeftStrip).count(), 1);
        assert_eq!(scene.stage(Stage::CountryCode).count(), 0);
    }

    #[test]
    fn country_code_is_bold_white_and_verbatim() {
        let params = ParameterSet {
            eu_country_code: "nl".into(),
            font_type: crate::params::FontType::Din,
            ..Default::default()
        };
        let scene = render(&params).unwrap();
        let Some(Primitive::Text(run)) = scene.stage(Stage::CountryCode).next() else {
            panic!("country code missing");
        };
        assert_eq!(run.content, "nl");
        assert_eq!(run.font_weight, FontWeight::Numeric(900));
        assert_eq!(run.font_family, "Inter, sans-serif");
        assert_eq!(run.fill, "white");
    }

    #[test]
    fn main_text_uses_resolved_font_at_natural_weight() {
        let scene = render_with_fonts(&ParameterSet::default(), &SystemFonts).unwrap();
        let Some(Primitive::Text(run)) = scene.stage(Stage::MainText).next() else {
            panic!("main text missing");
        };
        assert_eq!(run.content, "B AUM 123");
        assert_eq!(run.font_family, "monospace");
        assert_eq!(run.font_weight, FontWeight::Natural);
        assert_eq!(run.font_size, Mm(79.2));
    }

    #[test]
    fn gloss_overlay_covers_plate() {
        let params = ParameterSet { surface: Surface::Glossy, ..Default::default() };
        let scene = render(&params).unwrap();
        let Some(Primitive::Gradient(g)) = scene.stage(Stage::GlossOverlay).next() else {
            panic!("overlay missing");
        };
        assert_eq!(g.bounds(), scene.plate_bounds());
        assert_eq!(g.stops.len(), 3);
        assert_eq!(g.stops[0].color, "white");
        assert_eq!(g.stops[2].color, "black");
        assert_eq!(g.id, GLOSS_GRADIENT_ID);
    }

    #[test]
    fn centered_text_stays_on_the_plate() {
        for params in [
            ParameterSet::default(),
            ParameterSet { eu_strip_active: false, ..Default::default() },
            ParameterSet { border_active: true, surface: Surface::Glossy, ..Default::default() },
        ] {
            let scene = render(&params).unwrap();
            assert!(!scene.overflows(), "bounds {:?}", scene.bounds());
        }
    }

    #[test]
    fn offset_below_the_plate_overflows() {
        let params = ParameterSet { text_position_y: 40.0, ..Default::default() };
        assert!(render(&params).unwrap().overflows());
    }

    #[test]
    fn invalid_input_yields_no_scene() {
        let params = ParameterSet { height: 0.0, ..Default::default() };
        assert!(render(&params).is_err());
    }
}
