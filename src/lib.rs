//! Layout and rendering engine for vehicle registration plate previews.
//!
//! A [`ParameterSet`] describes a plate in millimeters: size, colors, the
//! optional identifier strip on the left with its star ring and country
//! code, an optional strip on the right, the main text, a border and a
//! flat or glossy surface. [`render`] turns it into a [`Scene`], an ordered
//! list of drawable primitives in plate coordinates, and [`render_svg`]
//! writes that scene as an SVG document.
//!
//! ```
//! use plateview::{ParameterSet, SvgOptions, render_svg};
//!
//! let params = ParameterSet { text: "m ab 123".into(), ..Default::default() };
//! let svg = render_svg(&params, &SvgOptions::default()).unwrap();
//! assert!(svg.contains(">M AB 123</text>"));
//! ```
//!
//! Rendering is a pure function of its inputs. Fonts are resolved through a
//! [`FontResolver`] supplied by the caller, and display pixels only enter
//! through [`resolve_scale`].

#![forbid(unsafe_code)]

pub mod errors;
pub mod log;
pub mod params;
pub mod render;
pub mod types;

pub use errors::PlateError;
pub use params::{FontType, ParameterSet, PlateSize, Status, Surface};
pub use render::{
    DisplayScale, FontFace, FontResolver, FontSource, Primitive, RemoteFonts, Scene, Stage,
    SvgOptions, SystemFonts, Viewport, render, render_with_fonts, resolve_scale, scene_to_svg,
};

/// Render a plate straight to an SVG document, fonts referenced by URL.
pub fn render_svg(params: &ParameterSet, options: &SvgOptions) -> Result<String, PlateError> {
    render_svg_with_fonts(params, &RemoteFonts, options)
}

/// Render a plate to SVG with a caller-supplied font resolver.
pub fn render_svg_with_fonts(
    params: &ParameterSet,
    fonts: &dyn FontResolver,
    options: &SvgOptions,
) -> Result<String, PlateError> {
    let scene = render_with_fonts(params, fonts)?;
    Ok(scene_to_svg(&scene, options))
}
