//! PNG rasterization through resvg.

use camino::Utf8PathBuf;
use plateview::{
    ParameterSet, Primitive, Scene, Stage, SvgOptions, render_with_fonts, scene_to_svg,
};

use crate::{EmbeddedFonts, ExportError};

/// Pixels per plate millimeter in exported images
pub const DEFAULT_SCALE_FACTOR: f32 = 4.0;

/// Settings for PNG export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub scale_factor: f32,
    /// Directory holding `EuroPlate.ttf` / `DIN1451.ttf`
    pub font_dir: Option<Utf8PathBuf>,
    /// RGBA fill behind the plate; transparent when `None`
    pub background: Option<[u8; 4]>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { scale_factor: DEFAULT_SCALE_FACTOR, font_dir: None, background: None }
    }
}

/// An encoded image and the name it should be saved under
#[derive(Debug, Clone)]
pub struct PngExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `kennzeichen_<text>.png`, with every character outside `[A-Za-z0-9]`
/// replaced by `_`
pub fn export_file_name(text: &str) -> String {
    let safe: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("kennzeichen_{safe}.png")
}

/// Render a parameter set and encode it as PNG
pub fn export_png(params: &ParameterSet, options: &ExportOptions) -> Result<PngExport, ExportError> {
    let fonts = options
        .font_dir
        .as_deref()
        .map(EmbeddedFonts::load)
        .unwrap_or_default();
    let scene = render_with_fonts(params, &fonts)?;
    if scene.overflows() {
        tracing::warn!("plate content reaches past the plate edge and will be clipped");
    }
    let bytes = rasterize(&scene, &fonts, options)?;
    Ok(PngExport { file_name: export_file_name(&params.text), bytes })
}

/// Rasterize a scene at `options.scale_factor` pixels per millimeter.
///
/// Only the face of the main text is loaded from `fonts`. The family name
/// stored inside a font file rarely matches the CSS name used in the
/// document, so the main text run is pointed at the stored name directly.
/// Generic families stay with the system fonts, which keeps the country
/// label independent of the plate font.
pub fn rasterize(
    scene: &Scene,
    fonts: &EmbeddedFonts,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let scale = options.scale_factor;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::Canvas { width: 0, height: 0 });
    }

    let mut usvg_options = usvg::Options::default();
    let db = usvg_options.fontdb_mut();
    db.load_system_fonts();
    let svg_options = SvgOptions { display: None, font_face: false, pretty: false };
    let svg = match load_main_text_face(db, scene, fonts) {
        Some(family) => scene_to_svg(&prefer_main_text_family(scene, &family), &svg_options),
        None => scene_to_svg(scene, &svg_options),
    };

    let tree = usvg::Tree::from_str(&svg, &usvg_options).map_err(|e| ExportError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Canvas { width, height })?;

    if let Some([r, g, b, a]) = options.background {
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    tracing::debug!(width, height, scale, "rasterized plate");

    pixmap.encode_png().map_err(|e| ExportError::Encode(e.to_string()))
}

/// Load the embedded face used by the main text, returning the family name
/// stored in the font file
fn load_main_text_face(
    db: &mut usvg::fontdb::Database,
    scene: &Scene,
    fonts: &EmbeddedFonts,
) -> Option<String> {
    let face = scene.text_font.as_ref()?;
    let data = fonts.get(face.font)?;
    let before = db.len();
    db.load_font_data(data.bytes.clone());
    let family = db
        .faces()
        .skip(before)
        .find_map(|info| info.families.first().map(|(name, _)| name.clone()));
    if family.is_none() {
        tracing::warn!(font = ?face.font, "embedded font has no usable face");
    }
    family
}

/// Copy of `scene` whose main text asks for `family` ahead of its CSS stack
fn prefer_main_text_family(scene: &Scene, family: &str) -> Scene {
    let mut scene = scene.clone();
    for item in scene.items.iter_mut().filter(|item| item.stage == Stage::MainText) {
        if let Primitive::Text(run) = &mut item.primitive {
            run.font_family = format!(r#""{family}", {}"#, run.font_family);
        }
    }
    scene
}
