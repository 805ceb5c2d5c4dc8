//! Export collaborator for plateview: embeds font data and rasterizes scenes
//! to PNG.
//!
//! The engine itself never touches the filesystem or the network. This crate
//! reads font files from a local directory, hands them to the engine through
//! [`EmbeddedFonts`], and renders the resulting scene with resvg.

mod error;
mod fonts;
mod raster;

pub use error::ExportError;
pub use fonts::{DIN_FILE, EmbeddedFonts, FE_FILE, FONT_MIME, FontData, font_file_name};
pub use raster::{
    DEFAULT_SCALE_FACTOR, ExportOptions, PngExport, export_file_name, export_png, rasterize,
};
