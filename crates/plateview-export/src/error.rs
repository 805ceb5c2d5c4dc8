use camino::Utf8PathBuf;
use miette::Diagnostic;
use plateview::PlateError;
use thiserror::Error;

/// Errors from font loading and PNG export
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Plate(#[from] PlateError),

    #[error("generated SVG could not be parsed: {0}")]
    #[diagnostic(code(plateview::export::svg))]
    Svg(String),

    #[error("cannot allocate a {width}x{height} pixel canvas")]
    #[diagnostic(
        code(plateview::export::canvas),
        help("the scale factor must be positive and the plate small enough to fit in memory")
    )]
    Canvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    #[diagnostic(code(plateview::export::encode))]
    Encode(String),

    #[error("failed to access `{path}`")]
    #[diagnostic(code(plateview::export::io))]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing resource `{resource}`")]
    #[diagnostic(
        code(plateview::export::missing_resource),
        help("place EuroPlate.ttf and DIN1451.ttf in the font directory")
    )]
    MissingResource { resource: String },
}
