//! Font files loaded from disk and embedded as base64.

use base64::Engine;
use camino::Utf8Path;
use plateview::{FontFace, FontResolver, FontSource, FontType};

use crate::ExportError;

/// File holding the FE face
pub const FE_FILE: &str = "EuroPlate.ttf";
/// File holding the DIN 1451 face
pub const DIN_FILE: &str = "DIN1451.ttf";
pub const FONT_MIME: &str = "font/ttf";

pub fn font_file_name(font: FontType) -> &'static str {
    match font {
        FontType::Fe => FE_FILE,
        FontType::Din => DIN_FILE,
    }
}

/// Raw font bytes plus their base64 form
#[derive(Debug, Clone, PartialEq)]
pub struct FontData {
    pub bytes: Vec<u8>,
    pub base64: String,
}

impl FontData {
    pub fn new(bytes: Vec<u8>) -> Self {
        let base64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Self { bytes, base64 }
    }
}

/// Resolver that embeds locally available font files into the document.
///
/// A face whose file is missing resolves to its generic family instead, so
/// export always proceeds.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedFonts {
    fe: Option<FontData>,
    din: Option<FontData>,
}

impl EmbeddedFonts {
    /// Load whatever faces `dir` holds. Missing or unreadable files are
    /// logged and skipped.
    pub fn load(dir: &Utf8Path) -> Self {
        let mut fonts = Self::default();
        for font in [FontType::Fe, FontType::Din] {
            match read_font(dir, font) {
                Ok(data) => fonts.set(font, data),
                Err(e) => tracing::warn!(
                    ?font,
                    error = %e,
                    "font unavailable, falling back to generic family"
                ),
            }
        }
        fonts
    }

    /// Load both faces from `dir`, failing on the first one that is missing
    pub fn load_strict(dir: &Utf8Path) -> Result<Self, ExportError> {
        let mut fonts = Self::default();
        for font in [FontType::Fe, FontType::Din] {
            fonts.set(font, read_font(dir, font)?);
        }
        Ok(fonts)
    }

    pub fn with_font(mut self, font: FontType, bytes: Vec<u8>) -> Self {
        self.set(font, FontData::new(bytes));
        self
    }

    pub fn get(&self, font: FontType) -> Option<&FontData> {
        match font {
            FontType::Fe => self.fe.as_ref(),
            FontType::Din => self.din.as_ref(),
        }
    }

    fn set(&mut self, font: FontType, data: FontData) {
        match font {
            FontType::Fe => self.fe = Some(data),
            FontType::Din => self.din = Some(data),
        }
    }
}

impl FontResolver for EmbeddedFonts {
    fn resolve(&self, font: FontType) -> FontFace {
        match self.get(font) {
            Some(data) => FontFace::with_source(
                font,
                FontSource::Embedded {
                    mime: FONT_MIME.to_string(),
                    base64: data.base64.clone(),
                },
            ),
            None => FontFace::generic(font),
        }
    }
}

fn read_font(dir: &Utf8Path, font: FontType) -> Result<FontData, ExportError> {
    let path = dir.join(font_file_name(font));
    match std::fs::read(&path) {
        Ok(bytes) if bytes.is_empty() => Err(ExportError::MissingResource {
            resource: path.into_string(),
        }),
        Ok(bytes) => {
            tracing::debug!(%path, len = bytes.len(), "loaded font");
            Ok(FontData::new(bytes))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ExportError::MissingResource {
            resource: path.into_string(),
        }),
        Err(source) => Err(ExportError::Io { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_files_resolve_to_generic_faces() {
        let (_guard, dir) = temp_dir();
        let fonts = EmbeddedFonts::load(&dir);
        assert!(fonts.get(FontType::Fe).is_none());
        assert_eq!(fonts.resolve(FontType::Fe), FontFace::generic(FontType::Fe));
        assert_eq!(fonts.resolve(FontType::Din).stack, "sans-serif");
    }

    #[test]
    fn present_file_is_embedded() {
        let (_guard, dir) = temp_dir();
        std::fs::write(dir.join(DIN_FILE), b"\x00\x01\x00\x00").unwrap();
        let fonts = EmbeddedFonts::load(&dir);

        assert!(fonts.get(FontType::Fe).is_none());
        let face = fonts.resolve(FontType::Din);
        assert_eq!(face.family, "DIN1451Font");
        assert_eq!(
            face.source,
            Some(FontSource::Embedded { mime: "font/ttf".into(), base64: "AAEAAA==".into() })
        );
    }

    #[test]
    fn strict_load_reports_missing_face() {
        let (_guard, dir) = temp_dir();
        std::fs::write(dir.join(FE_FILE), b"fe").unwrap();
        let err = EmbeddedFonts::load_strict(&dir).unwrap_err();
        match err {
            ExportError::MissingResource { resource } => assert!(resource.ends_with(DIN_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_counts_as_missing() {
        let (_guard, dir) = temp_dir();
        std::fs::write(dir.join(FE_FILE), b"").unwrap();
        assert!(EmbeddedFonts::load(&dir).get(FontType::Fe).is_none());
    }

    #[test]
    fn builder_embeds_bytes() {
        let fonts = EmbeddedFonts::default().with_font(FontType::Fe, b"abc".to_vec());
        assert_eq!(fonts.get(FontType::Fe).map(|d| d.base64.as_str()), Some("YWJj"));
    }
}
