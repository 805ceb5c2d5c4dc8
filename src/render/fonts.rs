//! Font selection.
//!
//! The engine only needs a family name and a weight policy. Where the glyph
//! data lives (a URL for live previews, an inline blob for exported files)
//! is decided by a [`FontResolver`] supplied by the caller.

use crate::params::FontType;

use super::types::FontWeight;

pub const FE_FAMILY: &str = "FEFontStandard";
pub const FE_STACK: &str = r#""FEFontStandard", "Cutive Mono", monospace"#;
pub const FE_URL: &str = "https://raw.githubusercontent.com/LucaGauntDA/fe/main/EuroPlate.ttf";

pub const DIN_FAMILY: &str = "DIN1451Font";
pub const DIN_STACK: &str = r#""DIN1451Font", "Roboto Condensed", sans-serif"#;
pub const DIN_URL: &str = "https://raw.githubusercontent.com/LucaGauntDA/fe/main/DIN1451.ttf";

/// Where a font's glyph data comes from
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// Fetched by the consumer (browser preview)
    Url(String),
    /// Inlined into the document as base64
    Embedded { mime: String, base64: String },
}

impl FontSource {
    /// Value for a CSS `src: url(...)` declaration
    pub fn css_url(&self) -> String {
        match self {
            FontSource::Url(url) => url.clone(),
            FontSource::Embedded { mime, base64 } => format!("data:{mime};base64,{base64}"),
        }
    }
}

/// A resolved font descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct FontFace {
    /// The selection this face was resolved for
    pub font: FontType,
    /// Name declared by `@font-face`, if the face carries its own data
    pub family: String,
    /// Full CSS `font-family` list, preferred face first
    pub stack: String,
    pub weight: FontWeight,
    pub source: Option<FontSource>,
}

impl FontFace {
    /// Face with a declared family and a data source
    pub fn with_source(font: FontType, source: FontSource) -> Self {
        let (family, stack) = match font {
            FontType::Fe => (FE_FAMILY, FE_STACK),
            FontType::Din => (DIN_FAMILY, DIN_STACK),
        };
        Self {
            font,
            family: family.to_string(),
            stack: stack.to_string(),
            weight: FontWeight::Natural,
            source: Some(source),
        }
    }

    /// Generic substitute used when no font data is available
    pub fn generic(font: FontType) -> Self {
        let family = match font {
            FontType::Fe => "monospace",
            FontType::Din => "sans-serif",
        };
        Self {
            font,
            family: family.to_string(),
            stack: family.to_string(),
            weight: FontWeight::Natural,
            source: None,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.source.is_none()
    }
}

/// Maps a [`FontType`] to a face. Implementations must not block on I/O
/// during a render call; load anything they need beforehand.
pub trait FontResolver {
    fn resolve(&self, font: FontType) -> FontFace;
}

/// Faces referenced by URL, for consumers that load fonts themselves
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteFonts;

impl FontResolver for RemoteFonts {
    fn resolve(&self, font: FontType) -> FontFace {
        let url = match font {
            FontType::Fe => FE_URL,
            FontType::Din => DIN_URL,
        };
        FontFace::with_source(font, FontSource::Url(url.to_string()))
    }
}

/// Generic families only; nothing to fetch or embed
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFonts;

impl FontResolver for SystemFonts {
    fn resolve(&self, font: FontType) -> FontFace {
        FontFace::generic(font)
    }
}

impl<R: FontResolver + ?Sized> FontResolver for &R {
    fn resolve(&self, font: FontType) -> FontFace {
        (**self).resolve(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_faces_keep_natural_weight() {
        for font in [FontType::Fe, FontType::Din] {
            let face = RemoteFonts.resolve(font);
            assert_eq!(face.weight, FontWeight::Natural);
            assert!(matches!(face.source, Some(FontSource::Url(_))));
        }
    }

    #[test]
    fn remote_families() {
        let fe = RemoteFonts.resolve(FontType::Fe);
        assert_eq!(fe.family, "FEFontStandard");
        assert!(fe.stack.ends_with("monospace"));
        assert_eq!(fe.source.unwrap().css_url(), FE_URL);

        let din = RemoteFonts.resolve(FontType::Din);
        assert_eq!(din.family, "DIN1451Font");
        assert!(din.stack.ends_with("sans-serif"));
    }

    #[test]
    fn system_faces_are_generic() {
        assert_eq!(SystemFonts.resolve(FontType::Fe).stack, "monospace");
        assert_eq!(SystemFonts.resolve(FontType::Din).font, FontType::Din);
        assert!(SystemFonts.resolve(FontType::Din).is_generic());
    }

    #[test]
    fn embedded_source_is_data_url() {
        let src = FontSource::Embedded { mime: "font/ttf".into(), base64: "AAEA".into() };
        assert_eq!(src.css_url(), "data:font/ttf;base64,AAEA");
    }
}
