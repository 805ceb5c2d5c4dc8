//! The plate parameter set: the single input of a render call.

use serde::{Deserialize, Serialize};

use crate::errors::PlateError;
use crate::types::Length;

/// Plate surface finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Matte, no overlay
    #[default]
    #[serde(alias = "glatt")]
    Flat,
    /// Slight sheen, rendered as a translucent gradient above everything else
    #[serde(alias = "leicht glänzend")]
    Glossy,
}

/// Typeface used for the registration text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    /// FE-Schrift, the tamper-resistant standard plate face
    #[default]
    #[serde(alias = "FE-Schrift (Standard)")]
    Fe,
    /// DIN 1451 Mittelschrift
    #[serde(alias = "DIN 1451")]
    Din,
}

/// How sure the caller is about the parameters (advisory only, never drawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[serde(alias = "sicher")]
    Certain,
    #[serde(alias = "unsicher")]
    Uncertain,
    #[serde(alias = "geraten")]
    Guessed,
}

/// Longest country code the left strip can hold
pub const MAX_COUNTRY_CODE_CHARS: usize = 3;

/// Complete description of one plate's appearance.
///
/// Field names serialize in camelCase so parameter files written for the web
/// form load unchanged, including its German enum values. Serialization
/// always writes the English names. Missing fields fall back to
/// [`ParameterSet::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// Plate width in mm
    pub width: f64,
    /// Plate height in mm
    pub height: f64,

    pub background_color: String,
    pub surface: Surface,

    pub border_active: bool,
    pub border_color: String,
    pub border_thickness: f64,

    pub font_type: FontType,
    pub font_color: String,
    pub letter_spacing: f64,

    pub text: String,
    pub force_uppercase: bool,
    /// Horizontal offset from the strip-corrected center (0 = centered)
    pub text_position_x: f64,
    /// Vertical offset from the default baseline
    pub text_position_y: f64,

    pub eu_strip_active: bool,
    pub eu_strip_color: String,
    pub eu_country_code: String,
    pub eu_stars_active: bool,

    pub right_strip_active: bool,
    pub right_strip_color: String,
    pub right_strip_width: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 110.0,
            background_color: "#FFFFFF".to_string(),
            surface: Surface::Flat,
            border_active: false,
            border_color: "#000000".to_string(),
            border_thickness: 2.0,
            font_type: FontType::Fe,
            font_color: "#000000".to_string(),
            letter_spacing: 0.0,
            text: "B AUM 123".to_string(),
            force_uppercase: true,
            text_position_x: 0.0,
            text_position_y: 0.0,
            eu_strip_active: true,
            eu_strip_color: "#003399".to_string(),
            eu_country_code: "D".to_string(),
            eu_stars_active: true,
            right_strip_active: false,
            right_strip_color: "#FF0000".to_string(),
            right_strip_width: 20.0,
            status: None,
        }
    }
}

/// Plate dimensions that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSize {
    pub width: Length,
    pub height: Length,
}

impl ParameterSet {
    /// The text exactly as it will be drawn
    pub fn display_text(&self) -> String {
        if self.force_uppercase {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        }
    }

    /// Whether the star ring will be drawn
    pub fn stars_visible(&self) -> bool {
        self.eu_strip_active && self.eu_stars_active
    }

    /// Validated plate dimensions.
    pub fn plate_size(&self) -> Result<PlateSize, PlateError> {
        let width = Length::try_positive(self.width)
            .map_err(|e| PlateError::dimension("width", self.width, e))?;
        let height = Length::try_positive(self.height)
            .map_err(|e| PlateError::dimension("height", self.height, e))?;
        Ok(PlateSize { width, height })
    }

    /// Check every documented constraint.
    ///
    /// Out-of-range values are rejected, never clamped. Fields gated by an
    /// inactive flag are not checked. Strips that overlap each other are
    /// accepted as-is.
    pub fn validate(&self) -> Result<PlateSize, PlateError> {
        let size = self.plate_size()?;

        finite("letterSpacing", self.letter_spacing)?;
        finite("textPositionX", self.text_position_x)?;
        finite("textPositionY", self.text_position_y)?;

        color("backgroundColor", &self.background_color)?;
        color("fontColor", &self.font_color)?;

        if self.border_active {
            color("borderColor", &self.border_color)?;
            let limit = size.width.min(size.height).raw() / 2.0;
            let t = self.border_thickness;
            if !t.is_finite() || t < 0.0 || t >= limit {
                return Err(PlateError::range(
                    "borderThickness",
                    t,
                    format!("0 <= t < {limit}"),
                ));
            }
        }

        if self.eu_strip_active {
            color("euStripColor", &self.eu_strip_color)?;
            let chars = self.eu_country_code.chars().count();
            if chars > MAX_COUNTRY_CODE_CHARS {
                return Err(PlateError::range(
                    "euCountryCode",
                    &self.eu_country_code,
                    format!("at most {MAX_COUNTRY_CODE_CHARS} characters"),
                ));
            }
        }

        if self.right_strip_active {
            color("rightStripColor", &self.right_strip_color)?;
            let w = self.right_strip_width;
            if !w.is_finite() || w < 0.0 || w >= size.width.raw() {
                return Err(PlateError::range(
                    "rightStripWidth",
                    w,
                    format!("0 <= w < {}", size.width.raw()),
                ));
            }
        }

        Ok(size)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), PlateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlateError::range(field, value, "a finite number"))
    }
}

fn color(field: &'static str, value: &str) -> Result<(), PlateError> {
    if value.trim().is_empty() {
        Err(PlateError::range(field, "\"\"", "a non-empty color string"))
    } else {
        Ok(())
    }
}
