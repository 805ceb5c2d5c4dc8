//! SVG generation
//!
//! Writes a scene as a standalone SVG document in plate millimeters
//! (`viewBox="0 0 W H"`). Primitives are emitted in paint order.

use std::fmt::Write;

use super::fonts::FontFace;
use super::scale::DisplayScale;
use super::types::*;

/// Output options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Adds `width`/`height` attributes in display pixels
    pub display: Option<DisplayScale>,
    /// Declare the main-text face with `@font-face` when it has a source
    pub font_face: bool,
    /// Put each element on its own indented line
    pub pretty: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { display: None, font_face: true, pretty: true }
    }
}

/// Growing SVG document
pub struct SvgOut {
    buf: String,
    pretty: bool,
}

impl SvgOut {
    fn new(pretty: bool) -> Self {
        Self { buf: String::new(), pretty }
    }

    /// Append one element line at nesting `depth`
    fn line(&mut self, depth: usize, content: &str) {
        if self.pretty {
            for _ in 0..depth {
                self.buf.push_str("  ");
            }
        }
        self.buf.push_str(content);
        if self.pretty {
            self.buf.push('\n');
        }
    }

    /// Append a top-level drawable element
    pub fn element(&mut self, content: &str) {
        self.line(1, content);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Format a number with at most three decimals, trailing zeros removed
pub fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escape text content and attribute values
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl WriteSvg for RectPrimitive {
    fn write_svg(&self, out: &mut SvgOut) {
        let mut el = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            fmt_num(self.origin.x.0),
            fmt_num(self.origin.y.0),
            fmt_num(self.size.w.0),
            fmt_num(self.size.h.0),
        );
        if self.corner_radius.0 > 0.0 {
            let r = fmt_num(self.corner_radius.0);
            let _ = write!(el, r#" rx="{r}" ry="{r}""#);
        }
        match &self.fill {
            Some(fill) => {
                let _ = write!(el, r#" fill="{}""#, escape_xml(fill));
            }
            None => el.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(
                el,
                r#" stroke="{}" stroke-width="{}""#,
                escape_xml(&stroke.color),
                fmt_num(stroke.width.0)
            );
        }
        el.push_str("/>");
        out.element(&el);
    }
}

impl WriteSvg for PolygonPrimitive {
    fn write_svg(&self, out: &mut SvgOut) {
        let points: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x.0), fmt_num(p.y.0)))
            .collect();
        out.element(&format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            points.join(" "),
            escape_xml(&self.fill)
        ));
    }
}

impl WriteSvg for TextRun {
    fn write_svg(&self, out: &mut SvgOut) {
        out.element(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}">{}</text>"#,
            fmt_num(self.anchor.x.0),
            fmt_num(self.anchor.y.0),
            escape_xml(&self.fill),
            escape_xml(&self.font_family),
            fmt_num(self.font_size.0),
            self.font_weight.css(),
            fmt_num(self.letter_spacing.0),
            escape_xml(&self.content),
        ));
    }
}

impl WriteSvg for GradientOverlay {
    fn write_svg(&self, out: &mut SvgOut) {
        out.element(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{})" pointer-events="none"/>"#,
            fmt_num(self.origin.x.0),
            fmt_num(self.origin.y.0),
            fmt_num(self.size.w.0),
            fmt_num(self.size.h.0),
            self.id,
        ));
    }
}

fn write_gradient_def(out: &mut SvgOut, overlay: &GradientOverlay) {
    out.line(
        2,
        &format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            overlay.id
        ),
    );
    for stop in &overlay.stops {
        out.line(
            3,
            &format!(
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                fmt_num(stop.offset * 100.0),
                escape_xml(&stop.color),
                fmt_num(stop.opacity)
            ),
        );
    }
    out.line(2, "</linearGradient>");
}

fn write_font_face(out: &mut SvgOut, face: &FontFace) {
    let Some(source) = &face.source else {
        return;
    };
    out.line(
        2,
        &format!(
            r#"<style type="text/css">@font-face {{ font-family: "{}"; src: url("{}") format("truetype"); }}</style>"#,
            escape_xml(&face.family),
            escape_xml(&source.css_url())
        ),
    );
}

/// Generate an SVG document from a scene
pub fn scene_to_svg(scene: &Scene, options: &SvgOptions) -> String {
    let mut out = SvgOut::new(options.pretty);

    let mut open = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}""#,
        fmt_num(scene.width.0),
        fmt_num(scene.height.0)
    );
    if let Some(display) = &options.display {
        let _ = write!(
            open,
            r#" width="{}" height="{}""#,
            fmt_num(display.width.0),
            fmt_num(display.height.0)
        );
    }
    open.push('>');
    out.line(0, &open);

    let gradients: Vec<&GradientOverlay> = scene
        .primitives()
        .filter_map(|p| match p {
            Primitive::Gradient(g) => Some(g),
            _ => None,
        })
        .collect();
    let font_face = scene
        .text_font
        .as_ref()
        .filter(|face| options.font_face && face.source.is_some());

    if !gradients.is_empty() || font_face.is_some() {
        out.line(1, "<defs>");
        for g in gradients {
            write_gradient_def(&mut out, g);
        }
        if let Some(face) = font_face {
            write_font_face(&mut out, face);
        }
        out.line(1, "</defs>");
    }

    for primitive in scene.primitives() {
        primitive.write_svg(&mut out);
    }

    out.line(0, "</svg>");
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FontType, ParameterSet, Surface};
    use crate::render::{RemoteFonts, SystemFonts, render_with_fonts};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(49.5), "49.5");
        assert_eq!(fmt_num(79.2), "79.2");
        assert_eq!(fmt_num(12.3456), "12.346");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-140.0), "-140");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"A<B & "C""#), "A&lt;B &amp; &quot;C&quot;");
    }

    #[test]
    fn minimal_plate_document() {
        let params = ParameterSet {
            width: 200.0,
            height: 100.0,
            eu_strip_active: false,
            text: "ab".into(),
            font_type: FontType::Din,
            ..Default::default()
        };
        let scene = render_with_fonts(&params, &SystemFonts).unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        insta::assert_snapshot!(svg.trim_end(), @r###"
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
          <rect x="0" y="0" width="200" height="100" rx="2" ry="2" fill="#FFFFFF"/>
          <text x="100" y="70" text-anchor="middle" fill="#000000" font-family="sans-serif" font-size="72" font-weight="normal" letter-spacing="0">AB</text>
        </svg>
        "###);
    }

    #[test]
    fn glossy_bordered_plate_document() {
        let params = ParameterSet {
            width: 200.0,
            height: 100.0,
            eu_strip_active: false,
            text: "K 1".into(),
            font_type: FontType::Fe,
            border_active: true,
            border_thickness: 4.0,
            surface: Surface::Glossy,
            letter_spacing: 2.5,
            ..Default::default()
        };
        let scene = render_with_fonts(&params, &SystemFonts).unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        insta::assert_snapshot!(svg.trim_end(), @r###"
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
          <defs>
            <linearGradient id="glossyGradient" x1="0%" y1="0%" x2="0%" y2="100%">
              <stop offset="0%" stop-color="white" stop-opacity="0.15"/>
              <stop offset="50%" stop-color="white" stop-opacity="0.05"/>
              <stop offset="100%" stop-color="black" stop-opacity="0.08"/>
            </linearGradient>
          </defs>
          <rect x="0" y="0" width="200" height="100" rx="2" ry="2" fill="#FFFFFF"/>
          <text x="100" y="70" text-anchor="middle" fill="#000000" font-family="monospace" font-size="72" font-weight="normal" letter-spacing="2.5">K 1</text>
          <rect x="2" y="2" width="196" height="96" rx="2" ry="2" fill="none" stroke="#000000" stroke-width="4"/>
          <rect x="0" y="0" width="200" height="100" fill="url(#glossyGradient)" pointer-events="none"/>
        </svg>
        "###);
    }

    #[test]
    fn remote_face_is_declared() {
        let scene = render_with_fonts(&ParameterSet::default(), &RemoteFonts).unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        assert!(svg.contains(r#"@font-face { font-family: "FEFontStandard";"#));
        assert!(svg.contains("EuroPlate.ttf"));
        assert!(svg.contains(r#"font-family="&quot;FEFontStandard&quot;, &quot;Cutive Mono&quot;, monospace""#));

        let bare = scene_to_svg(&scene, &SvgOptions { font_face: false, ..Default::default() });
        assert!(!bare.contains("@font-face"));
        assert!(!bare.contains("<defs>"));
    }

    #[test]
    fn display_size_attributes() {
        let scene = render_with_fonts(&ParameterSet::default(), &SystemFonts).unwrap();
        let display = crate::render::resolve_scale(
            scene.width,
            scene.height,
            crate::render::Viewport::new(800.0, 300.0),
        )
        .unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions { display: Some(display), ..Default::default() });
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 520 110" width="800" height="169.231">"#
        ));
    }

    #[test]
    fn stars_are_polygons() {
        let scene = render_with_fonts(&ParameterSet::default(), &SystemFonts).unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        assert_eq!(svg.matches("<polygon ").count(), 12);
        assert!(svg.contains(r#"<polygon points="37.125,37 37.525,38.1 38.625,38.1"#));
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let scene = render_with_fonts(&ParameterSet::default(), &SystemFonts).unwrap();
        let svg = scene_to_svg(&scene, &SvgOptions { pretty: false, ..Default::default() });
        assert!(!svg.contains('\n'));
        assert!(svg.ends_with("</svg>"));
    }
}
