//! End-to-end checks of the public rendering API

use plateview::render::{RectPrimitive, Stroke, compute_layout};
use plateview::types::{Length as Mm, Point, Size};
use plateview::{
    ParameterSet, PlateError, Primitive, RemoteFonts, Stage, Surface, SystemFonts, Viewport,
    render, resolve_scale,
};

fn no_strips() -> ParameterSet {
    ParameterSet { eu_strip_active: false, right_strip_active: false, ..Default::default() }
}

#[test]
fn defaults_scenario() {
    let params = ParameterSet::default();
    let layout = compute_layout(&params, &RemoteFonts).unwrap();
    assert_eq!(layout.left_strip_width, Mm(49.5));

    let ring = layout.star_ring.as_ref().unwrap();
    assert_eq!(ring.center, Point::new(Mm(24.75), Mm(38.5)));
    assert_eq!(ring.radius, Mm(12.375));
    assert_eq!(ring.stars.len(), 12);

    assert_eq!(layout.main_text.anchor, Point::new(Mm(284.75), Mm(77.0)));
}

#[test]
fn zero_width_scenario() {
    let err = render(&ParameterSet { width: 0.0, ..Default::default() }).unwrap_err();
    assert!(matches!(err, PlateError::InvalidDimension { field: "width", .. }));
}

#[test]
fn border_scenario() {
    let params = ParameterSet { border_active: true, border_thickness: 5.0, ..Default::default() };
    let scene = render(&params).unwrap();
    let Some(Primitive::Rect(border)) = scene.stage(Stage::Border).next() else {
        panic!("no border");
    };
    assert_eq!(
        border,
        &RectPrimitive {
            origin: Point::new(Mm(2.5), Mm(2.5)),
            size: Size::new(Mm(515.0), Mm(105.0)),
            corner_radius: Mm(2.0),
            fill: None,
            stroke: Some(Stroke { color: "#000000".into(), width: Mm(5.0) }),
        }
    );
}

#[test]
fn both_strips_scenario() {
    let base = compute_layout(&no_strips(), &SystemFonts).unwrap();
    let both = compute_layout(
        &ParameterSet {
            eu_strip_active: true,
            right_strip_active: true,
            right_strip_width: 20.0,
            ..Default::default()
        },
        &SystemFonts,
    )
    .unwrap();
    let shift = both.main_text.anchor.x - base.main_text.anchor.x;
    assert_eq!(shift, both.left_strip_width / 2.0 - Mm(10.0));
    assert_eq!(both.main_text.anchor.y, base.main_text.anchor.y);
}

#[test]
fn renders_are_deterministic() {
    let variants = [
        ParameterSet::default(),
        ParameterSet { surface: Surface::Glossy, border_active: true, ..Default::default() },
        ParameterSet { right_strip_active: true, text: "xy 9".into(), ..no_strips() },
    ];
    for params in &variants {
        assert_eq!(render(params).unwrap(), render(params).unwrap());
    }
}

#[test]
fn star_ring_is_always_twelve() {
    for height in [30.0, 110.0, 200.0, 1234.5] {
        let scene = render(&ParameterSet { height, ..Default::default() }).unwrap();
        assert_eq!(scene.stage(Stage::StarRing).count(), 12, "height {height}");
    }
}

#[test]
fn scale_preserves_aspect() {
    let cases = [(520.0, 110.0), (180.0, 200.0), (340.0, 202.0), (1.0, 1000.0)];
    let viewports = [Viewport::new(800.0, 300.0), Viewport::for_container(375.0)];
    for (w, h) in cases {
        for viewport in viewports {
            let display = resolve_scale(Mm(w), Mm(h), viewport).unwrap();
            let ratio = display.width.0 / display.height.0;
            assert!((ratio - w / h).abs() < 1e-9 * (w / h), "{w}x{h} in {viewport:?}");
            assert!(display.width.0 <= viewport.max_width + 1e-9);
            assert!(display.height.0 <= viewport.max_height + 1e-9);
        }
    }
}

#[test]
fn narrow_container_drops_padding() {
    let display = resolve_scale(Mm(520.0), Mm(110.0), Viewport::for_container(375.0)).unwrap();
    assert!((display.width.0 - 343.0).abs() < 1e-9);
}

#[test]
fn offset_text_may_leave_the_plate() {
    let params = ParameterSet { text_position_x: -400.0, ..no_strips() };
    let scene = render(&params).unwrap();
    assert!(scene.overflows());
    assert!(!render(&no_strips()).unwrap().overflows());
}

#[test]
fn parameter_files_use_form_field_names() {
    let params: ParameterSet = serde_json::from_str(
        r#"{
            "width": 340,
            "height": 202,
            "fontType": "din",
            "surface": "glossy",
            "euCountryCode": "F",
            "rightStripActive": true,
            "status": "guessed"
        }"#,
    )
    .unwrap();
    assert_eq!(params.width, 340.0);
    assert_eq!(params.eu_country_code, "F");
    assert_eq!(params.text, ParameterSet::default().text);

    let scene = render(&params).unwrap();
    assert_eq!(scene.stages(), Stage::ALL.iter().copied().filter(|s| *s != Stage::Border).collect::<Vec<_>>());
}
