//! Registry-wide properties: every preset renders well-formed, finite,
//! deterministic markup whatever its guides and box look like.

use presetgeom::render::arc::arc_point;
use presetgeom::render::fill::fill_attr;
use presetgeom::render::round_rect::{self, CornerSet, CornerTreatment};
use presetgeom::render::svg::fmt_num;
use presetgeom::render::{EngineConfig, ShapeRegistry, StarRatio};
use presetgeom::{Border, FillMode, ShapeDescriptor};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a fragment inside an `<svg>` root, returning its element names.
fn element_names(fragment: &str) -> Vec<String> {
    let doc = format!("<svg xmlns='http://www.w3.org/2000/svg'>{fragment}</svg>");
    let parsed = roxmltree::Document::parse(&doc)
        .unwrap_or_else(|e| panic!("malformed fragment {fragment:?}: {e}"));
    parsed
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name().to_string())
        .collect()
}

fn assert_finite(shape_type: &str, fragment: &str) {
    for bad in ["NaN", "inf", "Infinity"] {
        assert!(
            !fragment.contains(bad),
            "{shape_type} produced {bad}: {fragment}"
        );
    }
}

#[test]
fn every_shape_renders_well_formed() {
    init_tracing();
    let registry = ShapeRegistry::new();
    for shape_type in registry.shape_types() {
        for (w, h) in [(100.0, 100.0), (240.0, 60.0), (30.0, 180.0)] {
            let d = ShapeDescriptor::new(shape_type, w, h)
                .with_fill(FillMode::solid("#5b9bd5"))
                .with_id("s1");
            let out = registry.render(&d);
            assert!(!out.is_empty(), "{shape_type} rendered nothing");
            assert_finite(shape_type, &out);
            let names = element_names(&out);
            assert!(!names.is_empty(), "{shape_type}: {out}");
            for name in names {
                assert!(
                    ["path", "polygon", "ellipse"].contains(&name.as_str()),
                    "{shape_type} emitted <{name}>"
                );
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let registry = ShapeRegistry::new();
    for shape_type in registry.shape_types() {
        let d = ShapeDescriptor::new(shape_type, 173.0, 91.0)
            .with_guide("adj", "val 31000")
            .with_guide("adj1", "val 12000")
            .with_guide("adj2", "val 7000000");
        assert_eq!(registry.render(&d), registry.render(&d), "{shape_type}");
    }
}

#[test]
fn out_of_range_guides_stay_finite() {
    init_tracing();
    let registry = ShapeRegistry::new();
    for shape_type in registry.shape_types() {
        for value in ["val -100000", "val 200000", "val 99999999999", "val -21600000"] {
            let d = ShapeDescriptor::new(shape_type, 120.0, 80.0)
                .with_guide("adj", value)
                .with_guide("adj1", value)
                .with_guide("adj2", value)
                .with_guide("adj3", value)
                .with_guide("adj4", value)
                .with_guide("adj5", value);
            let out = registry.render(&d);
            assert_finite(shape_type, &out);
            element_names(&out);
        }
    }
}

#[test]
fn degenerate_boxes_do_not_fail() {
    init_tracing();
    let registry = ShapeRegistry::new();
    for shape_type in registry.shape_types() {
        for (w, h) in [(0.0, 0.0), (0.0, 50.0), (50.0, 0.0), (-10.0, 20.0), (f64::NAN, 5.0)] {
            let out = registry.render(&ShapeDescriptor::new(shape_type, w, h));
            assert_finite(shape_type, &out);
            element_names(&out);
        }
    }
}

#[test]
fn scenario_ellipse_markup() {
    let d = ShapeDescriptor::new("ellipse", 100.0, 50.0)
        .with_fill(FillMode::solid("#ff0000"))
        .with_border(Border::new("#000000", 1.0, "none"))
        .with_id("s1");
    insta::assert_snapshot!(
        ShapeRegistry::new().render(&d),
        @"<ellipse cx='50' cy='25' rx='50' ry='25' fill='#ff0000' stroke='#000000' stroke-width='1' stroke-dasharray='none' />"
    );
}

#[test]
fn scenario_arc_point() {
    let p = arc_point(50.0, 50.0, 50.0, 50.0, 90.0);
    assert!((p.x - 50.0).abs() < 1e-6);
    assert!((p.y - 100.0).abs() < 1e-6);
}

#[test]
fn scenario_round_rect_insets() {
    let d = round_rect::build(100.0, 50.0, 0.25, 0.25, CornerTreatment::Round, CornerSet::All);
    insta::assert_snapshot!(
        d.to_string(),
        @"M12.5,0 L87.5,0 A12.5,12.5 0 0,1 100,12.5 L100,37.5 A12.5,12.5 0 0,1 87.5,50 L12.5,50 A12.5,12.5 0 0,1 0,37.5 L0,12.5 A12.5,12.5 0 0,1 12.5,0 Z"
    );
    assert_eq!(
        (CornerTreatment::from_name("round"), CornerSet::from_name("cornrAll")),
        (Some(CornerTreatment::Round), Some(CornerSet::All))
    );
}

#[test]
fn scenario_unknown_shape() {
    let registry = ShapeRegistry::new();
    assert!(registry.get("not-a-real-shape").is_none());
    let d = ShapeDescriptor::new("not-a-real-shape", 10.0, 10.0);
    assert_eq!(registry.render(&d), "");
}

#[test]
fn scenario_star5_points() {
    let out = ShapeRegistry::new().render(&ShapeDescriptor::new("star5", 100.0, 100.0));
    let points = out
        .split("points='")
        .nth(1)
        .and_then(|rest| rest.split('\'').next())
        .unwrap_or_default();
    assert_eq!(points.split(' ').count(), 10, "{out}");
}

#[test]
fn scenario_image_fill() {
    assert_eq!(fill_attr(true, false, "#ignored", "shape7"), "url(#imgPtrn_shape7)");
    assert_eq!(fill_attr(false, true, "#ignored", "shape7"), "url(#linGrd_shape7)");
}

#[test]
fn star_ratio_policy_changes_output() {
    let d = ShapeDescriptor::new("star4", 100.0, 100.0);
    let uniform = ShapeRegistry::new().render(&d);
    let preset = ShapeRegistry::with_config(
        EngineConfig::default().with_star_ratio(StarRatio::PresetDefaults),
    )
    .render(&d);
    assert_ne!(uniform, preset);
    // Outer vertices agree, inner ones move in.
    assert!(preset.contains(&format!("{},{}", fmt_num(50.0), fmt_num(0.0))));
}

#[test]
fn registry_covers_every_family() {
    let registry = ShapeRegistry::new();
    for name in [
        "ellipse",
        "triangle",
        "hexagon",
        "rect",
        "flowChartDocument",
        "roundRect",
        "snipRoundRect",
        "pie",
        "blockArc",
        "circularArrow",
        "donut",
        "noSmoking",
        "gear9",
        "bracePair",
        "star32",
        "rightArrow",
        "chevron",
    ] {
        assert!(registry.contains(name), "{name} missing");
    }
}

#[test]
fn custom_generator_overrides_builtin() {
    fn dot(_: &presetgeom::render::ShapeContext<'_>) -> String {
        "<ellipse cx='0' cy='0' rx='1' ry='1' />".to_string()
    }
    let mut registry = ShapeRegistry::new();
    let before = registry.len();
    registry.register("ellipse", dot);
    assert_eq!(registry.len(), before);
    let out = registry.render(&ShapeDescriptor::new("ellipse", 10.0, 10.0));
    assert_eq!(out, "<ellipse cx='0' cy='0' rx='1' ry='1' />");
}
