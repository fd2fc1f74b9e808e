use super::*;

fn text(s: &str) -> ColorSpec {
    ColorSpec::from(s)
}

// =============================================================
// Hex
// =============================================================

#[test]
fn hex_six_digits() {
    assert_eq!(resolve(&text("#1f77b4"), 1.0), Ok(Rgba::new(0x1f, 0x77, 0xb4, 255)));
}

#[test]
fn hex_uppercase() {
    assert_eq!(resolve(&text("#FF8000"), 1.0), Ok(Rgba::rgb(255, 128, 0)));
}

#[test]
fn hex_three_digits_expands() {
    assert_eq!(resolve(&text("#f80"), 1.0), Ok(Rgba::rgb(0xff, 0x88, 0x00)));
}

#[test]
fn hex_alpha_scales() {
    assert_eq!(resolve(&text("#000000"), 0.5), Ok(Rgba::new(0, 0, 0, 127)));
    assert_eq!(resolve(&text("#000000"), 0.0), Ok(Rgba::new(0, 0, 0, 0)));
}

#[test]
fn hex_bad_length_is_invalid() {
    for bad in ["#", "#12", "#1234", "#12345", "#1234567"] {
        assert!(matches!(resolve(&text(bad), 1.0), Err(PlotError::InvalidColor(_))), "{bad}");
    }
}

#[test]
fn hex_non_hex_digit_is_invalid() {
    assert!(matches!(resolve(&text("#12345g"), 1.0), Err(PlotError::InvalidColor(_))));
    assert!(matches!(resolve(&text("#+12"), 1.0), Err(PlotError::InvalidColor(_))));
}

// =============================================================
// Names
// =============================================================

#[test]
fn css_names_resolve() {
    assert_eq!(resolve(&text("black"), 1.0), Ok(Rgba::BLACK));
    assert_eq!(resolve(&text("white"), 1.0), Ok(Rgba::WHITE));
    assert_eq!(resolve(&text("rebeccapurple"), 1.0), Ok(Rgba::rgb(0x66, 0x33, 0x99)));
}

#[test]
fn tableau_names_resolve() {
    assert_eq!(resolve(&text("tab:orange"), 1.0), Ok(Rgba::rgb(0xff, 0x7f, 0x0e)));
}

#[test]
fn names_ignore_case() {
    assert_eq!(resolve(&text("Red"), 1.0), Ok(Rgba::rgb(255, 0, 0)));
}

#[test]
fn unknown_name_is_invalid() {
    let err = resolve(&text("blurple"), 1.0);
    assert_eq!(err, Err(PlotError::InvalidColor("blurple".into())));
}

#[test]
fn invalid_color_message() {
    let msg = PlotError::InvalidColor("blurple".into()).to_string();
    assert_eq!(msg, "blurple is not a valid color");
}

// =============================================================
// Tuples
// =============================================================

#[test]
fn rgb_tuple_takes_alpha_argument() {
    assert_eq!(resolve(&ColorSpec::from((10, 20, 30)), 1.0), Ok(Rgba::new(10, 20, 30, 255)));
}

#[test]
fn rgba_tuple_keeps_own_alpha() {
    let spec = ColorSpec::Components(vec![10, 20, 30, 40]);
    assert_eq!(resolve(&spec, 1.0), Ok(Rgba::new(10, 20, 30, 40)));
}

#[test]
fn wrong_length_tuple_is_invalid() {
    for parts in [vec![], vec![1], vec![1, 2], vec![1, 2, 3, 4, 5]] {
        let spec = ColorSpec::Components(parts);
        assert!(matches!(resolve(&spec, 1.0), Err(PlotError::InvalidColor(_))));
    }
}

#[test]
fn rgba_round_trips_through_spec() {
    let c = Rgba::new(1, 2, 3, 4);
    assert_eq!(resolve(&ColorSpec::from(c), 1.0), Ok(c));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_json_components() {
    let spec: Result<ColorSpec, _> = "[255, 0, 0]".parse();
    assert_eq!(spec, Ok(ColorSpec::Components(vec![255, 0, 0])));
}

#[test]
fn parse_bad_json_is_invalid() {
    let spec: Result<ColorSpec, _> = "[300, 0, 0]".parse();
    assert!(matches!(spec, Err(PlotError::InvalidColor(_))));
}

#[test]
fn parse_text_is_trimmed() {
    let spec: Result<ColorSpec, _> = "  white ".parse();
    assert_eq!(spec, Ok(text("white")));
}

#[test]
fn spec_deserializes_untagged() {
    let specs: Result<Vec<ColorSpec>, _> = serde_json::from_str(r##"["#fff", [1, 2, 3]]"##);
    assert_eq!(specs.ok(), Some(vec![text("#fff"), ColorSpec::Components(vec![1, 2, 3])]));
}

// =============================================================
// Colormaps
// =============================================================

#[test]
fn hsv_endpoints_are_red() {
    let m = Colormap::Hsv;
    assert_eq!(m.sample(0.0), Rgba::rgb(255, 0, 0));
    assert_eq!(m.sample(1.0), Rgba::rgb(255, 0, 0));
}

#[test]
fn hsv_thirds_are_green_and_blue() {
    let m = Colormap::Hsv;
    assert_eq!(m.sample(1.0 / 3.0), Rgba::rgb(0, 255, 0));
    assert_eq!(m.sample(2.0 / 3.0), Rgba::rgb(0, 0, 255));
}

#[test]
fn gray_is_linear() {
    assert_eq!(Colormap::Gray.sample(0.0), Rgba::BLACK);
    assert_eq!(Colormap::Gray.sample(1.0), Rgba::WHITE);
    assert_eq!(Colormap::Gray.sample(0.5), Rgba::rgb(128, 128, 128));
}

#[test]
fn mapper_normalizes_and_clamps() {
    let Ok(mapper) = ColorMapper::new("gray", 10.0, 20.0, 1.0) else {
        panic!("gray should exist");
    };
    assert_eq!(mapper.map(10.0), Rgba::BLACK);
    assert_eq!(mapper.map(20.0), Rgba::WHITE);
    assert_eq!(mapper.map(-5.0), Rgba::BLACK);
    assert_eq!(mapper.map(99.0), Rgba::WHITE);
}

#[test]
fn mapper_applies_alpha() {
    let Ok(mapper) = ColorMapper::new("hsv", 0.0, 1.0, 0.5) else {
        panic!("hsv should exist");
    };
    assert_eq!(mapper.map(0.0).a, 127);
}

#[test]
fn mapper_zero_range_maps_low() {
    let Ok(mapper) = ColorMapper::new("gray", 3.0, 3.0, 1.0) else {
        panic!("gray should exist");
    };
    assert_eq!(mapper.map(3.0), Rgba::BLACK);
}

#[test]
fn unknown_colormap_is_rejected() {
    assert_eq!(
        ColorMapper::new("jet", 0.0, 1.0, 1.0),
        Err(PlotError::UnknownColormap("jet".into()))
    );
}
