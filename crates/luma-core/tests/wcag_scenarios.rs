use luma_core::{Color, Level, contrast_ratio, evaluate, luminance, parse_hex, to_hex};

const EPSILON: f64 = 1e-6;

fn hex(text: &str) -> Color {
    parse_hex(text).expect("test color should parse")
}

#[test]
fn black_text_on_white_passes_everything() {
    let report = evaluate(hex("#000000"), hex("#FFFFFF"));

    assert!((report.ratio - 21.0).abs() < EPSILON);
    assert_eq!(report.ratio_text(), "21.00:1");
    assert!(report.aa_normal);
    assert!(report.aa_large);
    assert!(report.aaa_normal);
    assert!(report.aaa_large);
    assert_eq!(report.level, Level::Aaa);
}

#[test]
fn mid_gray_on_white_passes_large_text_only() {
    let report = evaluate(hex("#777777"), hex("#FFFFFF"));

    assert_eq!(report.ratio_text(), "4.48:1");
    assert!(!report.aa_normal);
    assert!(report.aa_large);
    assert!(!report.aaa_normal);
    assert!(!report.aaa_large);
    assert_eq!(report.level, Level::Fail);
}

#[test]
fn ratio_properties_hold_across_a_palette() {
    let texts = ["#000000", "#FFFFFF", "#777777", "#FF0000", "#1E293B"];
    let palette = texts.map(hex);

    for &a in &palette {
        assert_eq!(contrast_ratio(a, a), 1.0);
        for &b in &palette {
            let ab = contrast_ratio(a, b);
            assert_eq!(ab, contrast_ratio(b, a));
            assert!((1.0..=21.0 + EPSILON).contains(&ab), "{a} vs {b}: {ab}");
        }
    }
}

#[test]
fn luminance_and_hex_endpoints() {
    assert_eq!(luminance(hex("#000")), 0.0);
    assert!((luminance(hex("#fff")) - 1.0).abs() < EPSILON);
    assert_eq!(to_hex(Color::new(1.0, 0.0, 0.0)), "#FF0000");
    assert_eq!(to_hex(Color::new(0.0, 0.0, 0.0)), "#000000");
    assert_eq!(to_hex(Color::new(1.0, 1.0, 1.0)), "#FFFFFF");
}

#[test]
fn well_known_pairs_match_reference_ratios() {
    // #767676 is the lightest gray that still passes AA on white.
    let report = evaluate(hex("#767676"), hex("#FFFFFF"));
    assert!((report.ratio - 4.54).abs() < 0.01);
    assert_eq!(report.level, Level::Aa);

    let report = evaluate(hex("#A1A1AA"), hex("#09090B"));
    assert!((report.ratio - 7.76).abs() < 0.05);
    assert_eq!(report.level, Level::Aaa);
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let report = evaluate(Color::BLACK, Color::WHITE);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["level"], "aaa");
    assert_eq!(json["aaNormal"], true);
    assert_eq!(json["aaaLarge"], true);
    assert_eq!(json["luminanceForeground"], 0.0);
    assert_eq!(json["foregroundHex"], "#000000");
    assert_eq!(json["backgroundHex"], "#FFFFFF");
}
