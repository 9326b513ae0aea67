use stabkit::{convert_svg, Config};

fn gcode(svg: &str) -> String {
    convert_svg(svg, &Config::default()).unwrap().to_gcode()
}

#[test]
fn test_a4_portrait_program() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm" viewBox="0 0 210 297">
        <g id="layer1">
            <circle id="hole1" cx="115" cy="138.5" r="1.5"/>
            <circle cx="30" cy="30" r="50"/>
        </g>
    </svg>"#;

    let expected = "\
(dw:210.000000 dh:297.000000 portrait:True papersize:A4)
G54 (A4 centre reference)
(Number of points:1)
G17 (XY plane)
G21 (millimetres)

G0 Z0 F20000
G0 X0 Y0

G0 X10.00 Y10.00
G1 Z-35
G0 Z-15

G0 Z0
G53 X-5 Y-5 (return to home)
";
    assert_eq!(gcode(svg), expected);
}

#[test]
fn test_a4_landscape_is_rotated() {
    let svg = r#"<svg width="297mm" height="210mm" viewBox="0 0 297 210">
        <circle cx="158.5" cy="105" r="1"/>
    </svg>"#;
    let out = gcode(svg);

    assert!(out.starts_with(
        "(dw:297.000000 dh:210.000000 portrait:False papersize:A4)\n(rotated)\nG54 (A4 centre reference)\n"
    ));
    assert!(out.contains("G0 X0.00 Y-10.00\n"));
}

#[test]
fn test_a3_uses_g57() {
    let svg = r#"<svg width="420mm" height="297mm" viewBox="0 0 420 297">
        <circle cx="210" cy="148.5" r="1"/>
    </svg>"#;
    let out = gcode(svg);

    assert!(out.contains("papersize:A3)\nG57 (A3 centre reference)\n"));
    assert!(!out.contains("(rotated)"));
    assert!(out.contains("G0 X0.00 Y0.00\n"));
}

#[test]
fn test_duplicate_circles_stabbed_once() {
    let svg = r#"<svg>
        <circle cx="10" cy="20" r="1"/>
        <g transform="translate(5,10)"><circle cx="5" cy="10" r="2"/></g>
    </svg>"#;
    let program = convert_svg(svg, &Config::default()).unwrap();

    assert_eq!(program.input_count(), 2);
    assert_eq!(program.dropped_duplicates(), 1);
    let out = program.to_gcode();
    assert!(out.contains("(Number of points:2)"));
    assert_eq!(out.matches("G0 X10.00 Y20.00").count(), 1);
    assert_eq!(out.matches("(dropped duplicate)").count(), 1);
}

#[test]
fn test_origin_calibration() {
    let svg = r#"<svg>
        <circle id="origin" cx="5" cy="5" r="1"/>
        <circle cx="50" cy="60" r="1"/>
    </svg>"#;
    let out = gcode(svg);

    assert!(out.starts_with("G92 X16.30 Y1.20 (origin calibration)\n(Number of points:2)\n"));
    assert!(!out.contains("G54"));
    assert!(!out.contains("G57"));
}

#[test]
fn test_empty_drawing_has_header_and_footer_only() {
    let expected = "\
G54 (A4 centre reference)
(Number of points:0)
G17 (XY plane)
G21 (millimetres)

G0 Z0 F20000
G0 X0 Y0

G0 Z0
G53 X-5 Y-5 (return to home)
";
    assert_eq!(gcode("<svg/>"), expected);
}

#[test]
fn test_hidden_and_unsupported_content_skipped() {
    let svg = r#"<svg>
        <defs><circle cx="1" cy="1" r="1"/></defs>
        <g style="display:none"><circle cx="2" cy="2" r="1"/></g>
        <rect x="0" y="0" width="3" height="3"/>
        <circle cx="4" cy="4" r="1"/>
    </svg>"#;
    let program = convert_svg(svg, &Config::default()).unwrap();
    let points: Vec<String> = program.points().map(|p| p.to_string()).collect();
    assert_eq!(points, vec!["X4.00 Y4.00"]);
}

#[test]
fn test_config_switches_sources() {
    let svg = r#"<svg>
        <path d="M 1 1 L 2 2 H 5 Z"/>
        <circle cx="4" cy="4" r="1"/>
    </svg>"#;

    let mut config = Config::default();
    config.extraction.use_paths = true;
    config.extraction.use_circles = false;
    let program = convert_svg(svg, &config).unwrap();
    let points: Vec<String> = program.points().map(|p| p.to_string()).collect();
    assert_eq!(points, vec!["X1.00 Y1.00", "X2.00 Y2.00"]);
}

#[test]
fn test_debug_annotations_and_no_diagnostics() {
    let svg = r#"<svg width="210mm" height="297mm" viewBox="0 0 210 297">
        <circle id="hole1" cx="105" cy="148.5" r="1"/>
    </svg>"#;

    let mut config = Config::default();
    config.output.debug = true;
    config.output.diagnostics = false;
    let out = convert_svg(svg, &config).unwrap().to_gcode();

    assert!(out.starts_with("G54 (A4 centre reference)\n"));
    assert!(out.contains("(hole1)\nG0 X0.00 Y0.00\n"));
}

#[test]
fn test_threshold_boundary() {
    let svg = r#"<svg>
        <circle cx="1" cy="1" r="6"/>
        <circle cx="2" cy="2" r="5.999"/>
    </svg>"#;
    let program = convert_svg(svg, &Config::default()).unwrap();
    let points: Vec<String> = program.points().map(|p| p.to_string()).collect();
    assert_eq!(points, vec!["X2.00 Y2.00"]);
}
