use stabkit_core::{AffineTransform, PaperClass};
use stabkit_designer::{page, ExtractionOptions, ShapeWalker, SvgImporter};

fn extract(svg: &str, options: &ExtractionOptions) -> Vec<String> {
    let doc = SvgImporter::new().import_string(svg).unwrap();
    let setup = page::resolve(&doc.page, doc.root.transform.as_ref());
    ShapeWalker::children_of(&doc.root, setup.seed, options)
        .collect_points()
        .unwrap()
        .points
        .iter()
        .map(|p| p.to_string())
        .collect()
}

#[test]
fn test_a4_portrait_markers() {
    let svg = r#"<svg width="210mm" height="297mm" viewBox="0 0 210 297">
        <circle cx="105" cy="148.5" r="2"/>
        <circle cx="115" cy="138.5" r="2"/>
        <circle cx="50" cy="50" r="20"/>
    </svg>"#;
    assert_eq!(
        extract(svg, &ExtractionOptions::default()),
        vec!["X0.00 Y0.00", "X10.00 Y10.00"]
    );
}

#[test]
fn test_a4_landscape_is_rotated() {
    let svg = r#"<svg width="297mm" height="210mm" viewBox="0 0 297 210">
        <circle cx="158.5" cy="105" r="2"/>
    </svg>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();
    let setup = page::resolve(&doc.page, None);
    assert_eq!(setup.paper_class, PaperClass::A4);
    assert_eq!(setup.rotation_degrees, 90.0);

    assert_eq!(extract(svg, &ExtractionOptions::default()), vec!["X0.00 Y-10.00"]);
}

#[test]
fn test_root_transform_applied_once() {
    let svg = r#"<svg transform="translate(5,0)">
        <circle cx="1" cy="1" r="1"/>
    </svg>"#;
    assert_eq!(extract(svg, &ExtractionOptions::default()), vec!["X6.00 Y1.00"]);
}

#[test]
fn test_paths_and_circles_together() {
    let svg = r#"<svg>
        <path d="M 0 0 h 10 l 0 10 z"/>
        <circle cx="3" cy="4" r="1" transform="scale(2)"/>
    </svg>"#;
    let options = ExtractionOptions {
        use_paths: true,
        ..Default::default()
    };
    assert_eq!(
        extract(svg, &options),
        vec!["X0.00 Y0.00", "X10.00 Y10.00", "X6.00 Y8.00"]
    );
}

#[test]
fn test_seed_identity_without_view_box() {
    let doc = SvgImporter::new().import_string("<svg/>").unwrap();
    let setup = page::resolve(&doc.page, doc.root.transform.as_ref());
    assert_eq!(setup.seed, AffineTransform::identity());
}
