use stabkit_core::{ConversionError, DocumentError, Error};
use stabkit_designer::{GroupKind, ShapeKind, SvgImporter, ViewBox};
use std::io::Write;

#[test]
fn test_import_page_geometry() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm" viewBox="0 0 744 1052"/>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();

    assert_eq!(doc.page.view_box, Some(ViewBox::new(0.0, 0.0, 744.0, 1052.0)));
    assert_eq!(doc.page.width_mm, Some(210.0));
    assert_eq!(doc.page.height_mm, Some(297.0));
}

#[test]
fn test_import_pixel_dimensions() {
    let svg = r#"<svg width="354px" height="708"/>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();

    assert!(doc.page.view_box.is_none());
    assert!((doc.page.width_mm.unwrap() - 100.0).abs() < 1e-9);
    assert_eq!(doc.page.height_mm, Some(708.0));
}

#[test]
fn test_import_missing_dimensions() {
    let doc = SvgImporter::new()
        .import_string(r#"<svg viewBox="0 0 100 50"/>"#)
        .unwrap();
    assert_eq!(doc.page.width_mm, None);
    assert_eq!(doc.page.height_mm, None);
}

#[test]
fn test_import_element_mapping() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"
                     xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
        <sodipodi:namedview id="view"/>
        <defs><circle id="template" cx="0" cy="0" r="1"/></defs>
        <g id="layer1" transform="translate(10,0)">
            <a><circle id="c1" cx="1" cy="2" r="3"/></a>
            <switch><ellipse cx="4" cy="5" rx="1" ry="2"/></switch>
            <path d="M 0 0 L 1 1"/>
            <rect x="0" y="0" width="5" height="5"/>
        </g>
    </svg>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();
    let root = &doc.root;

    assert_eq!(root.tag(), "g");
    let tags: Vec<&str> = root.children().iter().map(|n| n.tag()).collect();
    assert_eq!(tags, vec!["sodipodi:namedview", "defs", "g"]);

    // defs content is not read
    assert!(root.children()[1].children().is_empty());

    let layer = &root.children()[2];
    assert_eq!(layer.id.as_deref(), Some("layer1"));
    assert!(layer.transform.is_some());
    let tags: Vec<&str> = layer.children().iter().map(|n| n.tag()).collect();
    assert_eq!(tags, vec!["a", "switch", "path", "rect"]);

    assert!(matches!(
        layer.children()[0].kind,
        ShapeKind::Group {
            kind: GroupKind::Anchor,
            ..
        }
    ));
    match &layer.children()[0].children()[0].kind {
        ShapeKind::Circle(c) => {
            assert_eq!((c.cx, c.cy, c.r), (Some(1.0), Some(2.0), Some(3.0)));
        }
        other => panic!("expected circle, got {:?}", other),
    }
    match &layer.children()[2].kind {
        ShapeKind::Path(p) => assert_eq!(p.anchor_vertices(), vec![(0.0, 0.0), (1.0, 1.0)]),
        other => panic!("expected path, got {:?}", other),
    }
}

#[test]
fn test_import_unparsable_radius_is_none() {
    let doc = SvgImporter::new()
        .import_string(r#"<svg><circle cx="1" cy="1" r="big"/></svg>"#)
        .unwrap();
    match &doc.root.children()[0].kind {
        ShapeKind::Circle(c) => assert_eq!(c.r, None),
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn test_import_hidden_elements() {
    let svg = r#"<svg>
        <g style="display:none"><circle cx="1" cy="1" r="1"/></g>
        <circle cx="1" cy="1" r="1" visibility="hidden"/>
        <circle cx="1" cy="1" r="1"/>
    </svg>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();
    let visible: Vec<bool> = doc.root.children().iter().map(|n| n.visible).collect();
    assert_eq!(visible, vec![false, false, true]);
}

#[test]
fn test_import_malformed_transform() {
    let err = SvgImporter::new()
        .import_string(r#"<svg><g transform="rotate(45"><circle cx="1" cy="1" r="1"/></g></svg>"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion(ConversionError::MalformedTransform { .. })
    ));
}

#[test]
fn test_import_ignores_transform_on_unsupported_elements() {
    let svg = r#"<svg>
        <defs transform="rotate(45"><circle cx="1" cy="1" r="1"/></defs>
        <metadata transform="scale("/>
        <circle cx="4" cy="4" r="1"/>
    </svg>"#;
    let doc = SvgImporter::new().import_string(svg).unwrap();

    let children = doc.root.children();
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0].kind, ShapeKind::Unsupported { ref tag } if tag == "defs"));
    assert!(children[0].transform.is_none());
    assert!(children[1].transform.is_none());
}

#[test]
fn test_import_rejects_non_svg() {
    let err = SvgImporter::new().import_string("<html/>").unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::UnexpectedRoot { ref tag }) if tag == "html"
    ));

    let err = SvgImporter::new().import_string("<svg><g></svg>").unwrap_err();
    assert!(matches!(err, Error::Document(DocumentError::InvalidXml { .. })));

    let err = SvgImporter::new()
        .import_string(r#"<svg viewBox="0 0 10"/>"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::InvalidViewBox { .. })
    ));
}

#[test]
fn test_import_file() {
    let mut file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
    write!(file, r#"<svg viewBox="0 0 210 297"><circle cx="1" cy="1" r="1"/></svg>"#).unwrap();

    let doc = SvgImporter::new().import_file(file.path()).unwrap();
    assert_eq!(doc.root.children().len(), 1);

    let err = SvgImporter::new()
        .import_file(file.path().with_extension("missing"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
