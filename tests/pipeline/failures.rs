use stabkit::{convert_svg, Config, Error};
use stabkit_core::{ConversionError, DocumentError};

#[test]
fn test_malformed_transform_fails_run() {
    let svg = r#"<svg>
        <circle cx="1" cy="1" r="1"/>
        <g transform="scale(2"><circle cx="2" cy="2" r="1"/></g>
    </svg>"#;
    let err = convert_svg(svg, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion(ConversionError::MalformedTransform { .. })
    ));
}

#[test]
fn test_missing_radius_fails_run() {
    let svg = r#"<svg>
        <circle cx="1" cy="1" r="1"/>
        <circle id="broken" cx="2" cy="2"/>
    </svg>"#;
    let err = convert_svg(svg, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion(ConversionError::MissingGeometry { ref id, .. }) if id.as_deref() == Some("broken")
    ));
    assert_eq!(
        err.to_string(),
        "Missing geometry on <circle> #broken: attribute 'r'"
    );
}

#[test]
fn test_missing_radius_ignored_when_circles_disabled() {
    let svg = r#"<svg><circle cx="2" cy="2"/></svg>"#;
    let mut config = Config::default();
    config.extraction.use_circles = false;
    assert!(convert_svg(svg, &config).is_ok());
}

#[test]
fn test_not_svg() {
    let err = convert_svg("<html><body/></html>", &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Document(DocumentError::UnexpectedRoot { .. })
    ));
}
