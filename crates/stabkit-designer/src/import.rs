//! # SVG Import
//!
//! Loads an SVG document into the read-only shape tree consumed by the
//! walker.
//!
//! Only the elements the converter can use are modelled: groups (`g`, `a`,
//! `switch`), `path`, `circle` and `ellipse`. Every other element, including
//! `defs`, `metadata`, editor extensions such as `sodipodi:namedview`, and
//! `foreignObject`, becomes [`ShapeKind::Unsupported`] and its content is not
//! read.
//!
//! Transform attributes are parsed here, so a malformed transform fails the
//! import before any point is extracted.

use crate::model::{
    CircleGeometry, EllipseGeometry, GroupKind, PathGeometry, ShapeKind, ShapeNode,
};
use crate::page::{PageGeometry, ViewBox};
use roxmltree::{Document, Node};
use stabkit_core::{length_to_mm, AffineTransform, DocumentError, Result};
use std::path::Path;
use std::str::FromStr;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A loaded document
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    /// The `<svg>` root as a group node carrying the root transform
    pub root: ShapeNode,
    pub page: PageGeometry,
}

/// SVG importer
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgImporter;

impl SvgImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import an SVG document from a file
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportedDocument> {
        let path = path.as_ref();
        tracing::debug!("Importing SVG from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.import_string(&content)
    }

    /// Import an SVG document from string content
    pub fn import_string(&self, svg_content: &str) -> Result<ImportedDocument> {
        let document = Document::parse(svg_content).map_err(|e| DocumentError::InvalidXml {
            reason: e.to_string(),
        })?;

        let root = document.root_element();
        if !in_svg_namespace(&root) || root.tag_name().name() != "svg" {
            return Err(DocumentError::UnexpectedRoot {
                tag: root.tag_name().name().to_string(),
            }
            .into());
        }

        let page = read_page(&root)?;
        let root = self.convert_node(&root)?;

        tracing::debug!("Imported {} nodes", root.node_count());
        Ok(ImportedDocument { root, page })
    }

    fn convert_node(&self, node: &Node) -> Result<ShapeNode> {
        let tag = node.tag_name();
        let name = if in_svg_namespace(node) { tag.name() } else { "" };

        let kind = match name {
            "svg" | "g" => self.convert_group(node, GroupKind::Group)?,
            "a" => self.convert_group(node, GroupKind::Anchor)?,
            "switch" => self.convert_group(node, GroupKind::Switch)?,
            "path" => {
                ShapeKind::Path(PathGeometry::parse(node.attribute("d").unwrap_or_default()))
            }
            "circle" => ShapeKind::Circle(CircleGeometry {
                cx: number_attribute(node, "cx"),
                cy: number_attribute(node, "cy"),
                r: number_attribute(node, "r"),
            }),
            "ellipse" => ShapeKind::Ellipse(EllipseGeometry {
                cx: number_attribute(node, "cx"),
                cy: number_attribute(node, "cy"),
                rx: number_attribute(node, "rx"),
                ry: number_attribute(node, "ry"),
            }),
            _ => ShapeKind::Unsupported {
                tag: qualified_name(node),
            },
        };

        let mut shape = ShapeNode::from_kind(kind);
        shape.id = node.attribute("id").map(str::to_string);
        shape.visible = is_visible(node);

        let walked = !matches!(shape.kind, ShapeKind::Unsupported { .. });
        if let Some(text) = node.attribute("transform").filter(|_| walked) {
            let transform = AffineTransform::parse(text)?;
            if !transform.is_identity() {
                shape.transform = Some(transform);
            }
        }

        Ok(shape)
    }

    fn convert_group(&self, node: &Node, kind: GroupKind) -> Result<ShapeKind> {
        let children = node
            .children()
            .filter(Node::is_element)
            .map(|child| self.convert_node(&child))
            .collect::<Result<Vec<_>>>()?;
        Ok(ShapeKind::Group { kind, children })
    }
}

/// Elements in the SVG namespace, or in no namespace at all
fn in_svg_namespace(node: &Node) -> bool {
    matches!(node.tag_name().namespace(), None | Some(SVG_NAMESPACE))
}

fn qualified_name(node: &Node) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|ns| node.lookup_prefix(ns)) {
        Some(prefix) if tag.namespace() != Some(SVG_NAMESPACE) => {
            format!("{}:{}", prefix, tag.name())
        }
        _ => tag.name().to_string(),
    }
}

fn number_attribute(node: &Node, name: &str) -> Option<f64> {
    let value = node.attribute(name)?;
    svgtypes::Number::from_str(value.trim()).ok().map(|n| n.0)
}

fn read_page(root: &Node) -> Result<PageGeometry> {
    let view_box = root.attribute("viewBox").map(parse_view_box).transpose()?;

    Ok(PageGeometry {
        view_box,
        width_mm: root.attribute("width").map(length_to_mm),
        height_mm: root.attribute("height").map(length_to_mm),
    })
}

fn parse_view_box(value: &str) -> Result<ViewBox> {
    let invalid = || DocumentError::InvalidViewBox {
        value: value.to_string(),
    };

    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(length_to_mm)
        .collect();

    let [x, y, width, height] = parts[..] else {
        return Err(invalid().into());
    };
    if width <= 0.0 || height <= 0.0 {
        return Err(invalid().into());
    }

    Ok(ViewBox::new(x, y, width, height))
}

fn is_visible(node: &Node) -> bool {
    let hides = |name: &str, value: &str| match name {
        "display" => value == "none",
        "visibility" => value == "hidden" || value == "collapse",
        _ => false,
    };

    let attribute_hidden = ["display", "visibility"].iter().any(|name| {
        node.attribute(*name)
            .is_some_and(|value| hides(name, value.trim()))
    });
    if attribute_hidden {
        return false;
    }

    let style_hidden = node.attribute("style").is_some_and(|style| {
        style.split(';').any(|declaration| {
            declaration
                .split_once(':')
                .is_some_and(|(name, value)| hides(name.trim(), value.trim()))
        })
    });
    !style_hidden
}
