//! The conversion pipeline: document in, stab program out.

use stabkit_camtools::{StabPressGenerator, ToolpathProgram};
use stabkit_core::Result;
use stabkit_designer::{page, ImportedDocument, ShapeWalker, SvgImporter};
use stabkit_settings::Config;

/// Convert a loaded document into a stab program.
///
/// Nothing is assembled unless every point was extracted: the first
/// conversion error aborts the run.
pub fn convert_document(document: &ImportedDocument, config: &Config) -> Result<ToolpathProgram> {
    let setup = page::resolve(&document.page, document.root.transform.as_ref());

    let extracted =
        ShapeWalker::children_of(&document.root, setup.seed, &config.extraction).collect_points()?;

    let mut program = StabPressGenerator::new(config.machine.clone())
        .annotate_sources(config.output.debug)
        .assemble(
            &extracted.points,
            extracted.origin.as_ref(),
            setup.paper_class,
        );

    if config.output.diagnostics {
        program = program.with_header_comments(setup.diagnostics());
    }

    tracing::info!(
        "Converted {} points ({} duplicates dropped) on {} paper{}",
        program.input_count(),
        program.dropped_duplicates(),
        setup.paper_class,
        if extracted.origin.is_some() {
            ", calibrated origin"
        } else {
            ""
        }
    );

    Ok(program)
}

/// Import SVG text and convert it
pub fn convert_svg(svg_content: &str, config: &Config) -> Result<ToolpathProgram> {
    let document = SvgImporter::new().import_string(svg_content)?;
    convert_document(&document, config)
}
