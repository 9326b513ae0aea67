//! Command-line interface.

use crate::pipeline::convert_document;
use anyhow::Context;
use clap::Parser;
use stabkit_camtools::WriterSink;
use stabkit_designer::SvgImporter;
use stabkit_settings::Config;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Convert the marker shapes of an SVG drawing into stab press G-code
#[derive(Debug, Parser)]
#[command(name = "stabkit", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// SVG drawing to convert
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Write the program here instead of stdout
    #[arg(short, long, value_name = "OUT", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Configuration file (.toml or .json); defaults to the user config
    #[arg(short, long, value_name = "CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Also stab at path vertices
    #[arg(long)]
    pub paths: bool,

    /// Ignore circle and ellipse markers
    #[arg(long)]
    pub no_circles: bool,

    /// Annotate each stab with the id of its source shape
    #[arg(long)]
    pub debug: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The effective configuration: the file, then the flags on top
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::load_default().context("failed to load default config")?,
        };

        if self.paths {
            config.extraction.use_paths = true;
        }
        if self.no_circles {
            config.extraction.use_circles = false;
        }
        if self.debug {
            config.output.debug = true;
        }

        Ok(config)
    }
}

/// Run one conversion as described by the command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    let document = SvgImporter::new()
        .import_file(&cli.input)
        .with_context(|| format!("failed to import {}", cli.input.display()))?;

    let program = convert_document(&document, &config)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = WriterSink::new(BufWriter::new(file));
            program.emit(&mut sink)?;
            sink.into_inner().flush()?;
            tracing::debug!("Program written to {}", path.display());
        }
        None => {
            let mut sink = WriterSink::new(std::io::stdout().lock());
            program.emit(&mut sink)?;
        }
    }

    Ok(())
}
