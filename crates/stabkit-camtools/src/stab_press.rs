//! Stab press toolpath assembly.
//!
//! Turns an ordered list of machine-space points into a program for a
//! single-axis stab tool: travel to each distinct point, plunge, retract,
//! and finally park the head at the machine home position.

use crate::error::{CamToolResult, ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use stabkit_core::{format_coordinate, PaperClass, Point2D, PointKey};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;

/// Machine parameters for the stab press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabPressParameters {
    /// Z of the reference datum, used at start and end of the program (mm)
    pub datum_z: f64,
    /// Z for travel moves between points (mm)
    pub travel_z: f64,
    /// Z the tool plunges to at each point (mm)
    pub plunge_z: f64,
    /// Feed rate set with the first rapid move (mm/min)
    pub travel_feed: f64,
    /// Machine-coordinate X of the parking position (mm)
    pub home_x: f64,
    /// Machine-coordinate Y of the parking position (mm)
    pub home_y: f64,
    /// X distance from the calibration sensor to the tool (mm)
    pub sensor_offset_x: f64,
    /// Y distance from the calibration sensor to the tool (mm)
    pub sensor_offset_y: f64,
}

impl Default for StabPressParameters {
    fn default() -> Self {
        Self {
            datum_z: 0.0,
            travel_z: -15.0,
            plunge_z: -35.0,
            travel_feed: 20000.0,
            home_x: -5.0,
            home_y: -5.0,
            sensor_offset_x: 11.3,
            sensor_offset_y: -3.8,
        }
    }
}

impl StabPressParameters {
    /// Check the parameters describe a usable machine setup
    pub fn validate(&self) -> ParameterResult<()> {
        let fields = [
            ("datum_z", self.datum_z),
            ("travel_z", self.travel_z),
            ("plunge_z", self.plunge_z),
            ("travel_feed", self.travel_feed),
            ("home_x", self.home_x),
            ("home_y", self.home_y),
            ("sensor_offset_x", self.sensor_offset_x),
            ("sensor_offset_y", self.sensor_offset_y),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("{} is not a finite number", value),
                });
            }
        }

        if self.travel_feed <= 0.0 {
            return Err(ParameterError::OutOfRange {
                name: "travel_feed".to_string(),
                value: self.travel_feed,
                min: 0.0,
                max: f64::MAX,
            });
        }

        if self.plunge_z >= self.travel_z {
            return Err(ParameterError::Incompatible(format!(
                "plunge_z ({}) must be below travel_z ({})",
                self.plunge_z, self.travel_z
            )));
        }

        Ok(())
    }
}

/// How the program establishes its coordinate origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetupDirective {
    /// Use the fixed work coordinate system centred on the paper size
    WorkCoordinates(PaperClass),
    /// Declare the current position, read off a calibration marker
    OriginCalibration { x: f64, y: f64 },
}

impl fmt::Display for SetupDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkCoordinates(paper) => write!(
                f,
                "{} ({} centre reference)",
                paper.work_coordinate_system(),
                paper
            ),
            Self::OriginCalibration { x, y } => write!(
                f,
                "G92 X{} Y{} (origin calibration)",
                format_coordinate(*x),
                format_coordinate(*y)
            ),
        }
    }
}

/// One entry of the program body
#[derive(Debug, Clone, PartialEq)]
pub enum ToolpathStep {
    /// Travel to the point and stab
    Stab(Point2D),
    /// A point already stabbed earlier in the program
    DroppedDuplicate(Point2D),
}

/// Destination for emitted program lines
pub trait LineSink {
    fn emit_line(&mut self, line: &str) -> std::io::Result<()>;
}

impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> std::io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to an [`std::io::Write`]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit_line(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

/// A fully assembled stab program
#[derive(Debug, Clone, PartialEq)]
pub struct ToolpathProgram {
    header_comments: Vec<String>,
    directive: SetupDirective,
    input_count: usize,
    steps: Vec<ToolpathStep>,
    params: StabPressParameters,
    annotate_sources: bool,
}

impl ToolpathProgram {
    pub fn directive(&self) -> SetupDirective {
        self.directive
    }

    pub fn header_comments(&self) -> &[String] {
        &self.header_comments
    }

    /// Replace the header comment lines
    pub fn with_header_comments(mut self, comments: Vec<String>) -> Self {
        self.header_comments = comments;
        self
    }

    /// Number of points handed to the assembler, duplicates included
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn steps(&self) -> &[ToolpathStep] {
        &self.steps
    }

    /// The distinct points, in stab order
    pub fn points(&self) -> impl Iterator<Item = &Point2D> + '_ {
        self.steps.iter().filter_map(|step| match step {
            ToolpathStep::Stab(point) => Some(point),
            ToolpathStep::DroppedDuplicate(_) => None,
        })
    }

    pub fn dropped_duplicates(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ToolpathStep::DroppedDuplicate(_)))
            .count()
    }

    /// Every line of the program, in emission order
    pub fn lines(&self) -> Vec<String> {
        let p = &self.params;
        let mut lines = self.header_comments.clone();

        lines.push(self.directive.to_string());
        lines.push(format!("(Number of points:{})", self.input_count));
        lines.push("G17 (XY plane)".to_string());
        lines.push("G21 (millimetres)".to_string());
        lines.push(String::new());

        lines.push(format!("G0 Z{} F{}", p.datum_z, p.travel_feed));
        lines.push("G0 X0 Y0".to_string());
        lines.push(String::new());

        for step in &self.steps {
            match step {
                ToolpathStep::Stab(point) => {
                    if self.annotate_sources {
                        if let Some(source) = &point.source {
                            lines.push(format!("({})", source));
                        }
                    }
                    lines.push(format!(
                        "G0 X{} Y{}",
                        format_coordinate(point.x),
                        format_coordinate(point.y)
                    ));
                    lines.push(format!("G1 Z{}", p.plunge_z));
                    lines.push(format!("G0 Z{}", p.travel_z));
                    lines.push(String::new());
                }
                ToolpathStep::DroppedDuplicate(_) => {
                    lines.push("(dropped duplicate)".to_string());
                }
            }
        }

        lines.push(format!("G0 Z{}", p.datum_z));
        lines.push(format!(
            "G53 X{} Y{} (return to home)",
            p.home_x, p.home_y
        ));

        lines
    }

    /// Write the program to `sink`
    ///
    /// The whole program is built before the first line is written.
    pub fn emit(&self, sink: &mut impl LineSink) -> CamToolResult<()> {
        for line in self.lines() {
            sink.emit_line(&line)?;
        }
        Ok(())
    }

    /// The program as newline-terminated text
    pub fn to_gcode(&self) -> String {
        let mut gcode = self.lines().join("\n");
        gcode.push('\n');
        gcode
    }
}

/// Generator for stab press programs
pub struct StabPressGenerator {
    params: StabPressParameters,
    annotate_sources: bool,
}

impl StabPressGenerator {
    /// Create a new StabPressGenerator with the given parameters
    pub fn new(params: StabPressParameters) -> Self {
        Self {
            params,
            annotate_sources: false,
        }
    }

    /// Precede each stab with a comment naming the shape it came from
    pub fn annotate_sources(mut self, enabled: bool) -> Self {
        self.annotate_sources = enabled;
        self
    }

    /// Assemble a program from points in machine coordinates.
    ///
    /// Points whose [`PointKey`] matches an earlier one are not stabbed
    /// again; they are recorded as dropped duplicates at their position.
    /// A stab is written with its own coordinates, sign of zero included.
    /// With a calibration `origin` the program declares its own origin
    /// instead of selecting the paper's work coordinate system.
    pub fn assemble(
        &self,
        points: &[Point2D],
        origin: Option<&Point2D>,
        paper_class: PaperClass,
    ) -> ToolpathProgram {
        let directive = match origin {
            Some(origin) => {
                let sensor =
                    origin.offset(self.params.sensor_offset_x, self.params.sensor_offset_y);
                SetupDirective::OriginCalibration {
                    x: sensor.x,
                    y: sensor.y,
                }
            }
            None => SetupDirective::WorkCoordinates(paper_class),
        };

        let mut seen: HashSet<PointKey> = HashSet::with_capacity(points.len());
        let steps: Vec<ToolpathStep> = points
            .iter()
            .map(|point| {
                if seen.insert(point.key()) {
                    ToolpathStep::Stab(point.clone())
                } else {
                    tracing::debug!("Dropping duplicate point {}", point);
                    ToolpathStep::DroppedDuplicate(point.clone())
                }
            })
            .collect();

        ToolpathProgram {
            header_comments: Vec::new(),
            directive,
            input_count: points.len(),
            steps,
            params: self.params.clone(),
            annotate_sources: self.annotate_sources,
        }
    }
}
