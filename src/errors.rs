//! Error types with diagnostics using miette
//!
//! Every failure of a run ends up as one of these. None of them is retried.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Argument Errors
// ============================================================================

/// Errors detected while reading the command line, before any computation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ArgsError {
    #[error("missing required parameter(s): {}", .names.join(", "))]
    #[diagnostic(code(protractor::args::missing), help("run with --help for usage"))]
    MissingParameters { names: Vec<&'static str> },

    #[error("unsupported parameter: {token}")]
    #[diagnostic(code(protractor::args::unrecognized), help("run with --help for usage"))]
    UnrecognizedArgument { token: String },

    #[error("parameter {flag} expects a value")]
    #[diagnostic(code(protractor::args::missing_value))]
    MissingValue { flag: &'static str },

    #[error("invalid number for {flag}: {value:?}")]
    #[diagnostic(code(protractor::args::invalid_number))]
    InvalidNumber { flag: &'static str, value: String },

    #[error("{flag} must be greater than zero, got {value}")]
    #[diagnostic(code(protractor::args::non_positive))]
    NonPositive { flag: &'static str, value: f64 },

    #[error("unknown page size: {value}")]
    #[diagnostic(
        code(protractor::args::page_size),
        help("supported sizes: A0, A1, A2, A3, A4, A5, B4, B5, LETTER, LEGAL, TABLOID, EXECUTIVE, FOLIO")
    )]
    UnknownPageSize { value: String },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised when validating a tonearm geometry
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error(
        "no null points exist for pivot-to-spindle {pivot_to_spindle} mm, overhang {overhang} mm, offset angle {offset_angle}°"
    )]
    #[diagnostic(
        code(protractor::geometry::infeasible),
        help("the offset angle is too large for this effective length; check the overhang and offset angle")
    )]
    Infeasible {
        pivot_to_spindle: f64,
        overhang: f64,
        offset_angle: f64,
    },
}

// ============================================================================
// Output Errors
// ============================================================================

/// Errors that occur while producing the output document
#[derive(Error, Diagnostic, Debug)]
pub enum OutputError {
    #[error("rendered SVG could not be parsed: {0}")]
    #[diagnostic(code(protractor::output::svg_parse))]
    SvgParse(String),

    #[error("PDF conversion failed: {0}")]
    #[diagnostic(code(protractor::output::pdf_convert))]
    PdfConvert(String),

    #[error("cannot write {}", .path.display())]
    #[diagnostic(code(protractor::output::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any error a protractor run can end with
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Args(_) => 2,
            Error::Geometry(_) | Error::Output(_) => 1,
        }
    }
}
