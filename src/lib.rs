//! Tonearm geometry and printable cartridge alignment protractors.
//!
//! From three measurements of a turntable (pivot-to-spindle distance, stylus
//! overhang and offset angle) this crate computes the null radii and the
//! tracking error across the record, then draws a one-page protractor with
//! alignment grids at both nulls and error/distortion charts comparing the
//! arm against the Löfgren A, Löfgren B and Stevenson alignments.
//!
//! ```no_run
//! use protractor::{AlignmentSpec, Degrees, Mm, render_svg};
//!
//! let spec = AlignmentSpec::new("Rega Planar 3", "RB300", Mm(222.0), Mm(17.3), Degrees(22.99));
//! let svg = render_svg(&spec);
//! ```

pub mod alignment;
pub mod cli;
pub mod curves;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod output;
pub mod render;
pub mod types;

pub use alignment::{AlignmentSpec, GrooveBounds, PageSize};
pub use curves::{CurveSample, CurveSeries, REFERENCE_ALIGNMENTS, ReferenceAlignment, chart_series};
pub use errors::{ArgsError, Error, GeometryError, OutputError};
pub use geometry::{ArmGeometry, ComputedGeometry, NullRadii, compute_nulls, triangle_angle};
pub use output::{OutputFormat, svg_to_pdf, write_document};
pub use render::{render_document, render_svg};
pub use types::{Degrees, Mm, Radians};
