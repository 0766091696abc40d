//! Tracking error and distortion across the playable radius range.

use crate::alignment::AlignmentSpec;
use crate::geometry::triangle_angle;
use crate::types::{Degrees, Mm};

/// First sampled groove radius (mm)
pub const MIN_RADIUS_MM: u32 = 50;
/// Last sampled groove radius (mm), inclusive
pub const MAX_RADIUS_MM: u32 = 150;
/// Number of samples in every curve
pub const SAMPLE_COUNT: usize = (MAX_RADIUS_MM - MIN_RADIUS_MM + 1) as usize;

/// Angular velocity of a record at 33⅓ rpm, in radians per second.
const RECORD_ANGULAR_VELOCITY: f64 = 3.49;

/// Scale factor of the distortion estimate. Empirically derived and kept
/// as-is for numerical compatibility; it is not derived from first principles.
const DISTORTION_FACTOR: f64 = 180.0;

/// One point of a curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSample {
    pub radius: Mm,
    /// Signed tracking error
    pub tracking_error: Degrees,
    /// Distortion estimate, read as a percentage on the chart
    pub distortion: f64,
    /// Axis label, only on every tenth millimetre
    pub label: Option<String>,
}

/// Tracking error and distortion for groove radii 50..=150 mm in 1 mm steps.
pub fn tracking_error_and_distortion_curve(
    pivot_to_spindle: Mm,
    overhang: Mm,
    offset_angle: Degrees,
) -> Vec<CurveSample> {
    let effective_length = pivot_to_spindle + overhang;

    (MIN_RADIUS_MM..=MAX_RADIUS_MM)
        .map(|mm| {
            let radius = Mm(mm as f64);
            let tracking_error = Degrees::RIGHT
                - offset_angle
                - triangle_angle(radius, effective_length, pivot_to_spindle).to_degrees();

            // Hd ≈ (ω · A · α) / (ωr · r) with the modulation terms folded into the factor.
            let distortion =
                DISTORTION_FACTOR * tracking_error.0.abs() / (RECORD_ANGULAR_VELOCITY * radius.0);

            CurveSample {
                radius,
                tracking_error,
                distortion,
                label: (mm % 10 == 0).then(|| mm.to_string()),
            }
        })
        .collect()
}

/// A named parameter set drawn as a comparison curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceAlignment {
    pub name: &'static str,
    pub color: &'static str,
    pub pivot_to_spindle: Mm,
    pub overhang: Mm,
    pub offset_angle: Degrees,
}

/// Color of the curve computed from the user's own spec.
pub const USER_CURVE_COLOR: &str = "orange";

/// Published alignments plotted next to the user's curve, in legend order.
pub static REFERENCE_ALIGNMENTS: &[ReferenceAlignment] = &[
    ReferenceAlignment {
        name: "Lofgren A",
        color: "#3333ff",
        pivot_to_spindle: Mm(222.0),
        overhang: Mm(17.3),
        offset_angle: Degrees(22.99),
    },
    ReferenceAlignment {
        name: "Lofgren B",
        color: "#ff3333",
        pivot_to_spindle: Mm(222.0),
        overhang: Mm(17.75),
        offset_angle: Degrees(22.94),
    },
    ReferenceAlignment {
        name: "Stevenson",
        color: "#33ff33",
        pivot_to_spindle: Mm(222.0),
        overhang: Mm(15.42),
        offset_angle: Degrees(21.98),
    },
];

/// A computed curve with its display attributes
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub name: String,
    pub color: String,
    pub samples: Vec<CurveSample>,
}

impl CurveSeries {
    pub fn compute(
        name: impl Into<String>,
        color: impl Into<String>,
        pivot_to_spindle: Mm,
        overhang: Mm,
        offset_angle: Degrees,
    ) -> Self {
        CurveSeries {
            name: name.into(),
            color: color.into(),
            samples: tracking_error_and_distortion_curve(pivot_to_spindle, overhang, offset_angle),
        }
    }

    pub fn from_reference(reference: &ReferenceAlignment) -> Self {
        Self::compute(
            reference.name,
            reference.color,
            reference.pivot_to_spindle,
            reference.overhang,
            reference.offset_angle,
        )
    }
}

/// The user's curve first, then every reference alignment.
pub fn chart_series(spec: &AlignmentSpec) -> Vec<CurveSeries> {
    std::iter::once(CurveSeries::compute(
        spec.turntable.clone(),
        USER_CURVE_COLOR,
        spec.pivot_to_spindle,
        spec.overhang,
        spec.offset_angle,
    ))
    .chain(REFERENCE_ALIGNMENTS.iter().map(CurveSeries::from_reference))
    .collect()
}
