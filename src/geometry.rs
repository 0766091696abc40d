//! Tonearm geometry: null points and page placement of the arm.
//!
//! Everything here is a pure function of the alignment spec. Infeasible
//! geometry shows up as NaN and is left to the caller to reject
//! ([`ComputedGeometry::validate`]) or to draw as-is.

use glam::{DVec2, dvec2};

use crate::alignment::AlignmentSpec;
use crate::errors::GeometryError;
use crate::types::{Degrees, Mm, Radians};

/// Groove radii at which the tracking error is zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullRadii {
    pub inner: Mm,
    pub outer: Mm,
}

/// Solve the law-of-cosines quadratic for the two null radii.
///
/// `complementary_offset` is 90° minus the offset angle. Produces NaN when
/// `pivot_to_spindle² < effective_length² · sin²(complementary_offset)`.
pub fn compute_nulls(complementary_offset: Radians, effective_length: Mm, pivot_to_spindle: Mm) -> NullRadii {
    let b = effective_length.0;
    let c = pivot_to_spindle.0;
    let sin = complementary_offset.sin();
    let along = b * complementary_offset.cos();
    let spread = (c * c - b * b * sin * sin).sqrt();

    NullRadii {
        inner: Mm(along - spread),
        outer: Mm(along + spread),
    }
}

/// Angle between sides `a` and `b` of a triangle whose third side is `c`.
///
/// The `acos` argument is not clamped: a degenerate triangle yields NaN.
pub fn triangle_angle(a: Mm, b: Mm, c: Mm) -> Radians {
    let (a, b, c) = (a.0, b.0, c.0);
    Radians(((a * a + b * b - c * c) / (2.0 * a * b)).acos())
}

/// Lengths derived from an alignment, in record space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedGeometry {
    pub effective_length: Mm,
    pub nulls: NullRadii,
}

impl ComputedGeometry {
    pub fn compute(spec: &AlignmentSpec) -> Self {
        let effective_length = spec.effective_length();
        let nulls = compute_nulls(
            (Degrees::RIGHT - spec.offset_angle).to_radians(),
            effective_length,
            spec.pivot_to_spindle,
        );

        crate::log::debug!(
            effective_length = effective_length.0,
            inner_null = nulls.inner.0,
            outer_null = nulls.outer.0,
            "computed nulls"
        );

        ComputedGeometry { effective_length, nulls }
    }

    /// Both nulls are real and lie on the stylus arc between the spindle and the pivot side.
    pub fn is_feasible(&self) -> bool {
        let NullRadii { inner, outer } = self.nulls;
        inner.is_finite()
            && outer.is_finite()
            && inner.0 > 0.0
            && inner.0 <= outer.0
            && outer.0 < self.effective_length.0
    }

    pub fn validate(&self, spec: &AlignmentSpec) -> Result<(), GeometryError> {
        if self.is_feasible() {
            Ok(())
        } else {
            Err(GeometryError::Infeasible {
                pivot_to_spindle: spec.pivot_to_spindle.0,
                overhang: spec.overhang.0,
                offset_angle: spec.offset_angle.0,
            })
        }
    }
}

/// The arm drawn on the page: pivot position and where the stylus touches each null
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmGeometry {
    pub spindle: DVec2,
    pub pivot: DVec2,
    /// Direction of the pivot as seen from the spindle, from horizontal
    pub arm_angle: Radians,
    /// Sweep from the spindle-pointing arm to the inner null contact
    pub inner_null_angle: Radians,
    /// Sweep from the spindle-pointing arm to the outer null contact
    pub outer_null_angle: Radians,
    /// Stylus position when the arm points at the spindle
    pub spindle_reach: DVec2,
    pub inner_null_contact: DVec2,
    pub outer_null_contact: DVec2,
    effective_length_pt: f64,
    outer_null_pt: f64,
}

impl ArmGeometry {
    /// Place the arm so that its inner null contact lies straight below `spindle`.
    pub fn place(spec: &AlignmentSpec, computed: &ComputedGeometry, spindle: DVec2) -> Self {
        let pivot_to_spindle = spec.pivot_to_spindle;
        let effective_length = computed.effective_length;
        let NullRadii { inner, outer } = computed.nulls;

        let arm_angle =
            triangle_angle(pivot_to_spindle, inner, effective_length) - Degrees::RIGHT.to_radians();
        let pivot = spindle + dvec2(arm_angle.cos(), -arm_angle.sin()) * pivot_to_spindle.to_pt();

        let inner_null_angle = triangle_angle(pivot_to_spindle, effective_length, inner);
        let outer_null_angle = triangle_angle(pivot_to_spindle, effective_length, outer);

        let effective_length_pt = effective_length.to_pt();
        let stylus_at = |sweep: Radians| {
            let a = arm_angle + sweep;
            pivot + dvec2(-a.cos(), a.sin()) * effective_length_pt
        };

        let arm = ArmGeometry {
            spindle,
            pivot,
            arm_angle,
            inner_null_angle,
            outer_null_angle,
            spindle_reach: stylus_at(Radians(0.0)),
            inner_null_contact: stylus_at(inner_null_angle),
            outer_null_contact: stylus_at(outer_null_angle),
            effective_length_pt,
            outer_null_pt: outer.to_pt(),
        };

        crate::log::debug!(
            pivot_x = arm.pivot.x,
            pivot_y = arm.pivot.y,
            arm_angle_deg = arm_angle.to_degrees().0,
            "placed arm"
        );

        arm
    }

    /// Radius of the stylus arc in page points.
    pub fn effective_length_pt(&self) -> f64 {
        self.effective_length_pt
    }

    /// Rotation of the inner alignment grid; the arm-tangent reference.
    pub fn inner_grid_rotation(&self) -> Radians {
        Radians(0.0)
    }

    /// Rotation of the outer alignment grid, from the chord between spindle and outer contact.
    pub fn outer_grid_rotation(&self) -> Radians {
        Radians(-((self.outer_null_contact.x - self.spindle.x) / self.outer_null_pt).asin())
    }

    /// All placed points are finite numbers.
    pub fn is_finite(&self) -> bool {
        [
            self.pivot,
            self.spindle_reach,
            self.inner_null_contact,
            self.outer_null_contact,
        ]
        .iter()
        .all(|p| p.is_finite())
    }
}
