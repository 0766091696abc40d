//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Physical lengths are millimetres on the record, page coordinates are PDF
//! points (72 per inch) held in `DVec2`. Angles come in two flavours so the
//! degree/radian boundary is always an explicit conversion.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to page points.
#[inline]
pub const fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Length in millimetres (physical record/tonearm space)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Mm(pub f64);

impl Mm {
    /// Page-space length of this physical length.
    #[inline]
    pub fn to_pt(self) -> f64 {
        mm_to_pt(self.0)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Mm {
    type Output = Mm;
    fn add(self, rhs: Mm) -> Mm { Mm(self.0 + rhs.0) }
}
impl Sub for Mm {
    type Output = Mm;
    fn sub(self, rhs: Mm) -> Mm { Mm(self.0 - rhs.0) }
}
impl Mul<f64> for Mm {
    type Output = Mm;
    fn mul(self, rhs: f64) -> Mm { Mm(self.0 * rhs) }
}
impl Div<f64> for Mm {
    type Output = Mm;
    fn div(self, rhs: f64) -> Mm { Mm(self.0 / rhs) }
}

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} mm", p, self.0),
            None => write!(f, "{} mm", self.0),
        }
    }
}

/// Angle in degrees. This is what the rotation API of the drawing surface takes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians. This is what trigonometry takes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    pub const RIGHT: Degrees = Degrees(90.0);

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Radians {
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Unit vector at this angle in page space (y grows downwards).
    #[inline]
    pub fn unit(self) -> DVec2 {
        dvec2(self.0.cos(), self.0.sin())
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees { Degrees(self.0 + rhs.0) }
}
impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees { Degrees(self.0 - rhs.0) }
}
impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees { Degrees(self.0 / rhs) }
}
impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees { Degrees(-self.0) }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians { Radians(self.0 + rhs.0) }
}
impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians { Radians(self.0 - rhs.0) }
}
impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians { Radians(-self.0) }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned rectangle in page points
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { origin: dvec2(x, y), size: dvec2(w, h) }
    }

    /// Rectangle given in millimetres relative to an anchor point.
    pub fn from_mm(anchor: DVec2, x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            origin: anchor + dvec2(mm_to_pt(x), mm_to_pt(y)),
            size: dvec2(mm_to_pt(w), mm_to_pt(h)),
        }
    }

    /// Same size, placed at the origin. Used once a translation to `origin` is in effect.
    pub fn local(&self) -> Rect {
        Rect { origin: DVec2::ZERO, size: self.size }
    }

    #[inline]
    pub fn x(&self) -> f64 { self.origin.x }
    #[inline]
    pub fn y(&self) -> f64 { self.origin.y }
    #[inline]
    pub fn width(&self) -> f64 { self.size.x }
    #[inline]
    pub fn height(&self) -> f64 { self.size.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_is_72_points() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-12);
        assert!((Mm(25.4).to_pt() - 72.0).abs() < 1e-12);
    }

    #[test]
    fn angle_conversions_are_inverse() {
        let d = Degrees(22.99);
        let back = d.to_radians().to_degrees();
        assert!((back.0 - d.0).abs() < 1e-12);
        assert!((Degrees(180.0).to_radians().0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn mm_display_honours_precision() {
        assert_eq!(format!("{}", Mm(222.0)), "222 mm");
        assert_eq!(format!("{:.2}", Mm(65.98737)), "65.99 mm");
    }

    #[test]
    fn rect_from_mm_is_anchored() {
        let r = Rect::from_mm(dvec2(10.0, 20.0), 25.4, 0.0, 25.4, 50.8);
        assert!((r.x() - 82.0).abs() < 1e-9);
        assert!((r.y() - 20.0).abs() < 1e-9);
        assert!((r.height() - 144.0).abs() < 1e-9);
        assert_eq!(r.local().origin, DVec2::ZERO);
    }
}
