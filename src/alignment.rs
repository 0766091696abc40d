//! Input description of a turntable/tonearm combination and the page it is printed on.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::ArgsError;
use crate::types::{Degrees, Mm};

/// Everything needed to draw one protractor
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSpec {
    pub turntable: String,
    pub tonearm: String,
    /// Distance from the tonearm pivot to the record spindle
    pub pivot_to_spindle: Mm,
    /// How far the stylus reaches past the spindle
    pub overhang: Mm,
    /// Angle between the cartridge and the pivot-to-stylus line
    pub offset_angle: Degrees,
    pub page_size: PageSize,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl AlignmentSpec {
    /// An alignment on the default page (A4) with no print scaling.
    pub fn new(
        turntable: impl Into<String>,
        tonearm: impl Into<String>,
        pivot_to_spindle: Mm,
        overhang: Mm,
        offset_angle: Degrees,
    ) -> Self {
        Self {
            turntable: turntable.into(),
            tonearm: tonearm.into(),
            pivot_to_spindle,
            overhang,
            offset_angle,
            page_size: PageSize::default(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Radius of the arc the stylus travels along.
    pub fn effective_length(&self) -> Mm {
        self.pivot_to_spindle + self.overhang
    }
}

/// Named page sizes, dimensions in points (same table PDF tools use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    B4,
    B5,
    Letter,
    Legal,
    Tabloid,
    Executive,
    Folio,
}

impl PageSize {
    pub const ALL: [PageSize; 13] = [
        PageSize::A0,
        PageSize::A1,
        PageSize::A2,
        PageSize::A3,
        PageSize::A4,
        PageSize::A5,
        PageSize::B4,
        PageSize::B5,
        PageSize::Letter,
        PageSize::Legal,
        PageSize::Tabloid,
        PageSize::Executive,
        PageSize::Folio,
    ];

    /// Portrait width and height in points.
    pub fn dimensions(self) -> DVec2 {
        match self {
            PageSize::A0 => dvec2(2383.94, 3370.39),
            PageSize::A1 => dvec2(1683.78, 2383.94),
            PageSize::A2 => dvec2(1190.55, 1683.78),
            PageSize::A3 => dvec2(841.89, 1190.55),
            PageSize::A4 => dvec2(595.28, 841.89),
            PageSize::A5 => dvec2(419.53, 595.28),
            PageSize::B4 => dvec2(708.66, 1000.63),
            PageSize::B5 => dvec2(498.90, 708.66),
            PageSize::Letter => dvec2(612.0, 792.0),
            PageSize::Legal => dvec2(612.0, 1008.0),
            PageSize::Tabloid => dvec2(792.0, 1224.0),
            PageSize::Executive => dvec2(521.86, 756.0),
            PageSize::Folio => dvec2(612.0, 936.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A0 => "A0",
            PageSize::A1 => "A1",
            PageSize::A2 => "A2",
            PageSize::A3 => "A3",
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
            PageSize::B4 => "B4",
            PageSize::B5 => "B5",
            PageSize::Letter => "LETTER",
            PageSize::Legal => "LEGAL",
            PageSize::Tabloid => "TABLOID",
            PageSize::Executive => "EXECUTIVE",
            PageSize::Folio => "FOLIO",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageSize {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PageSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ArgsError::UnknownPageSize { value: s.to_string() })
    }
}

/// Radii of the recorded area of a 12" LP
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrooveBounds {
    pub inner: Mm,
    pub outer: Mm,
}

impl GrooveBounds {
    /// DIN inner groove radius.
    pub const DIN: GrooveBounds = GrooveBounds { inner: Mm(57.5), outer: Mm(146.05) };
    /// IEC inner groove radius.
    pub const IEC: GrooveBounds = GrooveBounds { inner: Mm(60.325), outer: Mm(146.05) };
}

impl Default for GrooveBounds {
    fn default() -> Self {
        GrooveBounds::DIN
    }
}
