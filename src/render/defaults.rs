//! Default sizes and settings (page points unless the name says otherwise)

use crate::types::mm_to_pt;

pub const FONT_FAMILY: &str = "Helvetica";
pub const FONT_SIZE_SMALL: f64 = mm_to_pt(2.5);
pub const FONT_SIZE_NORMAL: f64 = mm_to_pt(4.0);
pub const FONT_SIZE_LARGE: f64 = mm_to_pt(5.0);

/// Helvetica ascender, as a fraction of the font size
pub const TEXT_ASCENT: f64 = 0.718;
/// Helvetica line height, as a fraction of the font size
pub const LINE_HEIGHT: f64 = 1.156;

pub const LINE_WIDTH: f64 = mm_to_pt(0.05);
pub const THICK_LINE_WIDTH: f64 = mm_to_pt(0.2);
pub const PRIMARY_CURVE_WIDTH: f64 = mm_to_pt(0.8);

pub const BLACK: &str = "black";
pub const WHITE: &str = "white";
pub const OUT_OF_GROOVE_SHADE: &str = "#ddd";
pub const CHART_RULE: &str = "#bbb";
pub const ARROW_SHAFT: &str = "#666";
pub const GRID_FORWARD: &str = "red";
pub const GRID_BACKWARD: &str = "blue";

/// Groove circles are dashed: 5pt on, 10pt off
pub const GROOVE_DASH: [f64; 2] = [5.0, 10.0];

/// Standard LP centre hole diameter (mm)
pub const SPINDLE_HOLE_DIAMETER_MM: f64 = 7.3;

/// Alignment grid half extent (mm)
pub const GRID_HALF_EXTENT_MM: i32 = 26;

/// Radius of the offset angle arc drawn on each grid, in points
pub const OFFSET_ARC_RADIUS: f64 = 100.0;
