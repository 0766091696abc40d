//! Page furniture: title, info panel and the print calibration crosses.

use glam::{DVec2, dvec2};

use super::canvas::{Anchor, Canvas, Stroke, TextStyle, Transform};
use super::defaults::{self, BLACK, WHITE};
use super::path_builder::PathBuilder;
use super::text_width;
use crate::alignment::AlignmentSpec;
use crate::geometry::ComputedGeometry;
use crate::types::{Degrees, Rect, mm_to_pt};

pub const TITLE: &str = "Cartridge Alignment Protractor";

/// Horizontal distance between the right and left calibration crosses (mm)
pub const CALIBRATION_WIDTH_MM: f64 = 190.0;
/// Vertical distance between the top and bottom calibration crosses (mm)
pub const CALIBRATION_HEIGHT_MM: f64 = 260.0;

/// Title centred on `top_center`, on a white backing so lines under it stay hidden.
pub fn draw_title(canvas: &mut Canvas, top_center: DVec2) {
    let style = TextStyle::new(defaults::FONT_SIZE_LARGE, BLACK).anchored(Anchor::Middle);
    let width = text_width(TITLE, style.size);

    canvas.fill_rect(
        Rect::new(top_center.x - width / 2.0, top_center.y, width, style.line_height()),
        WHITE,
    );
    canvas.text(top_center, TITLE, style);
}

/// One line of the info panel
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    /// Offset from the top of the panel (mm)
    pub y: f64,
    pub label: String,
    pub value: Option<String>,
    pub size: f64,
}

impl InfoRow {
    fn text(y: f64, label: impl Into<String>, size: f64) -> Self {
        InfoRow { y, label: label.into(), value: None, size }
    }

    fn entry(y: f64, label: &str, value: String) -> Self {
        InfoRow {
            y,
            label: label.to_string(),
            value: Some(value),
            size: defaults::FONT_SIZE_NORMAL,
        }
    }
}

/// Rows of the info panel: names, inputs, then the derived lengths.
pub fn info_rows(spec: &AlignmentSpec, computed: &ComputedGeometry) -> Vec<InfoRow> {
    let normal = defaults::FONT_SIZE_NORMAL;
    let large = defaults::FONT_SIZE_LARGE;
    let small = defaults::FONT_SIZE_SMALL;

    vec![
        InfoRow::text(0.0, "Turntable:", normal),
        InfoRow::text(5.0, spec.turntable.as_str(), large),
        InfoRow::text(15.0, "Tonearm:", normal),
        InfoRow::text(20.0, spec.tonearm.as_str(), large),
        InfoRow::entry(30.0, "Pivot to spindle:", spec.pivot_to_spindle.to_string()),
        InfoRow::entry(35.0, "Stylus overhang:", spec.overhang.to_string()),
        InfoRow::entry(40.0, "Offset angle:", spec.offset_angle.to_string()),
        InfoRow::entry(50.0, "Effective length:", computed.effective_length.to_string()),
        InfoRow::entry(55.0, "Inner null:", format!("{:.2}", computed.nulls.inner)),
        InfoRow::entry(60.0, "Outer null:", format!("{:.2}", computed.nulls.outer)),
        InfoRow::text(
            70.0,
            format!("Generated by protractor {}", env!("CARGO_PKG_VERSION")),
            small,
        ),
    ]
}

pub fn draw_info_panel(canvas: &mut Canvas, bounds: Rect, spec: &AlignmentSpec, computed: &ComputedGeometry) {
    let value_column = mm_to_pt(35.0);

    canvas.scoped(&[Transform::Translate(bounds.origin)], |c| {
        c.fill_rect(bounds.local(), WHITE);
        for row in info_rows(spec, computed) {
            let y = mm_to_pt(row.y);
            let style = TextStyle::new(row.size, BLACK);
            c.text(dvec2(0.0, y), &row.label, style);
            if let Some(value) = &row.value {
                c.text(dvec2(value_column, y), value, style);
            }
        }
    });
}

/// Three crosses a known distance apart, for checking the printer did not rescale the page.
///
/// `top_right` is the reference cross; the others sit 260 mm below it and
/// 190 mm to its left.
pub fn draw_calibration_marks(canvas: &mut Canvas, top_right: DVec2) {
    let down = dvec2(0.0, mm_to_pt(CALIBRATION_HEIGHT_MM));
    let left = dvec2(mm_to_pt(CALIBRATION_WIDTH_MM), 0.0);

    let mut crosses = PathBuilder::new();
    for center in [top_right, top_right + down, top_right - left] {
        cross(&mut crosses, center, mm_to_pt(6.0));
    }
    canvas.stroke_path(&crosses, Stroke::thin(BLACK));

    let style = TextStyle::new(defaults::FONT_SIZE_SMALL, BLACK);
    canvas.text(
        top_right - dvec2(mm_to_pt(1.0), mm_to_pt(3.0)),
        &format!("{}mm", CALIBRATION_WIDTH_MM),
        style.anchored(Anchor::End),
    );
    canvas.scoped(
        &[Transform::Translate(top_right), Transform::Rotate(Degrees::RIGHT)],
        |c| {
            c.text(
                dvec2(mm_to_pt(1.0), -style.line_height()),
                &format!("{}mm", CALIBRATION_HEIGHT_MM),
                style,
            )
        },
    );
}

fn cross(path: &mut PathBuilder, center: DVec2, size: f64) {
    let half = size / 2.0;
    path.move_to(center - dvec2(half, 0.0))
        .line_to(center + dvec2(half, 0.0))
        .move_to(center - dvec2(0.0, half))
        .line_to(center + dvec2(0.0, half));
}
