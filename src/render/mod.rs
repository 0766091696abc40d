//! SVG rendering of the protractor page
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, colors and fonts
//! - `canvas`: Drawing surface with scoped transforms and clips
//! - `path_builder`: Path data construction
//! - `layout`: Placement of every page region relative to the spindle
//! - `diagram`: Main diagram, radial labels and alignment grids
//! - `charts`: Tracking error and distortion charts with their legend
//! - `panel`: Title, info panel and calibration marks

pub mod canvas;
pub mod charts;
pub mod defaults;
pub mod diagram;
pub mod layout;
pub mod panel;
pub mod path_builder;

pub use canvas::{Anchor, Canvas, Stroke, TextStyle, Transform};
pub use layout::PageLayout;

use glam::dvec2;
use svg::Document;

use crate::alignment::{AlignmentSpec, GrooveBounds};
use crate::curves::chart_series;
use crate::geometry::{ArmGeometry, ComputedGeometry};

/// Proportional character widths from C pikchr's awChar table, in hundredths of a character.
#[rustfmt::skip]
const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width of one `AW_CHAR` unit relative to the font size (pikchr: 0.08in chars at 0.14in text).
const CHAR_WIDTH_RATIO: f64 = 0.08 / 0.14;

fn text_length(text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' '..='~' => AW_CHAR[(c as usize) - 0x20] as u32,
            _ => 100,
        })
        .sum()
}

/// Estimated advance width of `text` at `size` points.
pub fn text_width(text: &str, size: f64) -> f64 {
    text_length(text) as f64 * 0.01 * size * CHAR_WIDTH_RATIO
}

/// Render the full protractor page as an SVG document.
///
/// Geometry that cannot be placed (for example an overhang so large the
/// nulls vanish) still produces a page: the affected shapes are dropped and
/// a warning is logged. Callers that want to reject such input should call
/// [`ComputedGeometry::validate`] first.
pub fn render_document(spec: &AlignmentSpec) -> Document {
    let computed = ComputedGeometry::compute(spec);
    let layout = PageLayout::for_page(spec.page_size.dimensions());
    let arm = ArmGeometry::place(spec, &computed, layout.spindle);
    let grooves = GrooveBounds::default();
    let series = chart_series(spec);

    if !computed.is_feasible() || !arm.is_finite() {
        crate::log::warn!(
            inner_null = computed.nulls.inner.0,
            outer_null = computed.nulls.outer.0,
            "alignment geometry is not placeable, parts of the diagram will be missing"
        );
    }

    let mut canvas = Canvas::new(layout.page);
    canvas.scoped(&[Transform::Scale(dvec2(spec.scale_x, spec.scale_y))], |c| {
        diagram::draw_main_diagram(c, &layout, &computed, &arm, &grooves);
        diagram::draw_radial_labels(c, layout.spindle, &diagram::radial_labels(&computed, &grooves));
        diagram::draw_alignment_grid(c, arm.inner_null_contact, arm.inner_grid_rotation(), spec.offset_angle);
        diagram::draw_alignment_grid(c, arm.outer_null_contact, arm.outer_grid_rotation(), spec.offset_angle);

        panel::draw_title(c, layout.title);
        panel::draw_info_panel(c, layout.info, spec, &computed);
        charts::draw_tracking_error_chart(c, layout.error_chart, &series, &grooves, &computed.nulls);
        charts::draw_distortion_chart(c, layout.distortion_chart, &series, &grooves, &computed.nulls);
        charts::draw_legend(c, layout.legend, &series);
        panel::draw_calibration_marks(c, layout.calibration);
    });

    crate::log::debug!(
        page = %spec.page_size,
        curves = series.len(),
        "rendered protractor page"
    );

    canvas.finish()
}

/// Render the full protractor page as SVG text.
pub fn render_svg(spec: &AlignmentSpec) -> String {
    render_document(spec).to_string()
}
