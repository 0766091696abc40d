//! Tracking error and distortion charts, and the legend they share.
//!
//! Both charts plot every curve series against the groove radius. The x axis
//! is drawn once, under the distortion chart; the tracking error chart sits
//! directly above it and only gets a closing bottom line.

use glam::dvec2;

use super::canvas::{Anchor, Canvas, Stroke, TextStyle, Transform};
use super::defaults::{self, BLACK, WHITE};
use super::path_builder::PathBuilder;
use crate::alignment::GrooveBounds;
use crate::curves::{CurveSample, CurveSeries, MAX_RADIUS_MM, MIN_RADIUS_MM};
use crate::geometry::NullRadii;
use crate::types::{Mm, Rect, mm_to_pt};

/// Which curve quantity a chart plots, with its fixed y range and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TrackingError,
    Distortion,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::TrackingError => "tracking error (°)",
            ChartKind::Distortion => "tracking distortion (%)",
        }
    }

    /// Values mapped to the bottom and top edge of the chart.
    pub fn range(self) -> (f64, f64) {
        match self {
            ChartKind::TrackingError => (-1.5, 3.0),
            ChartKind::Distortion => (0.0, 1.5),
        }
    }

    /// One entry per y gridline, bottom to top; only some are labelled.
    pub fn y_labels(self) -> &'static [Option<&'static str>] {
        match self {
            ChartKind::TrackingError => &[
                None,
                Some("-1.0"),
                None,
                Some("0.0"),
                None,
                Some("1.0"),
                None,
                Some("2.0"),
                None,
                Some("3.0"),
            ],
            ChartKind::Distortion => &[
                Some("0.0"),
                None,
                Some("0.2"),
                None,
                Some("0.4"),
                None,
                Some("0.6"),
                None,
                Some("0.8"),
                None,
                Some("1.0"),
                None,
                Some("1.2"),
                None,
                Some("1.4"),
                None,
            ],
        }
    }

    pub fn value(self, sample: &CurveSample) -> f64 {
        match self {
            ChartKind::TrackingError => sample.tracking_error.raw(),
            ChartKind::Distortion => sample.distortion,
        }
    }
}

pub fn draw_tracking_error_chart(
    canvas: &mut Canvas,
    bounds: Rect,
    series: &[CurveSeries],
    grooves: &GrooveBounds,
    nulls: &NullRadii,
) {
    canvas.fill_rect(bounds, WHITE);
    canvas.scoped(&[Transform::Translate(bounds.origin)], |c| {
        let area = bounds.local();
        draw_grooves_and_nulls(c, area, grooves, nulls);
        // The x axis belongs to the chart below; close this one with a plain line.
        c.stroke_path(
            &PathBuilder::segment(dvec2(0.0, area.height()), dvec2(area.width(), area.height())),
            Stroke::thin(BLACK),
        );
        draw_y_axis(c, area, ChartKind::TrackingError.y_labels());
        draw_curves(c, area, series, ChartKind::TrackingError);
    });
}

pub fn draw_distortion_chart(
    canvas: &mut Canvas,
    bounds: Rect,
    series: &[CurveSeries],
    grooves: &GrooveBounds,
    nulls: &NullRadii,
) {
    canvas.fill_rect(bounds, WHITE);
    canvas.scoped(&[Transform::Translate(bounds.origin)], |c| {
        let area = bounds.local();
        draw_grooves_and_nulls(c, area, grooves, nulls);
        if let Some(first) = series.first() {
            draw_x_axis(c, area, &first.samples);
        }
        draw_y_axis(c, area, ChartKind::Distortion.y_labels());
        draw_curves(c, area, series, ChartKind::Distortion);
    });
}

/// Horizontal position of a groove radius within a chart `width` wide.
pub fn radius_to_x(radius: Mm, width: f64) -> f64 {
    let span = (MAX_RADIUS_MM - MIN_RADIUS_MM) as f64;
    (radius.raw() - MIN_RADIUS_MM as f64) * width / span
}

/// Vertical position of `value` in a chart `height` tall spanning `min..max` bottom to top.
pub fn value_to_y(value: f64, (min, max): (f64, f64), height: f64) -> f64 {
    height - (value - min) * height / (max - min)
}

/// Shade the radii outside the playable groove area and mark both nulls.
fn draw_grooves_and_nulls(canvas: &mut Canvas, area: Rect, grooves: &GrooveBounds, nulls: &NullRadii) {
    let (w, h) = (area.width(), area.height());
    let inner = radius_to_x(grooves.inner, w);
    let outer = radius_to_x(grooves.outer, w);

    canvas.fill_rect(Rect::new(0.0, 0.0, inner, h), defaults::OUT_OF_GROOVE_SHADE);
    canvas.fill_rect(Rect::new(outer, 0.0, w - outer, h), defaults::OUT_OF_GROOVE_SHADE);

    let mut lines = PathBuilder::new();
    for null in [nulls.inner, nulls.outer] {
        let x = radius_to_x(null, w);
        lines.move_to(dvec2(x, 0.0)).line_to(dvec2(x, h));
    }
    canvas.stroke_path(&lines, Stroke::thin(defaults::CHART_RULE));
}

/// Plot every series, the first one thick and on top of the others.
fn draw_curves(canvas: &mut Canvas, area: Rect, series: &[CurveSeries], kind: ChartKind) {
    let (w, h) = (area.width(), area.height());
    let range = kind.range();

    canvas.clipped(area, |c| {
        for (index, curve) in series.iter().enumerate().rev() {
            let xstep = w / (curve.samples.len().max(2) - 1) as f64;
            let path = PathBuilder::polyline(
                curve
                    .samples
                    .iter()
                    .enumerate()
                    .map(|(j, s)| dvec2(j as f64 * xstep, value_to_y(kind.value(s), range, h))),
            );
            c.stroke_path(&path, Stroke::new(&curve.color, curve_width(index)));
        }
    });

    let style = TextStyle::new(defaults::FONT_SIZE_NORMAL, BLACK).anchored(Anchor::Middle);
    canvas.text(dvec2(w / 2.0, mm_to_pt(3.0)), kind.title(), style);
}

fn draw_x_axis(canvas: &mut Canvas, area: Rect, samples: &[CurveSample]) {
    let (w, h) = (area.width(), area.height());
    let xstep = w / (samples.len().max(2) - 1) as f64;
    let style = TextStyle::new(defaults::FONT_SIZE_SMALL, BLACK).anchored(Anchor::Middle);

    let mut axis = PathBuilder::new();
    for (i, sample) in samples.iter().enumerate() {
        let x = xstep * i as f64;
        axis.move_to(dvec2(x, h - mm_to_pt(1.0))).line_to(dvec2(x, h));
        if let Some(label) = &sample.label {
            canvas.text(dvec2(x, h + mm_to_pt(1.0)), label, style);
        }
    }

    canvas.text(
        dvec2(w, h + mm_to_pt(3.0)),
        "groove radius (mm)",
        style.anchored(Anchor::End),
    );

    axis.move_to(dvec2(0.0, h)).line_to(dvec2(w, h));
    canvas.stroke_path(&axis, Stroke::thin(BLACK));
}

fn draw_y_axis(canvas: &mut Canvas, area: Rect, labels: &[Option<&str>]) {
    let (w, h) = (area.width(), area.height());
    let ystep = h / (labels.len().max(2) - 1) as f64;
    let style = TextStyle::new(defaults::FONT_SIZE_SMALL, BLACK).anchored(Anchor::End);

    let mut rules = PathBuilder::new();
    for (i, label) in labels.iter().enumerate() {
        let y = h - i as f64 * ystep;
        if let Some(label) = label {
            canvas.text(dvec2(-mm_to_pt(1.0), y - style.line_height() / 3.0), label, style);
            rules.move_to(dvec2(0.0, y)).line_to(dvec2(w, y));
        }
    }
    canvas.stroke_path(&rules, Stroke::thin(defaults::CHART_RULE));

    let mut axis = PathBuilder::new();
    for i in 0..labels.len() {
        let y = h - i as f64 * ystep;
        axis.move_to(dvec2(0.0, y)).line_to(dvec2(mm_to_pt(1.0), y));
    }
    axis.move_to(dvec2(0.0, h)).line_to(dvec2(0.0, 0.0));
    canvas.stroke_path(&axis, Stroke::thin(BLACK));
}

/// One sample line and name per series, side by side.
pub fn draw_legend(canvas: &mut Canvas, bounds: Rect, series: &[CurveSeries]) {
    canvas.scoped(&[Transform::Translate(bounds.origin)], |c| {
        let area = bounds.local();
        c.fill_rect(area, WHITE);

        let xstep = area.width() / series.len().max(1) as f64;
        let mid = area.height() / 2.0;
        let style = TextStyle::new(defaults::FONT_SIZE_SMALL, BLACK);

        for (index, curve) in series.iter().enumerate() {
            let x = index as f64 * xstep;
            c.stroke_path(
                &PathBuilder::segment(dvec2(x + mm_to_pt(2.0), mid), dvec2(x + mm_to_pt(6.0), mid)),
                Stroke::new(&curve.color, curve_width(index)),
            );
            c.text(
                dvec2(x + mm_to_pt(7.0), mid - style.line_height() / 3.0),
                &curve.name,
                style,
            );
        }
    });
}

fn curve_width(index: usize) -> f64 {
    if index == 0 {
        defaults::PRIMARY_CURVE_WIDTH
    } else {
        defaults::LINE_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentSpec;
    use crate::curves::chart_series;
    use crate::geometry::ComputedGeometry;
    use crate::render::canvas::fmt_num;
    use crate::types::Degrees;

    fn lofgren_a() -> AlignmentSpec {
        AlignmentSpec::new("My Deck", "My Arm", Mm(222.0), Mm(17.3), Degrees(22.99))
    }

    #[test]
    fn label_tables_match_their_ranges() {
        for kind in [ChartKind::TrackingError, ChartKind::Distortion] {
            let labels = kind.y_labels();
            let (min, max) = kind.range();
            let step = (max - min) / (labels.len() - 1) as f64;
            for (i, label) in labels.iter().enumerate() {
                if let Some(label) = label {
                    let value: f64 = label.parse().unwrap();
                    assert!((min + i as f64 * step - value).abs() < 1e-9, "{kind:?} row {i}");
                }
            }
        }
        assert_eq!(ChartKind::TrackingError.y_labels().len(), 10);
        assert_eq!(ChartKind::Distortion.y_labels().len(), 16);
    }

    #[test]
    fn radius_and_value_mapping() {
        assert_eq!(radius_to_x(Mm(50.0), 100.0), 0.0);
        assert_eq!(radius_to_x(Mm(150.0), 100.0), 100.0);
        assert_eq!(radius_to_x(Mm(100.0), 100.0), 50.0);

        assert_eq!(value_to_y(-1.5, ChartKind::TrackingError.range(), 45.0), 45.0);
        assert_eq!(value_to_y(3.0, ChartKind::TrackingError.range(), 45.0), 0.0);
        assert_eq!(value_to_y(0.75, ChartKind::Distortion.range(), 30.0), 15.0);
    }

    #[test]
    fn nulls_line_up_with_curve_samples() {
        // A null at radius r must sit where sample r - 50 is plotted.
        let width = 354.33;
        let xstep = width / 100.0;
        for mm in [50, 66, 121, 150] {
            let sample_x = (mm - 50) as f64 * xstep;
            assert!((radius_to_x(Mm(mm as f64), width) - sample_x).abs() < 1e-9);
        }
    }

    #[test]
    fn primary_series_is_drawn_last_and_thick() {
        let spec = lofgren_a();
        let series = chart_series(&spec);
        let computed = ComputedGeometry::compute(&spec);
        let mut canvas = Canvas::new(dvec2(600.0, 800.0));
        draw_tracking_error_chart(
            &mut canvas,
            Rect::new(10.0, 10.0, 354.0, 127.0),
            &series,
            &GrooveBounds::DIN,
            &computed.nulls,
        );
        let svg = canvas.finish().to_string();

        let orange = svg.find(r#"stroke="orange""#).expect("user curve");
        let stevenson = svg.find(r##"stroke="#33ff33""##).expect("reference curve");
        assert!(stevenson < orange);
        assert!(svg.contains("url(#clip1)"));
        assert!(svg.contains("tracking error (°)"));
        // the shared x axis is only drawn under the distortion chart
        assert!(!svg.contains("groove radius (mm)"));
    }

    #[test]
    fn distortion_chart_has_the_radius_axis() {
        let spec = lofgren_a();
        let series = chart_series(&spec);
        let computed = ComputedGeometry::compute(&spec);
        let mut canvas = Canvas::new(dvec2(600.0, 800.0));
        draw_distortion_chart(
            &mut canvas,
            Rect::new(0.0, 0.0, 354.0, 127.0),
            &series,
            &GrooveBounds::DIN,
            &computed.nulls,
        );
        let svg = canvas.finish().to_string();
        assert!(svg.contains("groove radius (mm)"));
        for label in ["50", "100", "150", "0.0", "1.4"] {
            assert!(svg.contains(&format!(">\n{label}\n</text>")), "missing {label}");
        }
        assert!(!svg.contains(">\n1.5\n</text>"));
    }

    #[test]
    fn legend_lists_every_series_in_order() {
        let series = chart_series(&lofgren_a());
        let mut canvas = Canvas::new(dvec2(600.0, 800.0));
        draw_legend(&mut canvas, Rect::new(0.0, 0.0, 354.0, 11.0), &series);
        let svg = canvas.finish().to_string();

        let positions: Vec<usize> = ["My Deck", "Lofgren A", "Lofgren B", "Stevenson"]
            .iter()
            .map(|name| svg.find(name).expect("legend entry"))
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
        let thick = format!(r#"stroke-width="{}""#, fmt_num(defaults::PRIMARY_CURVE_WIDTH));
        assert_eq!(svg.matches(&thick).count(), 1);
    }
}
