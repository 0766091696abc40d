//! Main protractor diagram: circles, arm positions, radial labels and alignment grids.

use glam::{DVec2, dvec2};

use super::canvas::{Canvas, Stroke, TextStyle, Transform};
use super::defaults::{self, BLACK};
use super::path_builder::PathBuilder;
use super::layout::PageLayout;
use crate::alignment::GrooveBounds;
use crate::geometry::{ArmGeometry, ComputedGeometry};
use crate::types::{Degrees, Mm, Radians, mm_to_pt};

/// Groove and null circles, spindle cross-hair, stylus arc and the arm at its three positions.
pub fn draw_main_diagram(
    canvas: &mut Canvas,
    layout: &PageLayout,
    computed: &ComputedGeometry,
    arm: &ArmGeometry,
    grooves: &GrooveBounds,
) {
    let spindle = layout.spindle;
    let thin = Stroke::thin(BLACK);

    for groove in [grooves.inner, grooves.outer] {
        canvas.stroke_circle(spindle, groove.to_pt(), thin.dashed(defaults::GROOVE_DASH));
    }

    canvas.stroke_circle(spindle, mm_to_pt(defaults::SPINDLE_HOLE_DIAMETER_MM / 2.0), thin);

    let mut lines = PathBuilder::new();
    lines
        .move_to(dvec2(spindle.x, 0.0))
        .line_to(dvec2(spindle.x, layout.page.y))
        .move_to(dvec2(0.0, spindle.y))
        .line_to(dvec2(layout.page.x, spindle.y));

    for null in [computed.nulls.inner, computed.nulls.outer] {
        canvas.stroke_circle(spindle, null.to_pt(), thin);
    }

    // Arc the stylus travels along.
    canvas.stroke_circle(arm.pivot, arm.effective_length_pt(), thin);

    for stylus in [arm.spindle_reach, arm.inner_null_contact, arm.outer_null_contact] {
        lines.move_to(arm.pivot).line_to(stylus);
    }
    lines.move_to(spindle).line_to(arm.outer_null_contact);

    canvas.stroke_path(&lines, thin);
}

/// Labelled arrow from the spindle out to one of the diagram circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLabel {
    pub name: &'static str,
    /// Direction from the spindle, fanned out so labels do not overlap
    pub angle: Degrees,
    pub radius: Mm,
}

pub fn radial_labels(computed: &ComputedGeometry, grooves: &GrooveBounds) -> [RadialLabel; 4] {
    [
        RadialLabel { name: "Inner null", angle: Degrees(160.0), radius: computed.nulls.inner },
        RadialLabel { name: "Outer null", angle: Degrees(153.0), radius: computed.nulls.outer },
        RadialLabel { name: "Inner groove", angle: Degrees(140.0), radius: grooves.inner },
        RadialLabel { name: "Outer groove", angle: Degrees(133.0), radius: grooves.outer },
    ]
}

pub fn draw_radial_labels(canvas: &mut Canvas, spindle: DVec2, labels: &[RadialLabel]) {
    let style = TextStyle::new(defaults::FONT_SIZE_SMALL, BLACK);

    for label in labels.iter().filter(|l| l.radius.is_finite()) {
        let direction = label.angle.to_radians();
        let tip = spindle + direction.unit() * label.radius.to_pt();

        canvas.stroke_path(&PathBuilder::segment(spindle, tip), Stroke::thin(defaults::ARROW_SHAFT));
        draw_arrow(canvas, tip, direction - Degrees::RIGHT.to_radians(), BLACK);

        canvas.scoped(
            &[Transform::Translate(tip), Transform::Rotate(label.angle - Degrees(180.0))],
            |c| c.text(dvec2(mm_to_pt(5.0), -style.line_height()), label.name, style),
        );
    }
}

/// Filled arrow head with its tip at `tip`, pointing along `angle` + 90°.
pub fn draw_arrow(canvas: &mut Canvas, tip: DVec2, angle: Radians, color: &str) {
    canvas.scoped(
        &[Transform::Translate(tip), Transform::Rotate(angle.to_degrees())],
        |c| {
            c.fill_polygon(
                &[
                    DVec2::ZERO,
                    dvec2(mm_to_pt(1.25), mm_to_pt(-3.0)),
                    dvec2(mm_to_pt(-1.25), mm_to_pt(-3.0)),
                ],
                color,
            )
        },
    );
}

/// Square grid the cartridge is lined up against, centred on a null contact point.
///
/// Vertical lines every millimetre, horizontal lines every two, with a red
/// forward and blue backward baseline and the offset angle marked on an arc.
pub fn draw_alignment_grid(canvas: &mut Canvas, center: DVec2, rotation: Radians, offset_angle: Degrees) {
    if !center.is_finite() || !rotation.raw().is_finite() {
        return;
    }
    canvas.scoped(&[Transform::RotateAbout(rotation.to_degrees(), center)], |c| {
        let half = defaults::GRID_HALF_EXTENT_MM;
        let extent = mm_to_pt(half as f64);
        let mut grid = PathBuilder::new();

        for offset in -half..=half {
            let x = center.x + mm_to_pt(offset as f64);
            grid.move_to(dvec2(x, center.y - extent)).line_to(dvec2(x, center.y + extent));
        }
        for offset in (-half..=half).step_by(2) {
            let y = center.y + mm_to_pt(offset as f64);
            grid.move_to(dvec2(center.x - extent, y)).line_to(dvec2(center.x + extent, y));
        }

        c.stroke_path(&grid, Stroke::thin(BLACK));
        c.stroke_circle(center, mm_to_pt(1.5), Stroke::thin(BLACK));

        let baseline = dvec2(extent * 2.0, 0.0);
        c.stroke_path(
            &PathBuilder::segment(center, center - baseline),
            Stroke::new(defaults::GRID_FORWARD, defaults::THICK_LINE_WIDTH),
        );
        c.stroke_path(
            &PathBuilder::segment(center, center + baseline),
            Stroke::new(defaults::GRID_BACKWARD, defaults::THICK_LINE_WIDTH),
        );

        c.scoped(&[Transform::Translate(center)], |c| draw_offset_angle_arc(c, offset_angle));
    });
}

/// Arc annotation of the offset angle, drawn around the grid centre (the local origin).
fn draw_offset_angle_arc(canvas: &mut Canvas, offset_angle: Degrees) {
    let r = defaults::OFFSET_ARC_RADIUS;
    let color = defaults::GRID_BACKWARD;

    // Y points down the page, so angles above the baseline have negative y.
    let above = |angle: Degrees| {
        let a = angle.to_radians();
        dvec2(a.cos() * r, -a.sin() * r)
    };
    let start = dvec2(r, 0.0);
    let overshoot = Degrees(10.0);
    let below = overshoot.to_radians();

    let mut arcs = PathBuilder::new();
    arcs.move_to(start)
        .arc_to(r, false, above(offset_angle + overshoot))
        .move_to(start)
        .arc_to(r, true, dvec2(below.cos() * r, below.sin() * r));
    canvas.stroke_path(&arcs, Stroke::new(color, defaults::THICK_LINE_WIDTH));

    draw_arrow(canvas, start, Degrees(180.0).to_radians(), color);
    draw_arrow(canvas, above(offset_angle), (-offset_angle).to_radians(), color);

    let style = TextStyle::new(defaults::FONT_SIZE_NORMAL, color);
    canvas.scoped(&[Transform::Rotate(-offset_angle / 2.0)], |c| {
        c.text(
            dvec2(r + mm_to_pt(2.0), -style.line_height() / 3.0),
            &offset_angle.to_string(),
            style,
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{AlignmentSpec, PageSize};

    fn setup() -> (PageLayout, ComputedGeometry, ArmGeometry) {
        let spec = AlignmentSpec::new("Deck", "Arm", Mm(222.0), Mm(17.3), Degrees(22.99));
        let layout = PageLayout::for_page(PageSize::A4.dimensions());
        let computed = ComputedGeometry::compute(&spec);
        let arm = ArmGeometry::place(&spec, &computed, layout.spindle);
        (layout, computed, arm)
    }

    #[test]
    fn radial_labels_are_fanned_out() {
        let (_, computed, _) = setup();
        let labels = radial_labels(&computed, &GrooveBounds::DIN);
        let names: Vec<_> = labels.iter().map(|l| l.name).collect();
        assert_eq!(names, ["Inner null", "Outer null", "Inner groove", "Outer groove"]);
        for pair in labels.windows(2) {
            assert!(pair[0].angle.0 - pair[1].angle.0 >= 5.0);
        }
        assert_eq!(labels[2].radius, Mm(57.5));
    }

    #[test]
    fn main_diagram_draws_all_circles() {
        let (layout, computed, arm) = setup();
        let mut canvas = Canvas::new(layout.page);
        draw_main_diagram(&mut canvas, &layout, &computed, &arm, &GrooveBounds::DIN);
        let svg = canvas.finish().to_string();
        // two grooves, spindle hole, two nulls, stylus arc
        assert_eq!(svg.matches("<circle").count(), 6);
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
    }

    #[test]
    fn grid_is_rotated_about_its_centre() {
        let (layout, _, arm) = setup();
        let mut canvas = Canvas::new(layout.page);
        draw_alignment_grid(
            &mut canvas,
            arm.outer_null_contact,
            arm.outer_grid_rotation(),
            Degrees(22.99),
        );
        let svg = canvas.finish().to_string();
        let expected = Transform::RotateAbout(arm.outer_grid_rotation().to_degrees(), arm.outer_null_contact);
        assert!(svg.contains(&expected.to_string()));
        assert!(svg.contains("22.99°"));
        assert!(svg.contains("rotate(-11.495)"));
        assert!(svg.contains(r#"stroke="red""#));
        assert!(svg.contains(r#"stroke="blue""#));
    }

    #[test]
    fn arrows_rotate_in_degrees() {
        let mut canvas = Canvas::new(dvec2(100.0, 100.0));
        draw_arrow(&mut canvas, dvec2(10.0, 10.0), Degrees(90.0).to_radians(), BLACK);
        let svg = canvas.finish().to_string();
        assert!(svg.contains("translate(10 10) rotate(90)"), "{svg}");
    }
}
