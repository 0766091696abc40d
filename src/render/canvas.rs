//! Drawing surface.
//!
//! Wraps an SVG document whose user unit is the page point. Transforms and
//! clips are scoped: [`Canvas::scoped`] and [`Canvas::clipped`] open a group,
//! run the drawing closure inside it and close it again, so the state is
//! restored on every exit path of the closure.

use std::fmt;

use glam::DVec2;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Path, Rectangle, Text};
use svg::{Document, Node};

use super::defaults;
use super::path_builder::PathBuilder;
use crate::types::{Degrees, Rect};

/// One entry of an SVG transform list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(DVec2),
    Rotate(Degrees),
    RotateAbout(Degrees, DVec2),
    Scale(DVec2),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate(t) => write!(f, "translate({} {})", fmt_num(t.x), fmt_num(t.y)),
            Transform::Rotate(a) => write!(f, "rotate({})", fmt_num(a.0)),
            Transform::RotateAbout(a, o) => {
                write!(f, "rotate({} {} {})", fmt_num(a.0), fmt_num(o.x), fmt_num(o.y))
            }
            Transform::Scale(s) => write!(f, "scale({} {})", fmt_num(s.x), fmt_num(s.y)),
        }
    }
}

/// Stroke paint for outlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl<'a> Stroke<'a> {
    pub fn new(color: &'a str, width: f64) -> Self {
        Stroke { color, width, dash: None }
    }

    /// The default hairline.
    pub fn thin(color: &'a str) -> Self {
        Self::new(color, defaults::LINE_WIDTH)
    }

    pub fn dashed(mut self, dash: [f64; 2]) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Font size, color and alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub size: f64,
    pub fill: &'a str,
    pub anchor: Anchor,
}

impl<'a> TextStyle<'a> {
    pub fn new(size: f64, fill: &'a str) -> Self {
        TextStyle { size, fill, anchor: Anchor::Start }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Height of one line of text in this style.
    pub fn line_height(&self) -> f64 {
        self.size * defaults::LINE_HEIGHT
    }
}

pub struct Canvas {
    size: DVec2,
    /// Open groups; the first one is the document root and is never popped
    stack: Vec<Group>,
    defs: Definitions,
    clip_count: usize,
}

impl Canvas {
    pub fn new(size: DVec2) -> Self {
        Canvas {
            size,
            stack: vec![Group::new()],
            defs: Definitions::new(),
            clip_count: 0,
        }
    }

    /// Draw inside a group with the given transforms applied, left to right.
    pub fn scoped<R>(&mut self, transforms: &[Transform], draw: impl FnOnce(&mut Canvas) -> R) -> R {
        let list = transforms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.with_group(Group::new().set("transform", list), draw)
    }

    /// Draw inside a group clipped to `rect` (in the current coordinate system).
    pub fn clipped<R>(&mut self, rect: Rect, draw: impl FnOnce(&mut Canvas) -> R) -> R {
        self.clip_count += 1;
        let id = format!("clip{}", self.clip_count);
        self.defs
            .append(ClipPath::new().set("id", id.as_str()).add(rect_element(rect)));
        self.with_group(Group::new().set("clip-path", format!("url(#{id})")), draw)
    }

    fn with_group<R>(&mut self, group: Group, draw: impl FnOnce(&mut Canvas) -> R) -> R {
        self.stack.push(group);
        let depth = self.stack.len();
        let out = draw(self);
        debug_assert_eq!(depth, self.stack.len(), "unbalanced canvas groups");
        if let Some(group) = self.stack.pop() {
            self.append(group);
        }
        out
    }

    fn append<N: Into<Box<dyn Node>>>(&mut self, node: N) {
        if let Some(top) = self.stack.last_mut() {
            top.append(node);
        }
    }

    pub fn stroke_path(&mut self, path: &PathBuilder, stroke: Stroke<'_>) {
        if path.is_empty() {
            return;
        }
        let element = apply_stroke(Path::new().set("d", path.to_data()), stroke).set("fill", "none");
        self.append(element);
    }

    pub fn fill_path(&mut self, path: &PathBuilder, fill: &str) {
        if path.is_empty() {
            return;
        }
        self.append(Path::new().set("d", path.to_data()).set("fill", fill));
    }

    pub fn fill_polygon(&mut self, points: &[DVec2], fill: &str) {
        self.fill_path(&PathBuilder::polygon(points), fill);
    }

    /// Outline a circle. Circles with a non-finite center or radius are skipped.
    pub fn stroke_circle(&mut self, center: DVec2, radius: f64, stroke: Stroke<'_>) {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let element = Circle::new()
            .set("cx", fmt_num(center.x))
            .set("cy", fmt_num(center.y))
            .set("r", fmt_num(radius))
            .set("fill", "none");
        self.append(apply_stroke(element, stroke));
    }

    pub fn fill_rect(&mut self, rect: Rect, fill: &str) {
        self.append(rect_element(rect).set("fill", fill));
    }

    /// Text whose line box has its top edge at `at.y`.
    pub fn text(&mut self, at: DVec2, content: &str, style: TextStyle<'_>) {
        let baseline = at.y + style.size * defaults::TEXT_ASCENT;
        let element = Text::new(content)
            .set("x", fmt_num(at.x))
            .set("y", fmt_num(baseline))
            .set("font-family", defaults::FONT_FAMILY)
            .set("font-size", fmt_num(style.size))
            .set("fill", style.fill)
            .set("text-anchor", style.anchor.as_svg());
        self.append(element);
    }

    /// Close the root group and produce the page document.
    pub fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            if let Some(group) = self.stack.pop() {
                self.append(group);
            }
        }
        let root = self.stack.pop().unwrap_or_else(Group::new);
        Document::new()
            .set("width", fmt_num(self.size.x))
            .set("height", fmt_num(self.size.y))
            .set("viewBox", format!("0 0 {} {}", fmt_num(self.size.x), fmt_num(self.size.y)))
            .add(self.defs)
            .add(root)
    }
}

fn rect_element(rect: Rect) -> Rectangle {
    Rectangle::new()
        .set("x", fmt_num(rect.x()))
        .set("y", fmt_num(rect.y()))
        .set("width", fmt_num(rect.width()))
        .set("height", fmt_num(rect.height()))
}

fn apply_stroke<E: Node>(mut element: E, stroke: Stroke<'_>) -> E {
    element.assign("stroke", stroke.color);
    element.assign("stroke-width", fmt_num(stroke.width));
    if let Some([on, off]) = stroke.dash {
        element.assign("stroke-dasharray", format!("{} {}", fmt_num(on), fmt_num(off)));
    }
    element
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(595.28), "595.28");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(-1.5), "-1.5");
        assert_eq!(fmt_num(2.834645669), "2.83465");
        assert_eq!(fmt_num(f64::NAN), "NaN");
    }

    #[test]
    fn transform_lists_are_written_in_order() {
        assert_eq!(
            Transform::Translate(dvec2(10.0, 20.0)).to_string(),
            "translate(10 20)"
        );
        assert_eq!(
            Transform::RotateAbout(Degrees(-14.5), dvec2(1.0, 2.0)).to_string(),
            "rotate(-14.5 1 2)"
        );
        assert_eq!(Transform::Scale(dvec2(1.0, 0.98)).to_string(), "scale(1 0.98)");
    }

    #[test]
    fn scopes_nest_and_close() {
        let mut canvas = Canvas::new(dvec2(100.0, 200.0));
        let depth = canvas.scoped(&[Transform::Translate(dvec2(5.0, 5.0))], |c| {
            c.scoped(&[Transform::Rotate(Degrees(90.0))], |c| {
                c.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), "white");
                c.stack.len()
            })
        });
        assert_eq!(depth, 3);
        assert_eq!(canvas.stack.len(), 1);

        let svg = canvas.finish().to_string();
        let translate = svg.find("translate(5 5)").expect("outer group");
        let rotate = svg.find("rotate(90)").expect("inner group");
        assert!(translate < rotate);
        assert!(svg.contains(r#"viewBox="0 0 100 200""#));
    }

    #[test]
    fn clip_paths_get_unique_ids() {
        let mut canvas = Canvas::new(dvec2(10.0, 10.0));
        for _ in 0..2 {
            canvas.clipped(Rect::new(0.0, 0.0, 5.0, 5.0), |c| {
                c.stroke_path(
                    &PathBuilder::segment(dvec2(0.0, 0.0), dvec2(9.0, 9.0)),
                    Stroke::thin("black"),
                );
            });
        }
        let svg = canvas.finish().to_string();
        assert!(svg.contains("url(#clip1)"));
        assert!(svg.contains("url(#clip2)"));
    }

    #[test]
    fn empty_paths_are_not_emitted() {
        let mut canvas = Canvas::new(dvec2(10.0, 10.0));
        canvas.stroke_path(&PathBuilder::new(), Stroke::thin("black"));
        let svg = canvas.finish().to_string();
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn degenerate_circles_are_skipped() {
        let mut canvas = Canvas::new(dvec2(10.0, 10.0));
        canvas.stroke_circle(dvec2(1.0, 1.0), f64::NAN, Stroke::thin("black"));
        canvas.stroke_circle(dvec2(f64::INFINITY, 1.0), 2.0, Stroke::thin("black"));
        canvas.stroke_circle(dvec2(1.0, 1.0), 2.0, Stroke::thin("black"));
        assert_eq!(canvas.finish().to_string().matches("<circle").count(), 1);
    }

    #[test]
    fn text_is_placed_on_its_baseline() {
        let mut canvas = Canvas::new(dvec2(100.0, 100.0));
        canvas.text(
            dvec2(10.0, 0.0),
            "Inner null",
            TextStyle::new(10.0, "black").anchored(Anchor::End),
        );
        let svg = canvas.finish().to_string();
        assert!(svg.contains(r#"y="7.18""#), "{svg}");
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains("Inner null"));
    }
}
