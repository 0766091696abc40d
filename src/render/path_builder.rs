//! Path builder for stroked and filled outlines.
//!
//! Collects absolute move/line/arc commands, then hands them to the drawing
//! surface as SVG path data. A point with a non-finite coordinate breaks the
//! current subpath instead of reaching the output.

use glam::DVec2;
use svg::node::element::path::{Command, Data, Parameters, Position};

#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<Command>,
    /// True while a subpath is open and the next point can be joined with a line
    drawing: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single segment from `from` to `to`.
    pub fn segment(from: DVec2, to: DVec2) -> Self {
        let mut path = Self::new();
        path.move_to(from).line_to(to);
        path
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, p: DVec2) -> &mut Self {
        if p.is_finite() {
            self.commands
                .push(Command::Move(Position::Absolute, point_params(p)));
            self.drawing = true;
        } else {
            self.drawing = false;
        }
        self
    }

    /// Extend the current subpath. Without an open subpath this starts one.
    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        if !p.is_finite() {
            self.drawing = false;
        } else if self.drawing {
            self.commands
                .push(Command::Line(Position::Absolute, point_params(p)));
        } else {
            self.move_to(p);
        }
        self
    }

    /// Circular arc to `to`, with the SVG sweep flag.
    pub fn arc_to(&mut self, radius: f64, sweep: bool, to: DVec2) -> &mut Self {
        if !to.is_finite() || !self.drawing {
            self.drawing = false;
            return self;
        }
        let sweep = if sweep { 1.0 } else { 0.0 };
        let params = Parameters::from(vec![
            radius as f32,
            radius as f32,
            0.0,
            0.0,
            sweep,
            to.x as f32,
            to.y as f32,
        ]);
        self.commands
            .push(Command::EllipticalArc(Position::Absolute, params));
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        if self.drawing {
            self.commands.push(Command::Close);
        }
        self.drawing = false;
        self
    }

    /// Polyline through `points`, split wherever a point is not finite.
    pub fn polyline(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut path = Self::new();
        for p in points {
            path.line_to(p);
        }
        path
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut path = Self::polyline(points.iter().copied());
        path.close();
        path
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn to_data(&self) -> Data {
        Data::from(self.commands.clone())
    }
}

fn point_params(p: DVec2) -> Parameters {
    Parameters::from(vec![p.x as f32, p.y as f32])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn data_string(path: &PathBuilder) -> String {
        svg::node::Value::from(path.to_data()).to_string()
    }

    #[test]
    fn segment_is_move_then_line() {
        let path = PathBuilder::segment(dvec2(0.0, 0.0), dvec2(10.0, 5.0));
        assert_eq!(path.len(), 2);
        let d = data_string(&path);
        assert!(d.starts_with('M') && d.contains('L'), "{d}");
    }

    #[test]
    fn polyline_skips_non_finite_points() {
        let path = PathBuilder::polyline([
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(f64::NAN, 2.0),
            dvec2(3.0, 3.0),
            dvec2(4.0, 4.0),
        ]);
        // M L, then a fresh M L after the gap
        assert_eq!(path.len(), 4);
        assert!(!data_string(&path).contains("NaN"));
    }

    #[test]
    fn all_nan_polyline_is_empty() {
        let path = PathBuilder::polyline([dvec2(f64::NAN, 0.0), dvec2(0.0, f64::NAN)]);
        assert!(path.is_empty());
    }

    #[test]
    fn polygon_is_closed() {
        let path = PathBuilder::polygon(&[dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0)]);
        assert_eq!(path.len(), 4);
        assert!(data_string(&path).to_lowercase().ends_with('z'));
    }
}
