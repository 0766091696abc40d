//! Page layout: every region is placed relative to the spindle.

use glam::{DVec2, dvec2};

use crate::types::{Rect, mm_to_pt};

/// Regions of the protractor page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page: DVec2,
    pub spindle: DVec2,
    /// Top centre of the title
    pub title: DVec2,
    pub info: Rect,
    pub error_chart: Rect,
    pub distortion_chart: Rect,
    pub legend: Rect,
    /// Top right calibration cross; the other two are offset from it
    pub calibration: DVec2,
}

impl PageLayout {
    /// Layout for a page of `page` points; the spindle sits centred, 15 mm above the middle.
    pub fn for_page(page: DVec2) -> Self {
        let spindle = dvec2(page.x / 2.0, page.y / 2.0 - mm_to_pt(15.0));
        let at = |x: f64, y: f64| spindle + dvec2(mm_to_pt(x), mm_to_pt(y));

        PageLayout {
            page,
            spindle,
            title: at(0.0, -123.0),
            info: Rect::from_mm(spindle, -95.0, -100.0, 58.0, 80.0),
            error_chart: Rect::from_mm(spindle, -30.0, -108.0, 125.0, 45.0),
            distortion_chart: Rect::from_mm(spindle, -30.0, -63.0, 125.0, 45.0),
            legend: Rect::from_mm(spindle, -30.0, -12.0, 125.0, 4.0),
            calibration: at(95.0, -123.0),
        }
    }

    /// Offsets of every region from the spindle.
    pub fn relative_offsets(&self) -> [DVec2; 6] {
        [
            self.title - self.spindle,
            self.info.origin - self.spindle,
            self.error_chart.origin - self.spindle,
            self.distortion_chart.origin - self.spindle,
            self.legend.origin - self.spindle,
            self.calibration - self.spindle,
        ]
    }
}
