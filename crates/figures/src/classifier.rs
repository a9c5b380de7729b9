use geo_types::Coord;
use tracing::trace;

use crate::{
    error::{FiguresError, Result},
    geometry::{min_area_rect_area, min_enclosing_circle, min_enclosing_triangle_area},
    types::{Figure, Outline},
};

/// Default relative error tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Fraction of the enclosing area not covered by the outline.
///
/// `None` when the enclosing area is zero or not finite.
pub fn area_ratio(enclosing_area: f64, outline_area: f64) -> Option<f64> {
    if enclosing_area.is_finite() && enclosing_area > 0.0 {
        Some((enclosing_area - outline_area) / enclosing_area)
    } else {
        None
    }
}

/// Diagnostics for one classification.
///
/// A ratio is `None` when that test was not reached or its enclosing shape
/// was degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitReport {
    pub area: f64,
    pub circle: Option<f64>,
    pub triangle: Option<f64>,
    pub rectangle: Option<f64>,
    pub figure: Option<Figure>,
}

/// Area-ratio shape classifier.
///
/// Tests run in the order circle, triangle, rectangle and the first fit
/// within tolerance wins. A rectangle's bounding rectangle is itself, so
/// it is checked last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeClassifier {
    tolerance: f64,
}

impl ShapeClassifier {
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(FiguresError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn classify(&self, outline: &Outline) -> Option<Figure> {
        self.fit_report(outline).figure
    }

    pub fn fit_report(&self, outline: &Outline) -> FitReport {
        let mut report = FitReport {
            area: outline.area(),
            ..FitReport::default()
        };
        report.figure = self.run_tests(&outline.coords(), &mut report);
        trace!(?report, points = outline.len(), "fit report");
        report
    }

    fn run_tests(&self, points: &[Coord<f64>], report: &mut FitReport) -> Option<Figure> {
        let fits = |ratio: Option<f64>| ratio.is_some_and(|r| r <= self.tolerance);

        let circle_area = min_enclosing_circle(points).map_or(0.0, |c| c.area());
        report.circle = area_ratio(circle_area, report.area);
        if fits(report.circle) {
            return Some(Figure::Circle);
        }

        report.triangle = area_ratio(min_enclosing_triangle_area(points), report.area);
        if fits(report.triangle) {
            return Some(Figure::Triangle);
        }

        report.rectangle = area_ratio(min_area_rect_area(points), report.area);
        if fits(report.rectangle) {
            return Some(Figure::Rectangle);
        }

        None
    }
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}
