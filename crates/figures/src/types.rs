use geo_types::{Coord, LineString, Polygon};
use image::Rgb;
use imageproc::point::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The closed set of shapes the analyzer recognizes.
///
/// The discriminant doubles as an index into per-figure tables such as
/// [`FigureColors`] and [`FigureCounts`].
#[derive(
    Debug, Clone, Copy,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString,
    PartialEq, Eq, Hash, PartialOrd, Ord
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Figure {
    Circle = 0,
    Rectangle = 1,
    Triangle = 2,
}

impl Figure {
    /// All figures, in ordinal order.
    pub const ALL: [Figure; 3] = [Figure::Circle, Figure::Rectangle, Figure::Triangle];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Fill color for each figure, indexed by [`Figure::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureColors([Rgb<u8>; 3]);

impl FigureColors {
    pub fn new(circle: Rgb<u8>, rectangle: Rgb<u8>, triangle: Rgb<u8>) -> Self {
        Self([circle, rectangle, triangle])
    }

    pub fn get(&self, figure: Figure) -> Rgb<u8> {
        self.0[figure.index()]
    }

    pub fn set(&mut self, figure: Figure, color: Rgb<u8>) {
        self.0[figure.index()] = color;
    }
}

impl Default for FigureColors {
    fn default() -> Self {
        Self::new(Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255]))
    }
}

/// Per-figure tallies produced by the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FigureCounts {
    pub circle: usize,
    pub rectangle: usize,
    pub triangle: usize,
}

impl FigureCounts {
    pub fn get(&self, figure: Figure) -> usize {
        match figure {
            Figure::Circle => self.circle,
            Figure::Rectangle => self.rectangle,
            Figure::Triangle => self.triangle,
        }
    }

    pub fn increment(&mut self, figure: Figure) {
        match figure {
            Figure::Circle => self.circle += 1,
            Figure::Rectangle => self.rectangle += 1,
            Figure::Triangle => self.triangle += 1,
        }
    }

    /// Counts in (circle, rectangle, triangle) order.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.circle, self.rectangle, self.triangle)
    }

    pub fn total(&self) -> usize {
        self.circle + self.rectangle + self.triangle
    }
}

/// Closed polygonal boundary of a foreground region.
///
/// Points are in pixel coordinates, in tracing order, without a repeated
/// closing point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub points: Vec<Point<i32>>,
}

impl Outline {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn coords(&self) -> Vec<Coord<f64>> {
        self.points
            .iter()
            .map(|p| Coord { x: p.x as f64, y: p.y as f64 })
            .collect()
    }

    /// Convert to geo-types Polygon for geometric operations
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::new(self.coords()), vec![])
    }

    /// Area enclosed by the outline polygon (shoelace formula)
    pub fn area(&self) -> f64 {
        use geo::Area;
        if self.points.len() < 3 {
            return 0.0;
        }
        self.to_geo_polygon().unsigned_area()
    }
}
