use image::Rgb;

use crate::{
    analyzer::FiguresAnalyzer,
    classifier::DEFAULT_TOLERANCE,
    config::AnalyzerConfig,
    error::Result,
    types::{Figure, FigureColors},
};

/// Builder for creating analyzers with a fluent API
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    tolerance: f64,
    colors: FigureColors,
}

impl AnalyzerBuilder {
    /// Create a new builder with the default tolerance and palette
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            colors: FigureColors::default(),
        }
    }

    /// Start from a loaded configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            colors: config.colors(),
        }
    }

    /// Set the relative error tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the fill color of one figure
    pub fn color(mut self, figure: Figure, color: Rgb<u8>) -> Self {
        self.colors.set(figure, color);
        self
    }

    pub fn circle_color(self, color: Rgb<u8>) -> Self {
        self.color(Figure::Circle, color)
    }

    pub fn rectangle_color(self, color: Rgb<u8>) -> Self {
        self.color(Figure::Rectangle, color)
    }

    pub fn triangle_color(self, color: Rgb<u8>) -> Self {
        self.color(Figure::Triangle, color)
    }

    /// Build the analyzer, validating the tolerance
    pub fn build(self) -> Result<FiguresAnalyzer> {
        FiguresAnalyzer::with_colors(self.tolerance, self.colors)
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
