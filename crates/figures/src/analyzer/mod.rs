pub mod builder;

use std::str::FromStr;

use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::{
    algorithms::extract_outlines,
    classifier::ShapeClassifier,
    config::AnalyzerConfig,
    drawing::fill_polygon,
    error::{FiguresError, Result},
    types::{Figure, FigureColors, FigureCounts, Outline},
};

pub use builder::AnalyzerBuilder;

/// Counts and recolors circles, rectangles and triangles in an image.
///
/// Configuration is fixed once built; the analyzer holds no other state and
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FiguresAnalyzer {
    classifier: ShapeClassifier,
    colors: FigureColors,
}

impl FiguresAnalyzer {
    pub fn new(
        tolerance: f64,
        circle_color: Rgb<u8>,
        rectangle_color: Rgb<u8>,
        triangle_color: Rgb<u8>,
    ) -> Result<Self> {
        Self::with_colors(
            tolerance,
            FigureColors::new(circle_color, rectangle_color, triangle_color),
        )
    }

    pub fn with_colors(tolerance: f64, colors: FigureColors) -> Result<Self> {
        Ok(Self {
            classifier: ShapeClassifier::new(tolerance)?,
            colors,
        })
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        AnalyzerBuilder::from_config(config).build()
    }

    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig::from_colors(self.tolerance(), &self.colors)
    }

    pub fn tolerance(&self) -> f64 {
        self.classifier.tolerance()
    }

    pub fn colors(&self) -> &FigureColors {
        &self.colors
    }

    pub fn classify(&self, outline: &Outline) -> Option<Figure> {
        self.classifier.classify(outline)
    }

    /// Extract the external outlines of `image` and classify each of them
    pub fn classify_image(&self, image: &DynamicImage) -> Result<Vec<(Outline, Option<Figure>)>> {
        let outlines = extract_outlines(image)?;
        debug!(count = outlines.len(), "extracted outlines");

        let decisions = outlines
            .into_iter()
            .map(|outline| {
                let figure = self.classify(&outline);
                debug!(points = outline.len(), ?figure, "classified outline");
                (outline, figure)
            })
            .collect();
        Ok(decisions)
    }

    /// Count circles, rectangles and triangles; unclassified outlines are skipped.
    pub fn figure_counts(&self, image: &DynamicImage) -> Result<FigureCounts> {
        let mut counts = FigureCounts::default();
        for (_, figure) in self.classify_image(image)? {
            if let Some(figure) = figure {
                counts.increment(figure);
            }
        }
        Ok(counts)
    }

    /// RGB copy of `image` with every outline of the requested figures
    /// filled in its configured color.
    ///
    /// Grayscale input is expanded to three equal channels first.
    pub fn fill_figures(&self, image: &DynamicImage, figures: &[Figure]) -> Result<RgbImage> {
        let mut result_image = image.to_rgb8();

        for (outline, figure) in self.classify_image(image)? {
            let Some(figure) = figure else {
                continue;
            };
            if figures.contains(&figure) {
                fill_polygon(&mut result_image, &outline.points, self.colors.get(figure));
            }
        }

        Ok(result_image)
    }

    /// [`Self::fill_figures`] with figures given by name.
    ///
    /// Every name must be one of "circle", "rectangle" or "triangle";
    /// otherwise nothing is processed and the unknown names are reported.
    pub fn fill_figures_by_name<S: AsRef<str>>(
        &self,
        image: &DynamicImage,
        names: &[S],
    ) -> Result<RgbImage> {
        let figures = parse_figures(names)?;
        self.fill_figures(image, &figures)
    }

    /// Fill every recognized figure
    pub fn fill_all(&self, image: &DynamicImage) -> Result<RgbImage> {
        self.fill_figures(image, &Figure::ALL)
    }
}

impl Default for FiguresAnalyzer {
    fn default() -> Self {
        Self {
            classifier: ShapeClassifier::default(),
            colors: FigureColors::default(),
        }
    }
}

/// Parse figure names, collecting every unrecognized one into the error.
pub fn parse_figures<S: AsRef<str>>(names: &[S]) -> Result<Vec<Figure>> {
    let mut figures = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();

    for name in names {
        match Figure::from_str(name.as_ref()) {
            Ok(figure) => {
                if !figures.contains(&figure) {
                    figures.push(figure);
                }
            }
            Err(_) => unknown.push(name.as_ref().to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(figures)
    } else {
        Err(FiguresError::UnknownFigures(unknown))
    }
}
