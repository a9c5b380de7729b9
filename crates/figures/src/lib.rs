//! # Figures
//!
//! Counts and recolors circles, rectangles and triangles in grayscale or
//! color images.
//!
//! Foreground regions are separated with Otsu thresholding, their external
//! outlines traced, and each outline is compared against its minimum
//! enclosing circle, minimum enclosing triangle and minimum-area rotated
//! rectangle. An outline is a shape when the enclosing shape wastes no more
//! than a tolerance fraction of its area.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use figures::{Figure, FiguresAnalyzer};
//!
//! let analyzer = FiguresAnalyzer::default();
//! let image = image::open("figures.png")?;
//!
//! let (circles, rectangles, triangles) = analyzer.figure_counts(&image)?.as_tuple();
//! println!("{circles} circles, {rectangles} rectangles, {triangles} triangles");
//!
//! let colored = analyzer.fill_figures(&image, &[Figure::Circle, Figure::Triangle])?;
//! colored.save("colored.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Analyzer
//!
//! ```rust
//! use figures::FiguresAnalyzer;
//! use image::Rgb;
//!
//! let analyzer = FiguresAnalyzer::builder()
//!     .tolerance(0.05)
//!     .circle_color(Rgb([255, 255, 0]))
//!     .build()?;
//! # Ok::<(), figures::FiguresError>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod geometry;
pub mod classifier;
pub mod drawing;
pub mod config;
pub mod analyzer;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-exports for convenience
pub use error::{FiguresError, Result};
pub use types::{Figure, FigureColors, FigureCounts, Outline};
pub use traits::*;
pub use algorithms::{extract_outlines, ExternalOutlineExtractor, StandardOutlineExtractor};
pub use classifier::{FitReport, ShapeClassifier, DEFAULT_TOLERANCE};
pub use config::AnalyzerConfig;
pub use analyzer::{parse_figures, AnalyzerBuilder, FiguresAnalyzer};
