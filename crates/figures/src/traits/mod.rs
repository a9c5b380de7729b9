use image::GrayImage;
use crate::{error::Result, types::Outline};

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Turn a grayscale image into a binary foreground/background image
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract outlines of the foreground (non-zero) regions of a binary image
    fn extract_contours(&self, image: &GrayImage) -> Result<Vec<Outline>>;
}

/// Main trait for outline extraction
pub trait OutlineExtractor: Send + Sync {
    /// Extract outlines from a grayscale image
    fn extract_outlines(&self, image: &GrayImage) -> Result<Vec<Outline>>;
}
