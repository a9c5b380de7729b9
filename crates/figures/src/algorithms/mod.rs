pub mod preprocessing;
pub mod extraction;

pub use preprocessing::*;
pub use extraction::*;

use image::DynamicImage;
use crate::{
    error::Result,
    types::Outline,
    traits::{ImagePreprocessor, ContourExtractor, OutlineExtractor},
};

/// Standard outline extractor implementation
#[derive(Debug)]
pub struct StandardOutlineExtractor<P, C>
where
    P: ImagePreprocessor,
    C: ContourExtractor,
{
    pub preprocessor: P,
    pub contour_extractor: C,
}

impl<P, C> StandardOutlineExtractor<P, C>
where
    P: ImagePreprocessor,
    C: ContourExtractor,
{
    pub fn new(preprocessor: P, contour_extractor: C) -> Self {
        Self {
            preprocessor,
            contour_extractor,
        }
    }
}

impl<P, C> OutlineExtractor for StandardOutlineExtractor<P, C>
where
    P: ImagePreprocessor,
    C: ContourExtractor,
{
    fn extract_outlines(&self, image: &image::GrayImage) -> Result<Vec<Outline>> {
        let binary_image = self.preprocessor.preprocess(image)?;
        self.contour_extractor.extract_contours(&binary_image)
    }
}

/// Otsu binarization followed by external contour tracing
pub type ExternalOutlineExtractor =
    StandardOutlineExtractor<OtsuThresholdPreprocessor, ExternalContourExtractor>;

impl Default for ExternalOutlineExtractor {
    fn default() -> Self {
        Self::new(OtsuThresholdPreprocessor, ExternalContourExtractor)
    }
}

/// Outlines of the outermost foreground regions of a grayscale or color image.
pub fn extract_outlines(image: &DynamicImage) -> Result<Vec<Outline>> {
    let gray = to_grayscale(image);
    ExternalOutlineExtractor::default().extract_outlines(&gray)
}
