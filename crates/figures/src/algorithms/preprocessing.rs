use image::{DynamicImage, GrayImage};
use tracing::trace;
use crate::{error::Result, traits::ImagePreprocessor};

/// Convert image to single-channel form. Grayscale input is copied untouched.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => other.to_luma8(),
    }
}

/// Bi-level thresholding with the level picked by Otsu's method.
///
/// Pixels strictly above the level become 255, everything else 0.
#[derive(Debug, Clone, Default)]
pub struct OtsuThresholdPreprocessor;

impl ImagePreprocessor for OtsuThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        // A flat histogram has no split; any non-zero intensity is foreground.
        let uniform = image
            .pixels()
            .zip(image.pixels().skip(1))
            .all(|(a, b)| a == b);
        let level = if uniform { 0 } else { imageproc::contrast::otsu_level(image) };
        trace!(level, "otsu threshold");
        Ok(imageproc::contrast::threshold(image, level))
    }
}
