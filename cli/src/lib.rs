use std::path::Path;

use figures::{parse_figures, AnalyzerConfig, FigureCounts, FiguresAnalyzer, FiguresError};
use image::DynamicImage;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Figures(#[from] FiguresError),
    #[error("Failed to read image {path}: {source}")]
    Image {
        path: String,
        source: image::ImageError,
    },
    #[error("Failed to write image {path}: {source}")]
    Save {
        path: String,
        source: image::ImageError,
    },
}

/// Load the analyzer config from an optional file, then apply flag overrides
pub fn load_config(path: Option<&Path>, tolerance: Option<f64>) -> Result<AnalyzerConfig, CliError> {
    let mut config = match path {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    Ok(config)
}

pub fn build_analyzer(path: Option<&Path>, tolerance: Option<f64>) -> Result<FiguresAnalyzer, CliError> {
    let config = load_config(path, tolerance)?;
    Ok(FiguresAnalyzer::from_config(&config)?)
}

pub fn load_image(path: &Path) -> Result<DynamicImage, CliError> {
    image::open(path).map_err(|source| CliError::Image {
        path: path.display().to_string(),
        source,
    })
}

/// Recolor the named figures of `image` and write the result to `output`.
///
/// Names are checked before the image is decoded.
pub fn fill_image<S: AsRef<str>>(
    image: &Path,
    output: &Path,
    names: &[S],
    config: Option<&Path>,
    tolerance: Option<f64>,
) -> Result<(), CliError> {
    let selected = parse_figures(names)?;
    let analyzer = build_analyzer(config, tolerance)?;
    let input = load_image(image)?;
    info!("Filling {:?} in {:?}", selected, image);

    let colored = analyzer.fill_figures(&input, &selected)?;
    colored.save(output).map_err(|source| CliError::Save {
        path: output.display().to_string(),
        source,
    })?;
    info!("Saved {:?}", output);
    Ok(())
}

pub fn format_counts(counts: &FigureCounts) -> String {
    format!(
        "circle={} rectangle={} triangle={}",
        counts.circle, counts.rectangle, counts.triangle
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_override() {
        let config = load_config(None, Some(0.1)).unwrap();
        assert_eq!(config.tolerance, 0.1);
        assert_eq!(config.circle_color, [255, 0, 0]);
    }

    #[test]
    fn test_invalid_tolerance_is_reported() {
        assert!(matches!(
            build_analyzer(None, Some(-0.5)),
            Err(CliError::Figures(FiguresError::InvalidTolerance(_)))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(Some(Path::new("does/not/exist.toml")), None);
        assert!(matches!(result, Err(CliError::Figures(FiguresError::Io(_)))));
    }

    #[test]
    fn test_fill_rejects_names_before_reading_image() {
        let result = fill_image(
            Path::new("does/not/exist.png"),
            Path::new("out.png"),
            &["circle", "star"],
            None,
            None,
        );
        match result {
            Err(CliError::Figures(FiguresError::UnknownFigures(names))) => {
                assert_eq!(names, vec!["star"])
            }
            other => panic!("Expected UnknownFigures, got {other:?}"),
        }
    }

    #[test]
    fn test_fill_missing_image() {
        let result = fill_image(
            Path::new("does/not/exist.png"),
            Path::new("out.png"),
            &["circle"],
            None,
            None,
        );
        assert!(matches!(result, Err(CliError::Image { .. })));
    }

    #[test]
    fn test_format_counts() {
        let counts = FigureCounts { circle: 2, rectangle: 0, triangle: 5 };
        assert_eq!(format_counts(&counts), "circle=2 rectangle=0 triangle=5");
    }
}
