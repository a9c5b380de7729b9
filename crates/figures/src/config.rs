use std::fs;
use std::path::Path;

use image::Rgb;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    classifier::DEFAULT_TOLERANCE,
    error::{FiguresError, Result},
    types::{Figure, FigureColors},
};

/// Serializable analyzer settings.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Relative error tolerance for the area-ratio tests
    #[schemars(range(min = 0.0))]
    pub tolerance: f64,
    pub circle_color: [u8; 3],
    pub rectangle_color: [u8; 3],
    pub triangle_color: [u8; 3],
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::from_colors(DEFAULT_TOLERANCE, &FigureColors::default())
    }
}

impl AnalyzerConfig {
    pub fn from_colors(tolerance: f64, colors: &FigureColors) -> Self {
        Self {
            tolerance,
            circle_color: colors.get(Figure::Circle).0,
            rectangle_color: colors.get(Figure::Rectangle).0,
            triangle_color: colors.get(Figure::Triangle).0,
        }
    }

    pub fn colors(&self) -> FigureColors {
        FigureColors::new(
            Rgb(self.circle_color),
            Rgb(self.rectangle_color),
            Rgb(self.triangle_color),
        )
    }

    /// Get the JSON schema of the config file
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(AnalyzerConfig)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path_ref),
            Some("json") => Self::from_json_file(path_ref),
            _ => Err(FiguresError::UnsupportedConfigFormat),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
