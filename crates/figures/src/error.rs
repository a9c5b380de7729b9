use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiguresError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Unknown figures {0:?}, available figures are [\"circle\", \"rectangle\", \"triangle\"]")]
    UnknownFigures(Vec<String>),

    #[error("Tolerance must be a finite non-negative fraction, got {0}")]
    InvalidTolerance(f64),

    #[error("Unsupported config format. Please use .toml or .json files")]
    UnsupportedConfigFormat,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FiguresError>;
