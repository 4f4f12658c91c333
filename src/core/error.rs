use thiserror::Error;

#[derive(Error, Debug)]
pub enum TacticalError {
    #[error("Unknown unit kind: {0}")]
    UnknownKind(String),

    #[error("Unit kind already registered: {0}")]
    DuplicateKind(String),

    #[error("Invalid template {name}: {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("Position ({x}, {y}) is outside the {width}x{height} terrain grid")]
    InvalidPosition { x: i32, y: i32, width: usize, height: usize },

    #[error("Invalid scale: cell size {width}x{height} must be positive")]
    InvalidScale { width: f32, height: f32 },

    #[error("Invalid attrition: {0}")]
    InvalidAttrition(String),

    #[error("Invalid terrain grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TacticalError>;
