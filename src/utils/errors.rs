use thiserror::Error;

/// Main error type for Coral
#[derive(Error, Debug)]
pub enum CoralError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("UI error: {0}")]
    UIError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),
}
