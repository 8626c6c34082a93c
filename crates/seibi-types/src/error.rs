//! Error types for seibi-planner

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown vehicle class: {0}")]
    UnknownVehicleClass(String),

    #[error("Vehicle not registered: {0}")]
    VehicleNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("History store corrupted: {0}")]
    StoreCorrupted(String),
}

pub type Result<T> = std::result::Result<T, Error>;
