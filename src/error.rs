use thiserror::Error;

pub type Result<T> = std::result::Result<T, YardboardError>;

#[derive(Debug, Error)]
pub enum YardboardError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Invalid vehicle ID: {0}")]
    InvalidVehicleId(String),

    #[error("Unknown vehicle status: {0}")]
    UnknownStatus(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
