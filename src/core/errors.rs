use thiserror::Error;

#[derive(Error, Debug)]
pub enum GundelikError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("GundelikError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for GundelikError {
    fn from(error: std::io::Error) -> Self {
        GundelikError::Io(Box::new(error))
    }
}
