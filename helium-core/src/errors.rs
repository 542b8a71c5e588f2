use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeliumError>;

#[derive(Debug, Error)]
pub enum HeliumError {
    /// A request to the display server failed. The backend specific error is kept as source.
    #[error("Display server error: {0}")]
    DisplayServer(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HeliumError {
    pub fn display_server<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::DisplayServer(err.into())
    }
}
