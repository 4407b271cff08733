use thiserror::Error as ThisError;

/// Everything the core can fail with. There are only two shapes:
/// bad input from the caller, or the storage collaborator being unavailable.
/// No retries happen below this boundary.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
