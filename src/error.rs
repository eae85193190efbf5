use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    DbError(String),
    SourceNotFound(String),
    Cancelled,
    Timeout(u64),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DbError(message) => write!(f, "storage error: {}", message),
            Error::SourceNotFound(id) => write!(f, "source {} not found", id),
            Error::Cancelled => write!(f, "request cancelled"),
            Error::Timeout(ms) => write!(f, "source fetch timed out after {}ms", ms),
            Error::ConfigError(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::DbError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(feature = "pg-storage")]
impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Self::DbError(err.to_string())
    }
}

#[cfg(feature = "pg-storage")]
impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Self::DbError(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
