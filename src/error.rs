//! Error types for folio
//!
//! Domain-specific error enums using thiserror. Each layer gets its own enum;
//! `FolioError` is the cloneable umbrella carried by `AppEvent::Error`.

/// Failure to turn a `(start, end)` pair into a duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("invalid date format: {0:?}")]
    InvalidFormat(String),
    #[error("end date {end:?} precedes start date {start:?}")]
    InvalidRange { start: String, end: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CvError {
    #[error("no CV configured")]
    NotConfigured,
    #[error("CV file not found: {0}")]
    NotFound(String),
    #[error("failed to copy CV to {path}: {source}")]
    Copy {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatcherError {
    #[error("notify: {0}")]
    Notify(String),
    #[error("I/O: {0}")]
    Io(String),
}

impl From<notify::Error> for WatcherError {
    fn from(e: notify::Error) -> Self {
        WatcherError::Notify(e.to_string())
    }
}

impl From<std::io::Error> for WatcherError {
    fn from(e: std::io::Error) -> Self {
        WatcherError::Io(e.to_string())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FolioError {
    #[error("content: {0}")]
    Content(String),
    #[error("cv: {0}")]
    Cv(String),
    #[error(transparent)]
    Watcher(#[from] WatcherError),
}

impl From<ContentError> for FolioError {
    fn from(e: ContentError) -> Self {
        FolioError::Content(e.to_string())
    }
}

impl From<CvError> for FolioError {
    fn from(e: CvError) -> Self {
        FolioError::Cv(e.to_string())
    }
}
