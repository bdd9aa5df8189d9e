//! Errors raised while loading configuration or persisting reports.
//!
//! Game outcomes (illegal moves, timeouts) are never errors; they end up in
//! [`crate::GameResult`].

/// Harness errors
#[derive(thiserror::Error, Debug)]
pub enum TournamentError {
    /// File I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::MatchConfig`]
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Report could not be written or read back
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds values no match can run with
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
