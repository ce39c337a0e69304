use staff_report::ConfigError;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),
}
