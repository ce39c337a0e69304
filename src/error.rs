// ⚠️ Error types - line-level rejections + configuration failures
//
// Line errors are recovered locally (the line goes to the invalid set).
// Config errors are fatal and abort the run before any parsing.

use thiserror::Error;

// ============================================================================
// LINE ERRORS
// ============================================================================

/// Why a raw input line was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("expected 5 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("unknown record kind: {kind:?}")]
    UnknownKind { kind: String },

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("negative salary: {salary}")]
    NegativeSalary { salary: f64 },

    #[error("unknown manager id: {manager_id}")]
    UnknownManager { manager_id: i32 },
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for --sort: {value:?}. Allowed values: name, salary")]
    InvalidSort { value: String },

    #[error("invalid value for --order: {value:?}. Allowed values: asc, desc")]
    InvalidOrder { value: String },

    #[error("invalid value for --output: {value:?}. Allowed values: console, file")]
    InvalidOutput { value: String },

    #[error("invalid value for --format: {value:?}. Allowed values: text, json")]
    InvalidFormat { value: String },

    #[error("--output=file requires a path given with --path")]
    MissingPath,

    #[error("--path cannot be used without --output=file")]
    UnexpectedPath,
}
