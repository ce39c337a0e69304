// Staff Report - Core Library
// Parses a staff file, links employees to their managers' departments and
// builds the per-department salary report. Used by the CLI and by tests.

pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod invalid_lines;
pub mod parser;
pub mod registry;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use config::{OutputFormat, OutputTarget, ReportConfig, SortField, SortOrder, DEFAULT_INPUT};
pub use entities::{Department, Employee, Manager, Record};
pub use error::{ConfigError, LineError};
pub use input::read_lines;
pub use invalid_lines::InvalidLines;
pub use parser::{parse_line, parse_salary, RecordKind};
pub use registry::Registry;
pub use report::{
    format_half_up, read_report_rows, write_invalid_section, DepartmentBlock, Report, ReportRow,
    RowKind, INVALID_HEADER,
};
pub use session::{IngestSummary, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
