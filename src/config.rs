// ⚙️ Report configuration - typed, validated run options
//
// The CLI hands raw strings over; everything past this module works with
// the enums below.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Input file read when no `--input` is given
pub const DEFAULT_INPUT: &str = "inputFile.txt";

// ============================================================================
// OPTION ENUMS
// ============================================================================

/// Key used to order employees inside a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Salary,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Salary => "salary",
        }
    }
}

impl FromStr for SortField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "salary" => Ok(SortField::Salary),
            other => Err(ConfigError::InvalidSort {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ConfigError::InvalidOrder {
                value: other.to_string(),
            }),
        }
    }
}

/// Where the report goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Console,
    File,
}

impl FromStr for OutputTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(OutputTarget::Console),
            "file" => Ok(OutputTarget::File),
            other => Err(ConfigError::InvalidOutput {
                value: other.to_string(),
            }),
        }
    }
}

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// REPORT CONFIG
// ============================================================================

/// Validated options for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub sort: SortField,
    pub order: SortOrder,
    pub output: OutputTarget,
    pub format: OutputFormat,

    /// Present iff `output == File`
    pub path: Option<PathBuf>,
}

impl ReportConfig {
    /// Validate raw option values
    ///
    /// Checks run in a fixed order: sort, order, output, format, then the
    /// path/output pairing. The first failure wins.
    pub fn new(
        sort: &str,
        order: &str,
        output: &str,
        format: &str,
        path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let sort = sort.parse::<SortField>()?;
        let order = order.parse::<SortOrder>()?;
        let output = output.parse::<OutputTarget>()?;
        let format = format.parse::<OutputFormat>()?;

        match (output, &path) {
            (OutputTarget::File, None) => return Err(ConfigError::MissingPath),
            (OutputTarget::Console, Some(_)) => return Err(ConfigError::UnexpectedPath),
            _ => {}
        }

        Ok(ReportConfig {
            sort,
            order,
            output,
            format,
            path,
        })
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            sort: SortField::Name,
            order: SortOrder::Asc,
            output: OutputTarget::Console,
            format: OutputFormat::Text,
            path: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::new("name", "asc", "console", "text", None).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_file_output_with_path() {
        let config =
            ReportConfig::new("salary", "desc", "file", "text", Some(PathBuf::from("out.txt")))
                .unwrap();

        assert_eq!(config.sort, SortField::Salary);
        assert_eq!(config.order, SortOrder::Desc);
        assert_eq!(config.output, OutputTarget::File);
        assert_eq!(config.path, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_invalid_sort_rejected() {
        let err = ReportConfig::new("age", "asc", "console", "text", None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSort {
                value: "age".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_order_rejected() {
        let err = ReportConfig::new("name", "up", "console", "text", None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrder { .. }));
    }

    #[test]
    fn test_as_str_parses_back() {
        for field in [SortField::Name, SortField::Salary] {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_values_are_case_sensitive() {
        assert!("Name".parse::<SortField>().is_err());
        assert!("DESC".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_file_output_requires_path() {
        let err = ReportConfig::new("name", "asc", "file", "text", None).unwrap_err();
        assert_eq!(err, ConfigError::MissingPath);
    }

    #[test]
    fn test_path_requires_file_output() {
        let err = ReportConfig::new("name", "asc", "console", "text", Some(PathBuf::from("x")))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnexpectedPath);
    }

    #[test]
    fn test_sort_checked_before_path() {
        // Both are wrong; the sort value is reported
        let err = ReportConfig::new("bogus", "asc", "file", "text", None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSort { .. }));
    }
}
