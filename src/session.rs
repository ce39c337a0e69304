// 🔄 Ingestion Session - per-run context for the parse → link pipeline
//
// Owns the registry and the invalid-line collector. Lines are handled in
// input order: an employee only links if its manager line came earlier.

use crate::config::{SortField, SortOrder};
use crate::entities::Record;
use crate::error::LineError;
use crate::invalid_lines::InvalidLines;
use crate::parser::parse_line;
use crate::registry::Registry;
use serde::Serialize;
use tracing::{debug, info};

/// Counts from one `ingest` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
    invalid: InvalidLines,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and place one raw line
    ///
    /// On rejection the line is stored verbatim in the invalid set and the
    /// reason is returned. Nothing in the registry changes in that case.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), LineError> {
        let result = parse_line(line).and_then(|record| self.apply(record));

        if let Err(reason) = &result {
            debug!(line, %reason, "rejected line");
            self.invalid.insert(line);
        }

        result
    }

    /// Ingest every line in order
    pub fn ingest<I, S>(&mut self, lines: I) -> IngestSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = IngestSummary::default();

        for line in lines {
            match self.ingest_line(line.as_ref()) {
                Ok(()) => summary.accepted += 1,
                Err(_) => summary.rejected += 1,
            }
        }

        info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            departments = self.registry.department_count(),
            "ingestion complete"
        );

        summary
    }

    /// Order every department's employees
    pub fn sort(&mut self, field: SortField, order: SortOrder) {
        self.registry.sort_departments(field, order);
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn invalid_lines(&self) -> &InvalidLines {
        &self.invalid
    }

    fn apply(&mut self, record: Record) -> Result<(), LineError> {
        if !record.is_valid() {
            debug!(id = record.id(), "accepted record with zero salary or empty name");
        }

        match record {
            Record::Manager(manager) => {
                self.registry.register_manager(manager);
                Ok(())
            }
            Record::Employee {
                employee,
                manager_id,
            } => self.registry.place_employee(manager_id, employee),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
