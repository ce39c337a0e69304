// 🏗️ Record Parser - one raw line → typed Record or rejection
//
// Line shapes:
//   Manager,<id:int>,<name>,<salary:float>,<department>
//   Employee,<id:int>,<name>,<salary:float|empty>,<managerId:int>
//
// The parser only checks shape and numbers. Linking an employee to its
// manager happens in the registry.

use crate::entities::{Employee, Manager, Record};
use crate::error::LineError;

/// Fields every line must have
pub const FIELD_COUNT: usize = 5;

/// Salary returned by `parse_salary` for values that must be rejected
pub const REJECTED_SALARY: f64 = -1.0;

// ============================================================================
// RECORD KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Manager,
    Employee,
}

impl RecordKind {
    /// Exact match on the trimmed first field
    pub fn detect(field: &str) -> Option<RecordKind> {
        match field.trim() {
            "Manager" => Some(RecordKind::Manager),
            "Employee" => Some(RecordKind::Employee),
            _ => None,
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse one raw line
///
/// # Returns
/// * `Ok(Record)` - well-formed manager or employee with salary >= 0
/// * `Err(LineError)` - wrong field count, unknown kind, bad number or
///   negative salary
pub fn parse_line(line: &str) -> Result<Record, LineError> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let kind = RecordKind::detect(fields[0]).ok_or_else(|| LineError::UnknownKind {
        kind: fields[0].trim().to_string(),
    })?;

    match kind {
        RecordKind::Manager => parse_manager(&fields),
        RecordKind::Employee => parse_employee(&fields),
    }
}

/// Salary rule for employee lines
///
/// Empty → 0. Unparsable or negative → `REJECTED_SALARY`.
pub fn parse_salary(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    match parse_real(raw) {
        Some(salary) if salary < 0.0 => REJECTED_SALARY,
        Some(salary) => salary,
        None => REJECTED_SALARY,
    }
}

fn parse_manager(fields: &[&str]) -> Result<Record, LineError> {
    let id = parse_int(fields[1], "id")?;
    let name = fields[2].trim();
    let salary = parse_real(fields[3].trim()).ok_or_else(|| LineError::InvalidNumber {
        field: "salary",
        value: fields[3].trim().to_string(),
    })?;
    let department = fields[4].trim();

    if salary < 0.0 {
        return Err(LineError::NegativeSalary { salary });
    }

    Ok(Record::Manager(Manager::new(id, name, salary, department)))
}

fn parse_employee(fields: &[&str]) -> Result<Record, LineError> {
    let id = parse_int(fields[1], "id")?;
    let name = fields[2].trim();
    let salary = parse_salary(fields[3]);
    let manager_id = parse_int(fields[4], "manager id")?;

    if salary < 0.0 {
        let raw = fields[3].trim();
        return Err(match parse_real(raw) {
            Some(salary) => LineError::NegativeSalary { salary },
            None => LineError::InvalidNumber {
                field: "salary",
                value: raw.to_string(),
            },
        });
    }

    Ok(Record::Employee {
        employee: Employee::new(id, name, salary),
        manager_id,
    })
}

/// Split on commas, dropping trailing empty fields
///
/// `Manager,1,Alice,5000,` therefore has four fields, while an empty
/// salary in the middle of an employee line is kept.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_int(raw: &str, field: &'static str) -> Result<i32, LineError> {
    let raw = raw.trim();
    raw.parse::<i32>().map_err(|_| LineError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Finite reals only; `NaN` and `inf` are not salaries
fn parse_real(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// TESTS
// ============================================================================
