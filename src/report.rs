// 📊 Report Builder - departments → output blocks
//
// Text layout, one block per department in name order:
//
//   Eng
//   Manager,1,Alice,5000.0
//   Employee,2,Bob,3000.0
//   Employee,3,Carol,0.0
//   3, 2666.67
//
// Followed, when there are rejects, by an `Invalid data:` section.

use crate::invalid_lines::InvalidLines;
use crate::registry::Registry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

/// Header line of the rejected-lines section
pub const INVALID_HEADER: &str = "Invalid data:";

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Manager,
    Employee,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Manager => "Manager",
            RowKind::Employee => "Employee",
        }
    }
}

/// One person line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub kind: RowKind,
    pub id: i32,
    pub name: String,
    pub salary: f64,
}

impl ReportRow {
    /// `Kind,id,name,salary`
    pub fn render(&self) -> String {
        format!(
            "{},{},{},{}",
            self.kind.as_str(),
            self.id,
            self.name,
            format_salary(self.salary)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentBlock {
    pub name: String,
    pub manager: ReportRow,
    pub employees: Vec<ReportRow>,
    pub employee_count: usize,
    pub average_salary: f64,
}

impl DepartmentBlock {
    /// `count, average` with the average at two decimals
    pub fn summary_line(&self) -> String {
        format!(
            "{}, {}",
            self.employee_count,
            format_half_up(self.average_salary, 2)
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub departments: Vec<DepartmentBlock>,
}

impl Report {
    /// Snapshot the registry, keeping each department's current employee order
    pub fn build(registry: &Registry) -> Self {
        let departments = registry
            .departments()
            .map(|dept| {
                let manager = dept.manager();
                DepartmentBlock {
                    name: dept.name().to_string(),
                    manager: ReportRow {
                        kind: RowKind::Manager,
                        id: manager.id,
                        name: manager.name.clone(),
                        salary: manager.salary,
                    },
                    employees: dept
                        .employees()
                        .iter()
                        .map(|e| ReportRow {
                            kind: RowKind::Employee,
                            id: e.id,
                            name: e.name.clone(),
                            salary: e.salary,
                        })
                        .collect(),
                    employee_count: dept.employee_count(),
                    average_salary: dept.average_salary(),
                }
            })
            .collect();

        Report { departments }
    }

    /// Render the text layout, one line per entry
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.departments {
            lines.push(block.name.clone());
            lines.push(block.manager.render());
            lines.extend(block.employees.iter().map(ReportRow::render));
            lines.push(block.summary_line());
        }
        lines
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Pretty JSON with the report and the rejected lines
    pub fn write_json<W: Write>(&self, writer: &mut W, invalid: &InvalidLines) -> Result<()> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            departments: &'a [DepartmentBlock],
            invalid_lines: &'a InvalidLines,
        }

        let doc = JsonReport {
            departments: &self.departments,
            invalid_lines: invalid,
        };
        serde_json::to_writer_pretty(&mut *writer, &doc).context("Failed to serialize report")?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Write the rejected-lines section (header + lines verbatim)
pub fn write_invalid_section<W: Write>(
    writer: &mut W,
    invalid: &InvalidLines,
    leading_blank: bool,
) -> io::Result<()> {
    if leading_blank {
        writeln!(writer)?;
    }
    writeln!(writer, "{}", INVALID_HEADER)?;
    for line in invalid.iter() {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

// ============================================================================
// READING REPORTS BACK
// ============================================================================

/// Parse the person rows of a text report
///
/// Department names and summary lines are skipped. Reading stops at the
/// rejected-lines header since those lines are raw input, not report rows.
pub fn read_report_rows<R: Read>(reader: R) -> Result<Vec<ReportRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();

    for (line_num, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read report line {}", line_num + 1))?;

        if record.get(0) == Some(INVALID_HEADER) {
            break;
        }
        if record.len() != 4 {
            continue;
        }

        let kind = match record.get(0) {
            Some("Manager") => RowKind::Manager,
            Some("Employee") => RowKind::Employee,
            _ => continue,
        };

        let id = record[1]
            .parse::<i32>()
            .with_context(|| format!("Bad id on report line {}", line_num + 1))?;
        let salary = record[3]
            .parse::<f64>()
            .with_context(|| format!("Bad salary on report line {}", line_num + 1))?;

        rows.push(ReportRow {
            kind,
            id,
            name: record[2].to_string(),
            salary,
        });
    }

    Ok(rows)
}

// ============================================================================
// NUMBER FORMATTING
// ============================================================================

/// Shortest round-trip form with at least one fractional digit (`5000.0`)
///
/// Never uses exponent notation: `1e16` renders as `10000000000000000.0`.
pub fn format_salary(salary: f64) -> String {
    let text = salary.to_string();
    if !salary.is_finite() || text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Decimal round-half-up to `places` fractional digits
///
/// Rounds the shortest decimal representation of `value`, so `1.005`
/// becomes `1.01` and `2666.665` becomes `2666.67`.
pub fn format_half_up(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let int_digits: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_digits: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();

    let negative = value < 0.0 && digits.iter().any(|&d| d != 0);
    let sign = if negative { "-" } else { "" };

    if places == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

// ============================================================================
// TESTS
// ============================================================================
