// 👤 Staff entities - Employee, Manager, and the parsed Record variant
//
// A manager is not an employee subtype here. The two shapes differ in what
// they link to: an employee points at a manager id, a manager owns a
// department name. `Record` carries that distinction.

use serde::{Deserialize, Serialize};

// ============================================================================
// EMPLOYEE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i32, name: impl Into<String>, salary: f64) -> Self {
        Employee {
            id,
            name: name.into(),
            salary,
        }
    }

    /// Strict validity: positive salary and a non-empty name
    ///
    /// Not an acceptance rule. The parser accepts zero salaries and empty
    /// names; this is only used to flag such records in the logs.
    pub fn is_valid(&self) -> bool {
        self.salary > 0.0 && !self.name.is_empty()
    }
}

// ============================================================================
// MANAGER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub id: i32,
    pub name: String,
    pub salary: f64,

    /// Department this manager heads
    pub department: String,
}

impl Manager {
    pub fn new(id: i32, name: impl Into<String>, salary: f64, department: impl Into<String>) -> Self {
        Manager {
            id,
            name: name.into(),
            salary,
            department: department.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.salary > 0.0 && !self.name.is_empty()
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One accepted input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Record {
    Manager(Manager),
    Employee {
        employee: Employee,

        /// Used once to place the employee, then dropped
        manager_id: i32,
    },
}

impl Record {
    pub fn id(&self) -> i32 {
        match self {
            Record::Manager(m) => m.id,
            Record::Employee { employee, .. } => employee.id,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Record::Manager(m) => m.is_valid(),
            Record::Employee { employee, .. } => employee.is_valid(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
