// 🏢 Department aggregate - one manager + the employees placed under it
//
// The manager is fixed at creation. Employees keep insertion order until
// `sort_employees` is called.

use crate::config::{SortField, SortOrder};
use crate::entities::person::{Employee, Manager};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    name: String,
    manager: Manager,
    employees: Vec<Employee>,
}

impl Department {
    /// Create a department headed by `manager`, named after its department
    pub fn new(manager: Manager) -> Self {
        Department {
            name: manager.department.clone(),
            manager,
            employees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Append an employee. No dedup by id.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Members including the manager, so never zero
    pub fn employee_count(&self) -> usize {
        self.employees.len() + 1
    }

    pub fn total_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum::<f64>() + self.manager.salary
    }

    pub fn average_salary(&self) -> f64 {
        self.total_salary() / self.employee_count() as f64
    }

    /// Stable sort of the employee list; the manager is not part of it
    pub fn sort_employees(&mut self, field: SortField, order: SortOrder) {
        let compare = |a: &Employee, b: &Employee| -> Ordering {
            match field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::Salary => a.salary.total_cmp(&b.salary),
            }
        };

        match order {
            SortOrder::Asc => self.employees.sort_by(compare),
            SortOrder::Desc => self.employees.sort_by(|a, b| compare(b, a)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
