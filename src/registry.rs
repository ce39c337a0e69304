// 📇 Entity Registry - managers by id, departments by name
//
// Resolution rules:
// - A manager id maps to the LAST manager registered with it.
// - A department belongs to the FIRST manager registered with its name.
//
// The two can disagree when ids or department names repeat in the input.
// Employees follow the id map: they land in the department named by the
// current holder of their manager id.

use crate::config::{SortField, SortOrder};
use crate::entities::{Department, Employee, Manager};
use crate::error::LineError;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Registry {
    managers: HashMap<i32, Manager>,

    /// Name-ordered, independent of insertion order
    departments: BTreeMap<String, Department>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a manager under its id, creating its department if new
    ///
    /// Returns true if a department was created.
    pub fn register_manager(&mut self, manager: Manager) -> bool {
        let created = if self.departments.contains_key(&manager.department) {
            debug!(
                department = %manager.department,
                manager_id = manager.id,
                "department already headed, keeping first manager"
            );
            false
        } else {
            self.departments
                .insert(manager.department.clone(), Department::new(manager.clone()));
            true
        };

        if let Some(previous) = self.managers.insert(manager.id, manager) {
            debug!(manager_id = previous.id, "manager id reused, replacing registry entry");
        }

        created
    }

    /// Append an employee to the department of manager `manager_id`
    pub fn place_employee(&mut self, manager_id: i32, employee: Employee) -> Result<(), LineError> {
        let department = self
            .managers
            .get(&manager_id)
            .and_then(|m| self.departments.get_mut(&m.department))
            .ok_or(LineError::UnknownManager { manager_id })?;

        department.add_employee(employee);
        Ok(())
    }

    pub fn manager(&self, id: i32) -> Option<&Manager> {
        self.managers.get(&id)
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.get(name)
    }

    /// Departments in name order
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }

    pub fn sort_departments(&mut self, field: SortField, order: SortOrder) {
        for department in self.departments.values_mut() {
            department.sort_employees(field, order);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
