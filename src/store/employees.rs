//! Employee directory.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Keyed access to employee records.
pub trait EmployeeDirectory: Send + Sync {
    /// Looks up one employee.
    fn get(&self, id: Uuid) -> Option<Employee>;

    /// All employees, newest `created_at` first.
    fn list(&self) -> Vec<Employee>;

    /// Stores a new employee and returns it.
    fn insert(&self, employee: Employee) -> Employee;

    /// Replaces an existing record. The stored `id` and `created_at` win.
    fn update(&self, employee: Employee) -> EngineResult<Employee>;

    /// Deletes a record and returns what was removed.
    fn remove(&self, id: Uuid) -> EngineResult<Employee>;
}

/// [`EmployeeDirectory`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: RwLock<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn get(&self, id: Uuid) -> Option<Employee> {
        let employees = self.employees.read().unwrap_or_else(|p| p.into_inner());
        employees.get(&id).cloned()
    }

    fn list(&self) -> Vec<Employee> {
        let employees = self.employees.read().unwrap_or_else(|p| p.into_inner());
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        all
    }

    fn insert(&self, employee: Employee) -> Employee {
        let mut employees = self.employees.write().unwrap_or_else(|p| p.into_inner());
        employees.insert(employee.id, employee.clone());
        employee
    }

    fn update(&self, mut employee: Employee) -> EngineResult<Employee> {
        let mut employees = self.employees.write().unwrap_or_else(|p| p.into_inner());
        let stored = employees
            .get_mut(&employee.id)
            .ok_or(EngineError::EmployeeNotFound {
                employee_id: employee.id,
            })?;

        employee.created_at = stored.created_at;
        *stored = employee.clone();
        Ok(employee)
    }

    fn remove(&self, id: Uuid) -> EngineResult<Employee> {
        let mut employees = self.employees.write().unwrap_or_else(|p| p.into_inner());
        employees
            .remove(&id)
            .ok_or(EngineError::EmployeeNotFound { employee_id: id })
    }
}
