//! Employee and roster models.
//!
//! The roster is the fixed set of employees a report is generated for. It is
//! built once, validated, and then passed by reference into the report
//! builder; nothing mutates it during a run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Numeric badge identifier used by the time clock.
pub type EmployeeId = i64;

/// Represents an employee known to the time clock.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Employee;
///
/// let employee = Employee::new("Eve", 2);
/// assert_eq!(employee.name, "Eve");
/// assert_eq!(employee.id, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, also used to order the presence grid.
    pub name: String,
    /// Badge identifier as it appears in the punch log.
    pub id: EmployeeId,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(name: impl Into<String>, id: EmployeeId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// The validated, immutable set of employees for a run.
///
/// Employees keep their declaration order, which is the order of the
/// per-employee detail sections in a report. The presence grid uses
/// [`Roster::sorted_by_name`] instead.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Employee, Roster};
///
/// let roster = Roster::new(vec![Employee::new("John", 1), Employee::new("Eve", 2)])?;
/// assert!(roster.contains(2));
/// assert!(!roster.contains(3));
/// assert_eq!(roster.sorted_by_name()[0].name, "Eve");
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Validates and creates a roster.
    ///
    /// Fails with [`EngineError::InvalidRoster`] when the list is empty or
    /// when an id or a name appears twice.
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        if employees.is_empty() {
            return Err(EngineError::InvalidRoster {
                message: "roster must contain at least one employee".to_string(),
            });
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for employee in &employees {
            if !ids.insert(employee.id) {
                return Err(EngineError::InvalidRoster {
                    message: format!("duplicate employee id {}", employee.id),
                });
            }
            if !names.insert(employee.name.as_str()) {
                return Err(EngineError::InvalidRoster {
                    message: format!("duplicate employee name '{}'", employee.name),
                });
            }
        }

        Ok(Self { employees })
    }

    /// Returns the employees in declaration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the employees ordered alphabetically by name.
    pub fn sorted_by_name(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Returns true if the id belongs to a rostered employee.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of rostered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Always false for a validated roster; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
