//! In-memory stores used by the repository and handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{
    DepartmentStore, EmployeeStore, StoreError, EMPLOYEES_DEPARTMENT_FK, EMPLOYEES_MANAGER_FK,
    EMPLOYEES_SALARY_CHECK,
};
use crate::models::department::Department;
use crate::models::employee::Employee;

#[derive(Default)]
struct Tables {
    departments: BTreeMap<Uuid, Department>,
    employees: BTreeMap<Uuid, Employee>,
}

/// Mirrors the constraints of the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tables {
    fn check_employee(&self, employee: &Employee) -> Result<(), StoreError> {
        if employee.salary < 0.0 {
            return Err(StoreError::CheckViolation {
                constraint: EMPLOYEES_SALARY_CHECK.to_string(),
            });
        }
        if !self.departments.contains_key(&employee.d_no) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: EMPLOYEES_DEPARTMENT_FK.to_string(),
            });
        }
        if let Some(mgr_no) = employee.mgr_no {
            if mgr_no != employee.e_no && !self.employees.contains_key(&mgr_no) {
                return Err(StoreError::ForeignKeyViolation {
                    constraint: EMPLOYEES_MANAGER_FK.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DepartmentStore for MemoryStore {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        let tables = self.tables.lock().unwrap();
        let mut departments: Vec<Department> = tables.departments.values().cloned().collect();
        departments.sort_by(|a, b| a.d_name.cmp(&b.d_name).then(a.d_no.cmp(&b.d_no)));
        Ok(departments)
    }

    async fn fetch_department(&self, d_no: Uuid) -> Result<Option<Department>, StoreError> {
        Ok(self.tables.lock().unwrap().departments.get(&d_no).cloned())
    }

    async fn insert_department(&self, department: &Department) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.departments.contains_key(&department.d_no) {
            return Err(StoreError::UniqueViolation {
                constraint: "departments_pkey".to_string(),
            });
        }
        tables.departments.insert(department.d_no, department.clone());
        Ok(1)
    }

    async fn update_department(&self, department: &Department) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.departments.get_mut(&department.d_no) {
            Some(row) => {
                *row = department.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_department(&self, d_no: Uuid) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.employees.values().any(|e| e.d_no == d_no) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: EMPLOYEES_DEPARTMENT_FK.to_string(),
            });
        }
        Ok(tables.departments.remove(&d_no).map_or(0, |_| 1))
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let tables = self.tables.lock().unwrap();
        let mut employees: Vec<Employee> = tables.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.e_name.cmp(&b.e_name).then(a.e_no.cmp(&b.e_no)));
        Ok(employees)
    }

    async fn fetch_employee(&self, e_no: Uuid) -> Result<Option<Employee>, StoreError> {
        Ok(self.tables.lock().unwrap().employees.get(&e_no).cloned())
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.employees.contains_key(&employee.e_no) {
            return Err(StoreError::UniqueViolation {
                constraint: "employees_pkey".to_string(),
            });
        }
        tables.check_employee(employee)?;
        tables.employees.insert(employee.e_no, employee.clone());
        Ok(1)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.employees.contains_key(&employee.e_no) {
            return Ok(0);
        }
        tables.check_employee(employee)?;
        tables.employees.insert(employee.e_no, employee.clone());
        Ok(1)
    }

    async fn delete_employee(&self, e_no: Uuid) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.employees.remove(&e_no).is_none() {
            return Ok(0);
        }
        // ON DELETE SET NULL
        for report in tables.employees.values_mut() {
            if report.mgr_no == Some(e_no) {
                report.mgr_no = None;
            }
        }
        Ok(1)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl DepartmentStore for FailingStore {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_department(&self, _d_no: Uuid) -> Result<Option<Department>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_department(&self, _department: &Department) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_department(&self, _department: &Department) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_department(&self, _d_no: Uuid) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_employee(&self, _e_no: Uuid) -> Result<Option<Employee>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_employee(&self, _employee: &Employee) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_employee(&self, _employee: &Employee) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_employee(&self, _e_no: Uuid) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
