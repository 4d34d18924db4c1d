use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::db::{
    EmployeeStore, StoreError, EMPLOYEES_DEPARTMENT_FK, EMPLOYEES_MANAGER_FK, EMPLOYEES_SALARY_CHECK,
};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePatch};

pub struct EmployeeRepository {
    store: Arc<dyn EmployeeStore>,
}

fn not_found(e_no: Uuid) -> AppError {
    AppError::NotFound(format!("Employee {} not found", e_no))
}

fn check_required(employee: &Employee) -> Result<(), AppError> {
    if employee.e_name.trim().is_empty() {
        return Err(AppError::Validation("e_name is required".to_string()));
    }
    if employee.designation.trim().is_empty() {
        return Err(AppError::Validation("designation is required".to_string()));
    }
    if employee.mgr_no == Some(employee.e_no) {
        return Err(AppError::Validation("An employee cannot be their own manager".to_string()));
    }
    Ok(())
}

/// Names the missing parent row for a failed insert or update.
fn write_error(err: StoreError, employee: &Employee) -> AppError {
    match err {
        StoreError::ForeignKeyViolation { constraint } if constraint == EMPLOYEES_MANAGER_FK => {
            let mgr_no = employee.mgr_no.map(|id| id.to_string()).unwrap_or_default();
            AppError::ForeignKeyViolation(format!("Manager {} does not exist", mgr_no))
        }
        StoreError::ForeignKeyViolation { constraint } if constraint == EMPLOYEES_DEPARTMENT_FK => {
            AppError::ForeignKeyViolation(format!("Department {} does not exist", employee.d_no))
        }
        StoreError::UniqueViolation { .. } => {
            AppError::Conflict(format!("Employee {} already exists", employee.e_no))
        }
        StoreError::CheckViolation { constraint } if constraint == EMPLOYEES_SALARY_CHECK => {
            AppError::Validation("salary must not be negative".to_string())
        }
        other => other.into(),
    }
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.store.fetch_employees().await?)
    }

    pub async fn get(&self, e_no: Uuid) -> Result<Employee, AppError> {
        self.store
            .fetch_employee(e_no)
            .await?
            .ok_or_else(|| not_found(e_no))
    }

    pub async fn add(&self, employee: &Employee) -> Result<(), AppError> {
        check_required(employee)?;

        self.store
            .insert_employee(employee)
            .await
            .map_err(|err| write_error(err, employee))?;

        debug!("Inserted employee {} into department {}", employee.e_no, employee.d_no);
        Ok(())
    }

    pub async fn update(&self, e_no: Uuid, patch: EmployeePatch) -> Result<Employee, AppError> {
        let merged = self.get(e_no).await?.merge(patch);
        check_required(&merged)?;

        let updated = self
            .store
            .update_employee(&merged)
            .await
            .map_err(|err| write_error(err, &merged))?;
        if updated == 0 {
            return Err(not_found(e_no));
        }

        debug!("Updated employee {}", e_no);
        Ok(merged)
    }

    pub async fn delete(&self, e_no: Uuid) -> Result<(), AppError> {
        if self.store.delete_employee(e_no).await? == 0 {
            return Err(not_found(e_no));
        }

        debug!("Deleted employee {}", e_no);
        Ok(())
    }
}
