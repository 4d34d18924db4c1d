use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::db::{DepartmentStore, StoreError};
use crate::errors::AppError;
use crate::models::department::{Department, DepartmentPatch};

pub struct DepartmentRepository {
    store: Arc<dyn DepartmentStore>,
}

fn not_found(d_no: Uuid) -> AppError {
    AppError::NotFound(format!("Department {} not found", d_no))
}

fn check_required(department: &Department) -> Result<(), AppError> {
    if department.d_name.trim().is_empty() {
        return Err(AppError::Validation("d_name is required".to_string()));
    }
    if department.dept_hod.trim().is_empty() {
        return Err(AppError::Validation("dept_hod is required".to_string()));
    }
    Ok(())
}

impl DepartmentRepository {
    pub fn new(store: Arc<dyn DepartmentStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.store.fetch_departments().await?)
    }

    pub async fn get(&self, d_no: Uuid) -> Result<Department, AppError> {
        self.store
            .fetch_department(d_no)
            .await?
            .ok_or_else(|| not_found(d_no))
    }

    pub async fn add(&self, department: &Department) -> Result<(), AppError> {
        check_required(department)?;

        self.store
            .insert_department(department)
            .await
            .map_err(|err| match err {
                StoreError::UniqueViolation { .. } => {
                    AppError::Conflict(format!("Department {} already exists", department.d_no))
                }
                other => other.into(),
            })?;

        debug!("Inserted department {}", department.d_no);
        Ok(())
    }

    pub async fn update(&self, d_no: Uuid, patch: DepartmentPatch) -> Result<Department, AppError> {
        let merged = self.get(d_no).await?.merge(patch);
        check_required(&merged)?;

        if self.store.update_department(&merged).await? == 0 {
            return Err(not_found(d_no));
        }

        debug!("Updated department {}", d_no);
        Ok(merged)
    }

    pub async fn delete(&self, d_no: Uuid) -> Result<(), AppError> {
        let deleted = self
            .store
            .delete_department(d_no)
            .await
            .map_err(|err| match err {
                StoreError::ForeignKeyViolation { .. } => {
                    AppError::Conflict("Department still contains employees".to_string())
                }
                other => other.into(),
            })?;

        if deleted == 0 {
            return Err(not_found(d_no));
        }

        debug!("Deleted department {}", d_no);
        Ok(())
    }
}
