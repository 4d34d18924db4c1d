//! Persistence adapter.
//!
//! Stores execute single parameterized statements and hand back rows or
//! affected-row counts. They hold no state of their own beyond the pool.

mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

use async_trait::async_trait;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::models::department::Department;
use crate::models::employee::Employee;

pub const EMPLOYEES_DEPARTMENT_FK: &str = "fk_employees_department";
pub const EMPLOYEES_MANAGER_FK: &str = "fk_employees_manager";
pub const EMPLOYEES_SALARY_CHECK: &str = "chk_employees_salary";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("foreign key violation on {constraint}")]
    ForeignKeyViolation { constraint: String },
    #[error("unique violation on {constraint}")]
    UniqueViolation { constraint: String },
    #[error("check violation on {constraint}")]
    CheckViolation { constraint: String },
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation { constraint };
            }
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation { constraint };
            }
            if db_err.is_check_violation() {
                return StoreError::CheckViolation { constraint };
            }
        }
        StoreError::Database(err)
    }
}

#[async_trait]
pub trait DepartmentStore: Send + Sync {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError>;

    async fn fetch_department(&self, d_no: Uuid) -> Result<Option<Department>, StoreError>;

    /// Returns the number of rows inserted.
    async fn insert_department(&self, department: &Department) -> Result<u64, StoreError>;

    /// Writes every column of the row keyed by `department.d_no`.
    async fn update_department(&self, department: &Department) -> Result<u64, StoreError>;

    async fn delete_department(&self, d_no: Uuid) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn fetch_employee(&self, e_no: Uuid) -> Result<Option<Employee>, StoreError>;

    async fn insert_employee(&self, employee: &Employee) -> Result<u64, StoreError>;

    async fn update_employee(&self, employee: &Employee) -> Result<u64, StoreError>;

    async fn delete_employee(&self, e_no: Uuid) -> Result<u64, StoreError>;
}

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = config.statement_timeout.as_millis();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if statement_timeout > 0 {
                    conn.execute(format!("SET statement_timeout = {}", statement_timeout).as_str())
                        .await?;
                }
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    info!(
        "Database pool ready (max_connections={}, statement_timeout={}ms)",
        config.max_connections, statement_timeout
    );
    Ok(pool)
}

const CREATE_DEPARTMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    d_no UUID PRIMARY KEY,
    d_name TEXT NOT NULL,
    dept_hod TEXT NOT NULL
)
"#;

const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    e_no UUID PRIMARY KEY,
    e_name TEXT NOT NULL,
    salary DOUBLE PRECISION NOT NULL,
    d_no UUID NOT NULL,
    mgr_no UUID NULL,
    date_of_join DATE NOT NULL,
    designation TEXT NOT NULL,
    address TEXT NULL,
    city TEXT NULL,
    pincode TEXT NULL,
    CONSTRAINT chk_employees_salary CHECK (salary >= 0),
    CONSTRAINT fk_employees_department FOREIGN KEY (d_no) REFERENCES departments (d_no),
    CONSTRAINT fk_employees_manager FOREIGN KEY (mgr_no) REFERENCES employees (e_no) ON DELETE SET NULL
)
"#;

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_DEPARTMENTS).execute(pool).await?;
    sqlx::query(CREATE_EMPLOYEES).execute(pool).await?;
    info!("Database schema is in place");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_the_constraints_the_repositories_match_on() {
        assert!(CREATE_EMPLOYEES.contains(EMPLOYEES_DEPARTMENT_FK));
        assert!(CREATE_EMPLOYEES.contains(EMPLOYEES_MANAGER_FK));
        assert!(CREATE_EMPLOYEES.contains(EMPLOYEES_SALARY_CHECK));
    }

    #[test]
    fn driver_errors_without_a_database_cause_stay_generic() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Database(sqlx::Error::PoolTimedOut)
        ));
    }
}
