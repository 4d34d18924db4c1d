use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{DepartmentStore, EmployeeStore, StoreError};
use crate::models::department::Department;
use crate::models::employee::Employee;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentStore for PgStore {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT d_no, d_name, dept_hod FROM departments ORDER BY d_name, d_no",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(departments)
    }

    async fn fetch_department(&self, d_no: Uuid) -> Result<Option<Department>, StoreError> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT d_no, d_name, dept_hod FROM departments WHERE d_no = $1",
        )
        .bind(d_no)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    async fn insert_department(&self, department: &Department) -> Result<u64, StoreError> {
        let result = sqlx::query("INSERT INTO departments (d_no, d_name, dept_hod) VALUES ($1, $2, $3)")
            .bind(department.d_no)
            .bind(&department.d_name)
            .bind(&department.dept_hod)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_department(&self, department: &Department) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE departments SET d_name = $1, dept_hod = $2 WHERE d_no = $3")
            .bind(&department.d_name)
            .bind(&department.dept_hod)
            .bind(department.d_no)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_department(&self, d_no: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM departments WHERE d_no = $1")
            .bind(d_no)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

const EMPLOYEE_COLUMNS: &str =
    "e_no, e_name, salary, d_no, mgr_no, date_of_join, designation, address, city, pincode";

#[async_trait]
impl EmployeeStore for PgStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("SELECT {} FROM employees ORDER BY e_name, e_no", EMPLOYEE_COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn fetch_employee(&self, e_no: Uuid) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {} FROM employees WHERE e_no = $1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(e_no)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<u64, StoreError> {
        let sql = format!(
            "INSERT INTO employees ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
            EMPLOYEE_COLUMNS
        );
        let result = sqlx::query(&sql)
            .bind(employee.e_no)
            .bind(&employee.e_name)
            .bind(employee.salary)
            .bind(employee.d_no)
            .bind(employee.mgr_no)
            .bind(employee.date_of_join)
            .bind(&employee.designation)
            .bind(&employee.address)
            .bind(&employee.city)
            .bind(&employee.pincode)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_employee(&self, employee: &Employee) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                e_name = $1,
                salary = $2,
                d_no = $3,
                mgr_no = $4,
                date_of_join = $5,
                designation = $6,
                address = $7,
                city = $8,
                pincode = $9
            WHERE e_no = $10
            "#,
        )
        .bind(&employee.e_name)
        .bind(employee.salary)
        .bind(employee.d_no)
        .bind(employee.mgr_no)
        .bind(employee.date_of_join)
        .bind(&employee.designation)
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.pincode)
        .bind(employee.e_no)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_employee(&self, e_no: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE e_no = $1")
            .bind(e_no)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
