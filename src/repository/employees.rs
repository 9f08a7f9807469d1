//! Employees repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
};

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List employees of a business
    pub async fn list_for_business(&self, business_id: i32) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE business_id = $1 ORDER BY display_name",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get an employee by ID, scoped to a business
    pub async fn get_by_id(&self, business_id: i32, id: i32) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE id = $1 AND business_id = $2",
        )
        .bind(id)
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Create an employee
    pub async fn create(&self, business_id: i32, data: &CreateEmployee) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (business_id, display_name, role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(&data.display_name)
        .bind(&data.role)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an employee
    pub async fn update(&self, business_id: i32, id: i32, data: &UpdateEmployee) -> AppResult<Employee> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if data.display_name.is_some() { sets.push(format!("display_name = ${}", idx)); idx += 1; }
        if data.role.is_some() { sets.push(format!("role = ${}", idx)); idx += 1; }
        if data.active.is_some() { sets.push(format!("active = ${}", idx)); }

        if sets.is_empty() {
            return self.get_by_id(business_id, id).await;
        }

        let query = format!(
            "UPDATE employees SET {} WHERE id = {} AND business_id = {} RETURNING *",
            sets.join(", "),
            id,
            business_id
        );

        let mut builder = sqlx::query_as::<_, Employee>(&query);
        if let Some(ref name) = data.display_name { builder = builder.bind(name); }
        if let Some(ref role) = data.role { builder = builder.bind(role); }
        if let Some(active) = data.active { builder = builder.bind(active); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete an employee; appointments keep history via ON DELETE SET NULL
    pub async fn delete(&self, business_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1 AND business_id = $2")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        Ok(())
    }
}
