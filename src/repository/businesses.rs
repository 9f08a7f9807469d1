//! Businesses repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::business::{Business, CreateBusiness, UpdateBusiness},
};

#[derive(Clone)]
pub struct BusinessesRepository {
    pool: Pool<Postgres>,
}

impl BusinessesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List businesses, optionally filtered by name substring
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Business>> {
        let rows = match search {
            Some(term) => {
                sqlx::query_as::<_, Business>(
                    "SELECT * FROM businesses WHERE name ILIKE $1 ORDER BY name",
                )
                .bind(format!("%{}%", term))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Business>("SELECT * FROM businesses ORDER BY name")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Get a business by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Business> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Business {} not found", id)))
    }

    /// Get a business by slug
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Business> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Business '{}' not found", slug)))
    }

    /// Create a business
    pub async fn create(&self, data: &CreateBusiness, timezone: &str) -> AppResult<Business> {
        let row = sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (name, slug, description, timezone, approval_required, contact_email, contact_phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(timezone)
        .bind(data.approval_required.unwrap_or(false))
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Slug '{}' is already taken", data.slug))
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Update a business
    pub async fn update(&self, id: i32, data: &UpdateBusiness, timezone: Option<&str>) -> AppResult<Business> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.description.is_some() { sets.push(format!("description = ${}", idx)); idx += 1; }
        if timezone.is_some() { sets.push(format!("timezone = ${}", idx)); idx += 1; }
        if data.approval_required.is_some() { sets.push(format!("approval_required = ${}", idx)); idx += 1; }
        if data.contact_email.is_some() { sets.push(format!("contact_email = ${}", idx)); idx += 1; }
        if data.contact_phone.is_some() { sets.push(format!("contact_phone = ${}", idx)); }

        let query = format!(
            "UPDATE businesses SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Business>(&query).bind(now);
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref description) = data.description { builder = builder.bind(description); }
        if let Some(tz) = timezone { builder = builder.bind(tz); }
        if let Some(approval) = data.approval_required { builder = builder.bind(approval); }
        if let Some(ref email) = data.contact_email { builder = builder.bind(email); }
        if let Some(ref phone) = data.contact_phone { builder = builder.bind(phone); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Business {} not found", id)))
    }

    /// Delete a business (cascade deletes everything it owns)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Business {} not found", id)));
        }
        Ok(())
    }
}
