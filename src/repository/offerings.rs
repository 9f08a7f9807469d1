//! Offerings repository for database operations

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::OfferingStatus,
    models::offering::{CreateOffering, Offering, UpdateOffering},
};

#[derive(Clone)]
pub struct OfferingsRepository {
    pool: Pool<Postgres>,
}

impl OfferingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List offerings of a business, optionally restricted to active ones
    pub async fn list_for_business(&self, business_id: i32, active_only: bool) -> AppResult<Vec<Offering>> {
        let rows = if active_only {
            sqlx::query_as::<_, Offering>(
                "SELECT * FROM offerings WHERE business_id = $1 AND status = 'active' ORDER BY name",
            )
            .bind(business_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Offering>(
                "SELECT * FROM offerings WHERE business_id = $1 ORDER BY name",
            )
            .bind(business_id)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows)
    }

    /// Get an offering by ID, scoped to a business
    pub async fn get_by_id(&self, business_id: i32, id: i32) -> AppResult<Offering> {
        sqlx::query_as::<_, Offering>(
            "SELECT * FROM offerings WHERE id = $1 AND business_id = $2",
        )
        .bind(id)
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Offering {} not found", id)))
    }

    /// Create an offering
    pub async fn create(&self, business_id: i32, data: &CreateOffering) -> AppResult<Offering> {
        let row = sqlx::query_as::<_, Offering>(
            r#"
            INSERT INTO offerings (business_id, name, description, duration_minutes, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.duration_minutes)
        .bind(data.price.unwrap_or(Decimal::ZERO))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an offering
    pub async fn update(&self, business_id: i32, id: i32, data: &UpdateOffering) -> AppResult<Offering> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.description.is_some() { sets.push(format!("description = ${}", idx)); idx += 1; }
        if data.duration_minutes.is_some() { sets.push(format!("duration_minutes = ${}", idx)); idx += 1; }
        if data.price.is_some() { sets.push(format!("price = ${}", idx)); idx += 1; }
        if data.status.is_some() { sets.push(format!("status = ${}", idx)); }

        let query = format!(
            "UPDATE offerings SET {} WHERE id = {} AND business_id = {} RETURNING *",
            sets.join(", "),
            id,
            business_id
        );

        let mut builder = sqlx::query_as::<_, Offering>(&query).bind(now);
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref description) = data.description { builder = builder.bind(description); }
        if let Some(duration) = data.duration_minutes { builder = builder.bind(duration); }
        if let Some(price) = data.price { builder = builder.bind(price); }
        if let Some(status) = data.status { builder = builder.bind(status); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Offering {} not found", id)))
    }

    /// Delete an offering, or archive it when appointments reference it
    pub async fn delete_or_archive(&self, business_id: i32, id: i32) -> AppResult<OfferingStatus> {
        let referenced: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM appointments WHERE offering_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if referenced {
            sqlx::query(
                "UPDATE offerings SET status = 'archived', modif_date = NOW() WHERE id = $1 AND business_id = $2",
            )
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await?;
            return Ok(OfferingStatus::Archived);
        }

        let result = sqlx::query("DELETE FROM offerings WHERE id = $1 AND business_id = $2")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Offering {} not found", id)));
        }
        Ok(OfferingStatus::Active)
    }

    /// Count active offerings of a business
    pub async fn count_active(&self, business_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM offerings WHERE business_id = $1 AND status = 'active'",
        )
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
