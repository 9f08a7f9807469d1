//! Ratings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::rating::Rating,
};

#[derive(Clone)]
pub struct RatingsRepository {
    pool: Pool<Postgres>,
}

impl RatingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List ratings of a business, newest first
    pub async fn list_for_business(&self, business_id: i32) -> AppResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE business_id = $1 ORDER BY crea_date DESC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a rating for an appointment
    pub async fn create(
        &self,
        business_id: i32,
        appointment_id: i32,
        guest_id: i32,
        score: i16,
        comment: Option<&str>,
    ) -> AppResult<Rating> {
        let row = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (business_id, appointment_id, guest_id, score, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(appointment_id)
        .bind(guest_id)
        .bind(score)
        .bind(comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Appointment is already rated".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Count and average score for a business; average is None without ratings
    pub async fn summary_for_business(&self, business_id: i32) -> AppResult<(i64, Option<f64>)> {
        let row: (i64, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(*), AVG(score)::float8 FROM ratings WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
