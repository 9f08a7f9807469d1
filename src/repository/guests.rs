//! Guests repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::guest::Guest,
};

#[derive(Clone)]
pub struct GuestsRepository {
    pool: Pool<Postgres>,
}

impl GuestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a guest by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guest {} not found", id)))
    }

    /// List guests of a business
    pub async fn list_for_business(&self, business_id: i32) -> AppResult<Vec<Guest>> {
        let rows = sqlx::query_as::<_, Guest>(
            "SELECT * FROM guests WHERE business_id = $1 ORDER BY last_name, first_name",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count guests of a business
    pub async fn count_for_business(&self, business_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE business_id = $1")
            .bind(business_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
