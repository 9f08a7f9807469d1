//! Schedules repository (recurring working hours, date-specific overrides)

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::schedule::{CustomWorkingHours, WorkingHours},
};

#[derive(Clone)]
pub struct SchedulesRepository {
    pool: Pool<Postgres>,
}

impl SchedulesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // ---- Recurring working hours ----

    /// List all working hours of a business
    pub async fn list_working_hours(&self, business_id: i32) -> AppResult<Vec<WorkingHours>> {
        let rows = sqlx::query_as::<_, WorkingHours>(
            "SELECT * FROM working_hours WHERE business_id = $1 ORDER BY day_of_week, start_time",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List working hours of a business for one ISO weekday (1 = Monday .. 7 = Sunday)
    pub async fn working_hours_for_day(&self, business_id: i32, day_of_week: i16) -> AppResult<Vec<WorkingHours>> {
        let rows = sqlx::query_as::<_, WorkingHours>(
            "SELECT * FROM working_hours WHERE business_id = $1 AND day_of_week = $2 ORDER BY start_time",
        )
        .bind(business_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a recurring working-hours interval
    pub async fn create_working_hours(
        &self,
        business_id: i32,
        day_of_week: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<WorkingHours> {
        let row = sqlx::query_as::<_, WorkingHours>(
            r#"
            INSERT INTO working_hours (business_id, day_of_week, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a recurring working-hours interval
    pub async fn delete_working_hours(&self, business_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM working_hours WHERE id = $1 AND business_id = $2")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Working hours {} not found", id)));
        }
        Ok(())
    }

    // ---- Date-specific overrides ----

    /// Get the override for a date, if any. At most one row exists per
    /// (business, date), enforced by a unique constraint.
    pub async fn custom_for_date(&self, business_id: i32, date: NaiveDate) -> AppResult<Option<CustomWorkingHours>> {
        let row = sqlx::query_as::<_, CustomWorkingHours>(
            "SELECT * FROM custom_working_hours WHERE business_id = $1 AND work_date = $2",
        )
        .bind(business_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List overrides in a date range
    pub async fn custom_in_range(
        &self,
        business_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<CustomWorkingHours>> {
        let rows = sqlx::query_as::<_, CustomWorkingHours>(
            r#"
            SELECT * FROM custom_working_hours
            WHERE business_id = $1 AND work_date >= $2 AND work_date <= $3
            ORDER BY work_date
            "#,
        )
        .bind(business_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List overrides, optionally filtered by date range
    pub async fn list_custom(
        &self,
        business_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<CustomWorkingHours>> {
        let mut conditions = vec!["business_id = $1".to_string()];
        let mut idx = 2;

        if start_date.is_some() {
            conditions.push(format!("work_date >= ${}", idx));
            idx += 1;
        }
        if end_date.is_some() {
            conditions.push(format!("work_date <= ${}", idx));
        }

        let query = format!(
            "SELECT * FROM custom_working_hours WHERE {} ORDER BY work_date",
            conditions.join(" AND ")
        );

        let mut builder = sqlx::query_as::<_, CustomWorkingHours>(&query).bind(business_id);
        if let Some(sd) = start_date { builder = builder.bind(sd); }
        if let Some(ed) = end_date { builder = builder.bind(ed); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Create or replace the override for a date
    pub async fn upsert_custom(
        &self,
        business_id: i32,
        work_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<CustomWorkingHours> {
        let row = sqlx::query_as::<_, CustomWorkingHours>(
            r#"
            INSERT INTO custom_working_hours (business_id, work_date, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (business_id, work_date)
            DO UPDATE SET start_time = EXCLUDED.start_time,
                          end_time = EXCLUDED.end_time,
                          modif_date = NOW()
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(work_date)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete the override for a date
    pub async fn delete_custom(&self, business_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM custom_working_hours WHERE id = $1 AND business_id = $2")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Custom working hours {} not found", id)));
        }
        Ok(())
    }
}
