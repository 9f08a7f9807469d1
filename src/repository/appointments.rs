//! Appointments repository for database operations
//!
//! Booking inserts run inside a transaction holding a per-business advisory
//! lock, with the conflict check re-run under the lock. The partial EXCLUDE
//! constraint on the appointments table remains the final arbiter; a
//! violation maps to `AppError::Conflict` so callers can re-fetch
//! availability and retry.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentDetails, NewAppointment},
    models::enums::AppointmentStatus,
};

/// Advisory lock namespace for booking writes (arbitrary but stable)
const BOOKING_LOCK_NS: i32 = 0x52445a56;

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an appointment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Get an appointment by its public reference
    pub async fn get_by_reference(&self, reference: Uuid) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", reference)))
    }

    /// List appointments of a business with joined display names
    pub async fn list_for_business(
        &self,
        business_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        status: Option<AppointmentStatus>,
        employee_id: Option<i32>,
    ) -> AppResult<Vec<AppointmentDetails>> {
        let mut conditions = vec!["a.business_id = $1".to_string()];
        let mut idx = 2;

        if from.is_some() { conditions.push(format!("a.start_at >= ${}", idx)); idx += 1; }
        if to.is_some() { conditions.push(format!("a.start_at < ${}", idx)); idx += 1; }
        if status.is_some() { conditions.push(format!("a.status = ${}", idx)); idx += 1; }
        if employee_id.is_some() { conditions.push(format!("a.employee_id = ${}", idx)); }

        let query = format!(
            r#"
            SELECT a.id, a.reference, a.business_id, a.employee_id, a.offering_id,
                   a.guest_id, a.start_at, a.end_at, a.status, a.notes,
                   o.name AS offering_name,
                   g.first_name AS guest_first_name, g.last_name AS guest_last_name,
                   e.display_name AS employee_name
            FROM appointments a
            JOIN offerings o ON a.offering_id = o.id
            JOIN guests g ON a.guest_id = g.id
            LEFT JOIN employees e ON a.employee_id = e.id
            WHERE {}
            ORDER BY a.start_at
            "#,
            conditions.join(" AND ")
        );

        let mut builder = sqlx::query_as::<_, AppointmentDetails>(&query).bind(business_id);
        if let Some(f) = from { builder = builder.bind(f); }
        if let Some(t) = to { builder = builder.bind(t); }
        if let Some(s) = status { builder = builder.bind(s); }
        if let Some(e) = employee_id { builder = builder.bind(e); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Occupied ranges of non-cancelled appointments intersecting
    /// [from, to). When `employee_id` is given, only that employee's
    /// appointments and unassigned ones count; otherwise every active
    /// appointment of the business does.
    pub async fn active_spans_between(
        &self,
        business_id: i32,
        employee_id: Option<i32>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<(DateTime<Utc>, DateTime<Utc>)>> {
        let rows = sqlx::query_as::<_, (DateTime<Utc>, DateTime<Utc>)>(
            r#"
            SELECT start_at, end_at FROM appointments
            WHERE business_id = $1
              AND status <> 'cancelled'
              AND start_at < $3 AND end_at > $2
              AND ($4::integer IS NULL OR employee_id IS NULL OR employee_id = $4)
            ORDER BY start_at
            "#,
        )
        .bind(business_id)
        .bind(from)
        .bind(to)
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a booking atomically: take the per-business advisory lock,
    /// re-check the slot under the lock, find-or-create the guest, insert.
    pub async fn create_booked(&self, booking: &NewAppointment) -> AppResult<Appointment> {
        let mut tx = self.pool.begin().await?;

        // Serialize booking writes per business for the check-then-insert
        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(BOOKING_LOCK_NS)
            .bind(booking.business_id)
            .execute(&mut *tx)
            .await?;

        let conflicting: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM appointments
                WHERE business_id = $1
                  AND status <> 'cancelled'
                  AND start_at < $3 AND end_at > $2
                  AND ($4::integer IS NULL OR employee_id IS NULL OR employee_id = $4)
            )
            "#,
        )
        .bind(booking.business_id)
        .bind(booking.start_at)
        .bind(booking.end_at)
        .bind(booking.employee_id)
        .fetch_one(&mut *tx)
        .await?;

        if conflicting {
            return Err(AppError::SlotUnavailable(
                "The requested slot was just booked".to_string(),
            ));
        }

        let guest_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO guests (business_id, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (business_id, email)
            DO UPDATE SET first_name = EXCLUDED.first_name,
                          last_name = EXCLUDED.last_name,
                          phone = COALESCE(EXCLUDED.phone, guests.phone)
            RETURNING id
            "#,
        )
        .bind(booking.business_id)
        .bind(&booking.guest.first_name)
        .bind(&booking.guest.last_name)
        .bind(&booking.guest.email)
        .bind(&booking.guest.phone)
        .fetch_one(&mut *tx)
        .await?;

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments
                (reference, business_id, employee_id, offering_id, guest_id, start_at, end_at, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.business_id)
        .bind(booking.employee_id)
        .bind(booking.offering_id)
        .bind(guest_id)
        .bind(booking.start_at)
        .bind(booking.end_at)
        .bind(booking.status)
        .bind(&booking.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_insert_error)?;

        tx.commit().await?;
        Ok(appointment)
    }

    /// Update an appointment's status
    pub async fn update_status(&self, id: i32, status: AppointmentStatus) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $1, modif_date = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Count appointments of a business by status
    pub async fn count_by_status(&self, business_id: i32, status: AppointmentStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM appointments WHERE business_id = $1 AND status = $2",
        )
        .bind(business_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Count upcoming non-cancelled appointments of a business
    pub async fn count_upcoming(&self, business_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM appointments WHERE business_id = $1 AND status <> 'cancelled' AND start_at >= NOW()",
        )
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

/// The EXCLUDE constraint reports a lost race as an exclusion violation
/// (23P01); surface it as a retryable conflict rather than a database error.
fn map_booking_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23P01") {
            return AppError::Conflict(
                "A concurrent booking took this slot; fetch availability again".to_string(),
            );
        }
    }
    AppError::Database(e)
}
