//! Appointment model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::AppointmentStatus;
use super::guest::GuestInfo;

/// Appointment model from database. Occupies the half-open instant range
/// [start_at, end_at); both instants are stored in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i32,
    /// Public reference handed to the guest
    pub reference: Uuid,
    pub business_id: i32,
    pub employee_id: Option<i32>,
    pub offering_id: i32,
    pub guest_id: i32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Appointment with joined names for calendar display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AppointmentDetails {
    pub id: i32,
    pub reference: Uuid,
    pub business_id: i32,
    pub employee_id: Option<i32>,
    pub offering_id: i32,
    pub guest_id: i32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub offering_name: String,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub employee_name: Option<String>,
}

/// Book an appointment (guest flow). The slot is expressed in the business's
/// local timezone; the service duration comes from the offering.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub offering_id: i32,
    pub employee_id: Option<i32>,
    /// Date (YYYY-MM-DD), business-local
    pub date: String,
    /// Start time (HH:MM), business-local
    pub time: String,
    #[validate(nested)]
    pub guest: GuestInfo,
    pub notes: Option<String>,
}

/// Fully resolved booking, ready for the transactional insert. Instants are
/// UTC; the guest is found-or-created inside the same transaction.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub business_id: i32,
    pub employee_id: Option<i32>,
    pub offering_id: i32,
    pub guest: GuestInfo,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Query parameters for listing a business's appointments
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AppointmentQuery {
    /// From date (YYYY-MM-DD), business-local, inclusive
    pub from: Option<String>,
    /// To date (YYYY-MM-DD), business-local, inclusive
    pub to: Option<String>,
    /// Filter by status
    pub status: Option<String>,
    /// Filter by assigned employee
    pub employee_id: Option<i32>,
}
