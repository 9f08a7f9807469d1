//! Employee model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An employee of a business. Appointments may be assigned to an employee;
/// unassigned appointments block the whole business calendar.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i32,
    pub business_id: i32,
    pub display_name: String,
    pub role: Option<String>,
    pub active: bool,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 200))]
    pub display_name: String,
    pub role: Option<String>,
}

/// Update employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[validate(length(min = 1, max = 200))]
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}
