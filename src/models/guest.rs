//! Guest model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A guest of a business, identified by email within the tenant. Guests are
/// created on first booking and reused afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Guest {
    pub id: i32,
    pub business_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Guest contact details supplied with a booking request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GuestInfo {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
}
