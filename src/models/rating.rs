//! Rating model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A guest rating for a completed appointment, one per appointment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub id: i32,
    pub business_id: i32,
    pub appointment_id: i32,
    pub guest_id: i32,
    /// Score from 1 (worst) to 5 (best)
    pub score: i16,
    pub comment: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create rating request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRating {
    #[validate(range(min = 1, max = 5))]
    pub score: i16,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}
