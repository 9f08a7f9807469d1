//! Offering (bookable service) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::OfferingStatus;

/// A bookable service. The duration determines the slot length used by the
/// availability computation and the occupied range of an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Offering {
    pub id: i32,
    pub business_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Service duration in minutes; an appointment occupies
    /// [start, start + duration)
    pub duration_minutes: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub status: OfferingStatus,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create offering request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOffering {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    /// Duration in minutes (5 minutes to a full day)
    #[validate(range(min = 5, max = 1440))]
    pub duration_minutes: i32,
    #[schema(value_type = String)]
    pub price: Option<Decimal>,
}

/// Update offering request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOffering {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 5, max = 1440))]
    pub duration_minutes: Option<i32>,
    #[schema(value_type = String)]
    pub price: Option<Decimal>,
    pub status: Option<OfferingStatus>,
}
