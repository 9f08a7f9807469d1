//! Business (tenant) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A business (tenant) offering bookable services
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Business {
    pub id: i32,
    pub name: String,
    /// URL-friendly unique identifier
    pub slug: String,
    pub description: Option<String>,
    /// IANA timezone name (e.g. "Europe/Paris"); all availability
    /// computations for this business happen in this zone
    pub timezone: String,
    /// When set, guest bookings start as pending instead of confirmed
    pub approval_required: bool,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create business request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBusiness {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    pub description: Option<String>,
    /// IANA timezone name; defaults to UTC
    pub timezone: Option<String>,
    pub approval_required: Option<bool>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Update business request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBusiness {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub timezone: Option<String>,
    pub approval_required: Option<bool>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Query parameters for listing businesses
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BusinessQuery {
    /// Filter by name substring (case-insensitive)
    pub search: Option<String>,
}
