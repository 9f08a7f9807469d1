//! Schedule models (recurring working hours, date-specific overrides)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ---------------------------------------------------------------------------
// WorkingHours
// ---------------------------------------------------------------------------

/// A recurring weekly open interval for a business.
///
/// `day_of_week` uses the ISO convention: 1 = Monday .. 7 = Sunday. The
/// convention is enforced at write time; stored rows are trusted when
/// resolving availability. A business may carry several intervals on the
/// same weekday (split shifts); rows are not required to be disjoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkingHours {
    pub id: i32,
    pub business_id: i32,
    /// Day of week (1 = Monday .. 7 = Sunday)
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create working hours request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkingHours {
    /// Day of week (1 = Monday .. 7 = Sunday)
    #[validate(range(min = 1, max = 7))]
    pub day_of_week: i16,
    /// Opening time (HH:MM)
    pub start_time: String,
    /// Closing time (HH:MM), must be after start_time
    pub end_time: String,
}

// ---------------------------------------------------------------------------
// CustomWorkingHours
// ---------------------------------------------------------------------------

/// A date-specific override. When present for a date it fully replaces the
/// recurring weekly schedule for that date; it is never merged with it.
/// Equal start and end times mark the date as closed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomWorkingHours {
    pub id: i32,
    pub business_id: i32,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create or replace the override for a date
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertCustomWorkingHours {
    /// Date (YYYY-MM-DD)
    pub work_date: String,
    /// Opening time (HH:MM); equal to end_time to close the date
    pub start_time: String,
    /// Closing time (HH:MM)
    pub end_time: String,
}

/// Query parameters for listing overrides
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CustomWorkingHoursQuery {
    /// Filter overrides from this date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Filter overrides until this date (YYYY-MM-DD)
    pub end_date: Option<String>,
}
