//! Statistics endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Appointment counters by status
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentStats {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub cancelled: i64,
    pub completed: i64,
    /// Non-cancelled appointments starting from now
    pub upcoming: i64,
}

/// Rating summary
#[derive(Debug, Serialize, ToSchema)]
pub struct RatingStats {
    pub count: i64,
    /// Mean score, absent without ratings
    pub average: Option<f64>,
}

/// Business statistics response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub appointments: AppointmentStats,
    pub guests: i64,
    pub active_offerings: i64,
    pub ratings: RatingStats,
}

/// Get booking statistics for a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/stats",
    tag = "stats",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business statistics", body = StatsResponse),
        (status = 404, description = "Business not found")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats(business_id).await?;
    Ok(Json(stats))
}
