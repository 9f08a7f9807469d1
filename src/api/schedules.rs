//! Schedule endpoints (recurring working hours, date-specific overrides)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::AppResult,
    models::schedule::{
        CreateWorkingHours, CustomWorkingHours, CustomWorkingHoursQuery,
        UpsertCustomWorkingHours, WorkingHours,
    },
};

// ---- Recurring working hours ----

/// List working hours of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/working-hours",
    tag = "schedules",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Working hours", body = Vec<WorkingHours>)
    )
)]
pub async fn list_working_hours(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Vec<WorkingHours>>> {
    let hours = state.services.schedules.list_working_hours(business_id).await?;
    Ok(Json(hours))
}

/// Create a recurring working-hours interval
#[utoipa::path(
    post,
    path = "/businesses/{id}/working-hours",
    tag = "schedules",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = CreateWorkingHours,
    responses(
        (status = 201, description = "Working hours created", body = WorkingHours),
        (status = 400, description = "Invalid day or times")
    )
)]
pub async fn create_working_hours(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Json(data): Json<CreateWorkingHours>,
) -> AppResult<(StatusCode, Json<WorkingHours>)> {
    data.validate()?;
    let hours = state.services.schedules.create_working_hours(business_id, &data).await?;
    Ok((StatusCode::CREATED, Json(hours)))
}

/// Delete a recurring working-hours interval
#[utoipa::path(
    delete,
    path = "/businesses/{business_id}/working-hours/{id}",
    tag = "schedules",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Working hours ID")
    ),
    responses(
        (status = 204, description = "Working hours deleted"),
        (status = 404, description = "Working hours not found")
    )
)]
pub async fn delete_working_hours(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.schedules.delete_working_hours(business_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Date-specific overrides ----

/// List date-specific overrides
#[utoipa::path(
    get,
    path = "/businesses/{id}/custom-working-hours",
    tag = "schedules",
    params(("id" = i32, Path, description = "Business ID"), CustomWorkingHoursQuery),
    responses(
        (status = 200, description = "Overrides list", body = Vec<CustomWorkingHours>)
    )
)]
pub async fn list_custom_working_hours(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Query(query): Query<CustomWorkingHoursQuery>,
) -> AppResult<Json<Vec<CustomWorkingHours>>> {
    let start = query.start_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let end = query.end_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let overrides = state.services.schedules.list_custom(business_id, start, end).await?;
    Ok(Json(overrides))
}

/// Create or replace the override for a date
#[utoipa::path(
    put,
    path = "/businesses/{id}/custom-working-hours",
    tag = "schedules",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = UpsertCustomWorkingHours,
    responses(
        (status = 200, description = "Override stored", body = CustomWorkingHours),
        (status = 400, description = "Invalid date or times")
    )
)]
pub async fn upsert_custom_working_hours(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Json(data): Json<UpsertCustomWorkingHours>,
) -> AppResult<Json<CustomWorkingHours>> {
    let stored = state.services.schedules.upsert_custom(business_id, &data).await?;
    Ok(Json(stored))
}

/// Delete the override for a date
#[utoipa::path(
    delete,
    path = "/businesses/{business_id}/custom-working-hours/{id}",
    tag = "schedules",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Override ID")
    ),
    responses(
        (status = 204, description = "Override deleted"),
        (status = 404, description = "Override not found")
    )
)]
pub async fn delete_custom_working_hours(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.schedules.delete_custom(business_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
