//! Availability endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    services::bookings::{parse_date, parse_time},
};

/// Query parameters for the availability search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityQuery {
    /// Offering whose duration defines the slot length
    pub offering_id: i32,
    /// First date of the search window (YYYY-MM-DD), business-local
    pub from: String,
    /// Last date of the search window (YYYY-MM-DD), inclusive
    pub to: String,
    /// Restrict the calendar to one employee
    pub employee_id: Option<i32>,
}

/// Available slot starts per date; dates without bookable slots are omitted
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    /// Map from date to ordered business-local slot start times
    #[schema(value_type = Object)]
    pub slots: BTreeMap<NaiveDate, Vec<NaiveTime>>,
}

/// Query parameters for the single-slot check
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotCheckQuery {
    pub offering_id: i32,
    /// Date (YYYY-MM-DD), business-local
    pub date: String,
    /// Start time (HH:MM), business-local
    pub time: String,
    pub employee_id: Option<i32>,
}

/// Single-slot check result
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotCheckResponse {
    pub available: bool,
}

/// Get available booking slots over a date range
#[utoipa::path(
    get,
    path = "/businesses/{id}/availability",
    tag = "availability",
    params(("id" = i32, Path, description = "Business ID"), AvailabilityQuery),
    responses(
        (status = 200, description = "Available slots per date", body = AvailabilityResponse),
        (status = 400, description = "Invalid or oversized date range"),
        (status = 404, description = "Business, offering or employee not found")
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let from = parse_date(&query.from)?;
    let to = parse_date(&query.to)?;
    let slots = state
        .services
        .availability
        .available_slots(business_id, query.offering_id, query.employee_id, from, to)
        .await?;
    Ok(Json(AvailabilityResponse { slots }))
}

/// Check whether one specific slot is currently bookable
#[utoipa::path(
    get,
    path = "/businesses/{id}/availability/check",
    tag = "availability",
    params(("id" = i32, Path, description = "Business ID"), SlotCheckQuery),
    responses(
        (status = 200, description = "Check result", body = SlotCheckResponse),
        (status = 404, description = "Business, offering or employee not found")
    )
)]
pub async fn check_slot(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Query(query): Query<SlotCheckQuery>,
) -> AppResult<Json<SlotCheckResponse>> {
    let date = parse_date(&query.date)?;
    let time = parse_time(&query.time)?;
    let available = state
        .services
        .availability
        .is_slot_available(business_id, query.offering_id, query.employee_id, date, time)
        .await?;
    Ok(Json(SlotCheckResponse { available }))
}
