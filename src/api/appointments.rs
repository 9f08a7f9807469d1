//! Appointment endpoints (booking, calendar listing, status transitions)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::appointment::{Appointment, AppointmentDetails, AppointmentQuery, CreateBooking},
};

/// List a business's appointments
#[utoipa::path(
    get,
    path = "/businesses/{id}/appointments",
    tag = "appointments",
    params(("id" = i32, Path, description = "Business ID"), AppointmentQuery),
    responses(
        (status = 200, description = "Appointments list", body = Vec<AppointmentDetails>),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_appointments(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Query(query): Query<AppointmentQuery>,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    let appointments = state.services.bookings.list_for_business(business_id, &query).await?;
    Ok(Json(appointments))
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/businesses/{id}/appointments",
    tag = "appointments",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 404, description = "Business, offering or employee not found"),
        (status = 422, description = "Slot is not available"),
        (status = 409, description = "A concurrent booking took the slot")
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    data.validate()?;
    let appointment = state.services.bookings.create_booking(business_id, data).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Get an appointment
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment", body = Appointment),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.get(id).await?;
    Ok(Json(appointment))
}

/// Get an appointment by its public reference
#[utoipa::path(
    get,
    path = "/appointments/ref/{reference}",
    tag = "appointments",
    params(("reference" = uuid::Uuid, Path, description = "Public booking reference")),
    responses(
        (status = 200, description = "Appointment", body = Appointment),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get_appointment_by_reference(
    State(state): State<crate::AppState>,
    Path(reference): Path<uuid::Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.get_by_reference(reference).await?;
    Ok(Json(appointment))
}

/// Approve a pending appointment
#[utoipa::path(
    post,
    path = "/appointments/{id}/approve",
    tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment confirmed", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Invalid status transition")
    )
)]
pub async fn approve_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.approve(id).await?;
    Ok(Json(appointment))
}

/// Cancel an appointment
#[utoipa::path(
    post,
    path = "/appointments/{id}/cancel",
    tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment cancelled", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Invalid status transition")
    )
)]
pub async fn cancel_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.cancel(id).await?;
    Ok(Json(appointment))
}

/// Mark an appointment as completed
#[utoipa::path(
    post,
    path = "/appointments/{id}/complete",
    tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment completed", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Invalid status transition")
    )
)]
pub async fn complete_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.complete(id).await?;
    Ok(Json(appointment))
}
