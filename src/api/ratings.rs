//! Rating endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::rating::{CreateRating, Rating},
};

/// Rate a completed appointment
#[utoipa::path(
    post,
    path = "/appointments/{id}/rating",
    tag = "ratings",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = CreateRating,
    responses(
        (status = 201, description = "Rating created", body = Rating),
        (status = 404, description = "Appointment not found"),
        (status = 409, description = "Appointment already rated"),
        (status = 422, description = "Appointment is not completed")
    )
)]
pub async fn rate_appointment(
    State(state): State<crate::AppState>,
    Path(appointment_id): Path<i32>,
    Json(data): Json<CreateRating>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    data.validate()?;
    let rating = state.services.ratings.rate_appointment(appointment_id, &data).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

/// List ratings of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/ratings",
    tag = "ratings",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Ratings list", body = Vec<Rating>),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_ratings(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Vec<Rating>>> {
    let ratings = state.services.ratings.list_for_business(business_id).await?;
    Ok(Json(ratings))
}
