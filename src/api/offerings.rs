//! Offering endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppResult,
    models::enums::OfferingStatus,
    models::offering::{CreateOffering, Offering, UpdateOffering},
};

/// Query parameters for listing offerings
#[derive(Debug, Deserialize, IntoParams)]
pub struct OfferingQuery {
    /// Restrict to active (bookable) offerings
    pub active: Option<bool>,
}

/// List offerings of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/offerings",
    tag = "offerings",
    params(("id" = i32, Path, description = "Business ID"), OfferingQuery),
    responses(
        (status = 200, description = "Offerings list", body = Vec<Offering>)
    )
)]
pub async fn list_offerings(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Query(query): Query<OfferingQuery>,
) -> AppResult<Json<Vec<Offering>>> {
    let offerings = state
        .services
        .offerings
        .list(business_id, query.active.unwrap_or(false))
        .await?;
    Ok(Json(offerings))
}

/// Get an offering
#[utoipa::path(
    get,
    path = "/businesses/{business_id}/offerings/{id}",
    tag = "offerings",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Offering ID")
    ),
    responses(
        (status = 200, description = "Offering", body = Offering),
        (status = 404, description = "Offering not found")
    )
)]
pub async fn get_offering(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<Json<Offering>> {
    let offering = state.services.offerings.get(business_id, id).await?;
    Ok(Json(offering))
}

/// Create an offering
#[utoipa::path(
    post,
    path = "/businesses/{id}/offerings",
    tag = "offerings",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = CreateOffering,
    responses(
        (status = 201, description = "Offering created", body = Offering)
    )
)]
pub async fn create_offering(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Json(data): Json<CreateOffering>,
) -> AppResult<(StatusCode, Json<Offering>)> {
    data.validate()?;
    let offering = state.services.offerings.create(business_id, &data).await?;
    Ok((StatusCode::CREATED, Json(offering)))
}

/// Update an offering
#[utoipa::path(
    put,
    path = "/businesses/{business_id}/offerings/{id}",
    tag = "offerings",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Offering ID")
    ),
    request_body = UpdateOffering,
    responses(
        (status = 200, description = "Offering updated", body = Offering),
        (status = 404, description = "Offering not found")
    )
)]
pub async fn update_offering(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
    Json(data): Json<UpdateOffering>,
) -> AppResult<Json<Offering>> {
    data.validate()?;
    let offering = state.services.offerings.update(business_id, id, &data).await?;
    Ok(Json(offering))
}

/// Delete an offering (archives it when appointments reference it)
#[utoipa::path(
    delete,
    path = "/businesses/{business_id}/offerings/{id}",
    tag = "offerings",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Offering ID")
    ),
    responses(
        (status = 204, description = "Offering deleted"),
        (status = 200, description = "Offering archived instead of deleted"),
        (status = 404, description = "Offering not found")
    )
)]
pub async fn delete_offering(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    match state.services.offerings.delete(business_id, id).await? {
        OfferingStatus::Archived => Ok(StatusCode::OK),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
