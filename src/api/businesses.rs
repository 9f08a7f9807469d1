//! Business and employee endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::business::{Business, BusinessQuery, CreateBusiness, UpdateBusiness},
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
    models::guest::Guest,
};

// ---- Businesses ----

/// List businesses
#[utoipa::path(
    get,
    path = "/businesses",
    tag = "businesses",
    params(BusinessQuery),
    responses(
        (status = 200, description = "Businesses list", body = Vec<Business>)
    )
)]
pub async fn list_businesses(
    State(state): State<crate::AppState>,
    Query(query): Query<BusinessQuery>,
) -> AppResult<Json<Vec<Business>>> {
    let businesses = state.services.businesses.list(query.search.as_deref()).await?;
    Ok(Json(businesses))
}

/// Get a business
#[utoipa::path(
    get,
    path = "/businesses/{id}",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business", body = Business),
        (status = 404, description = "Business not found")
    )
)]
pub async fn get_business(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Business>> {
    let business = state.services.businesses.get(id).await?;
    Ok(Json(business))
}

/// Get a business by its slug (public booking page lookup)
#[utoipa::path(
    get,
    path = "/businesses/slug/{slug}",
    tag = "businesses",
    params(("slug" = String, Path, description = "Business slug")),
    responses(
        (status = 200, description = "Business", body = Business),
        (status = 404, description = "Business not found")
    )
)]
pub async fn get_business_by_slug(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Business>> {
    let business = state.services.businesses.get_by_slug(&slug).await?;
    Ok(Json(business))
}

/// Create a business
#[utoipa::path(
    post,
    path = "/businesses",
    tag = "businesses",
    request_body = CreateBusiness,
    responses(
        (status = 201, description = "Business created", body = Business),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn create_business(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBusiness>,
) -> AppResult<(StatusCode, Json<Business>)> {
    data.validate()?;
    let business = state.services.businesses.create(&data).await?;
    Ok((StatusCode::CREATED, Json(business)))
}

/// Update a business
#[utoipa::path(
    put,
    path = "/businesses/{id}",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = UpdateBusiness,
    responses(
        (status = 200, description = "Business updated", body = Business),
        (status = 404, description = "Business not found")
    )
)]
pub async fn update_business(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBusiness>,
) -> AppResult<Json<Business>> {
    data.validate()?;
    let business = state.services.businesses.update(id, &data).await?;
    Ok(Json(business))
}

/// Delete a business
#[utoipa::path(
    delete,
    path = "/businesses/{id}",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 204, description = "Business deleted"),
        (status = 404, description = "Business not found")
    )
)]
pub async fn delete_business(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.businesses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Employees ----

/// List employees of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/employees",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Employees list", body = Vec<Employee>)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.businesses.list_employees(business_id).await?;
    Ok(Json(employees))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/businesses/{id}/employees",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee)
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
    Json(data): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    data.validate()?;
    let employee = state.services.businesses.create_employee(business_id, &data).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/businesses/{business_id}/employees/{id}",
    tag = "businesses",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
    Json(data): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    data.validate()?;
    let employee = state.services.businesses.update_employee(business_id, id, &data).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/businesses/{business_id}/employees/{id}",
    tag = "businesses",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.businesses.delete_employee(business_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Guests ----

/// List guests of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/guests",
    tag = "businesses",
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Guests list", body = Vec<Guest>),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_guests(
    State(state): State<crate::AppState>,
    Path(business_id): Path<i32>,
) -> AppResult<Json<Vec<Guest>>> {
    let guests = state.services.businesses.list_guests(business_id).await?;
    Ok(Json(guests))
}

/// Get a guest
#[utoipa::path(
    get,
    path = "/businesses/{business_id}/guests/{id}",
    tag = "businesses",
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn get_guest(
    State(state): State<crate::AppState>,
    Path((business_id, id)): Path<(i32, i32)>,
) -> AppResult<Json<Guest>> {
    let guest = state.services.businesses.get_guest(business_id, id).await?;
    Ok(Json(guest))
}
