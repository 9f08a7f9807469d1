//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, availability, businesses, health, offerings, ratings, schedules, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rendezvous API",
        version = "1.0.0",
        description = "Appointment Booking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Rendezvous Team", email = "contact@rendezvous.example")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Businesses
        businesses::list_businesses,
        businesses::get_business,
        businesses::get_business_by_slug,
        businesses::create_business,
        businesses::update_business,
        businesses::delete_business,
        businesses::list_employees,
        businesses::create_employee,
        businesses::update_employee,
        businesses::delete_employee,
        businesses::list_guests,
        businesses::get_guest,
        // Offerings
        offerings::list_offerings,
        offerings::get_offering,
        offerings::create_offering,
        offerings::update_offering,
        offerings::delete_offering,
        // Schedules
        schedules::list_working_hours,
        schedules::create_working_hours,
        schedules::delete_working_hours,
        schedules::list_custom_working_hours,
        schedules::upsert_custom_working_hours,
        schedules::delete_custom_working_hours,
        // Availability
        availability::get_availability,
        availability::check_slot,
        // Appointments
        appointments::list_appointments,
        appointments::create_appointment,
        appointments::get_appointment,
        appointments::get_appointment_by_reference,
        appointments::approve_appointment,
        appointments::cancel_appointment,
        appointments::complete_appointment,
        // Ratings
        ratings::rate_appointment,
        ratings::list_ratings,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Businesses
            crate::models::business::Business,
            crate::models::business::CreateBusiness,
            crate::models::business::UpdateBusiness,
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            crate::models::employee::UpdateEmployee,
            // Offerings
            crate::models::offering::Offering,
            crate::models::offering::CreateOffering,
            crate::models::offering::UpdateOffering,
            crate::models::enums::OfferingStatus,
            // Schedules
            crate::models::schedule::WorkingHours,
            crate::models::schedule::CreateWorkingHours,
            crate::models::schedule::CustomWorkingHours,
            crate::models::schedule::UpsertCustomWorkingHours,
            // Availability
            availability::AvailabilityResponse,
            availability::SlotCheckResponse,
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentDetails,
            crate::models::appointment::CreateBooking,
            crate::models::enums::AppointmentStatus,
            crate::models::guest::Guest,
            crate::models::guest::GuestInfo,
            // Ratings
            crate::models::rating::Rating,
            crate::models::rating::CreateRating,
            // Stats
            stats::StatsResponse,
            stats::AppointmentStats,
            stats::RatingStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "businesses", description = "Business and employee management"),
        (name = "offerings", description = "Bookable service management"),
        (name = "schedules", description = "Working hours and overrides"),
        (name = "availability", description = "Slot availability search"),
        (name = "appointments", description = "Booking and appointment lifecycle"),
        (name = "ratings", description = "Guest ratings"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
