//! Rendezvous Server - Appointment Booking System
//!
//! A Rust REST API server for multi-tenant appointment booking.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rendezvous_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rendezvous_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rendezvous Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, &config.booking);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Businesses
        .route("/businesses", get(api::businesses::list_businesses))
        .route("/businesses", post(api::businesses::create_business))
        .route("/businesses/:business_id", get(api::businesses::get_business))
        .route("/businesses/:business_id", put(api::businesses::update_business))
        .route("/businesses/:business_id", delete(api::businesses::delete_business))
        .route("/businesses/slug/:slug", get(api::businesses::get_business_by_slug))
        // Employees
        .route("/businesses/:business_id/employees", get(api::businesses::list_employees))
        .route("/businesses/:business_id/employees", post(api::businesses::create_employee))
        .route("/businesses/:business_id/employees/:id", put(api::businesses::update_employee))
        .route("/businesses/:business_id/employees/:id", delete(api::businesses::delete_employee))
        // Guests
        .route("/businesses/:business_id/guests", get(api::businesses::list_guests))
        .route("/businesses/:business_id/guests/:id", get(api::businesses::get_guest))
        // Offerings
        .route("/businesses/:business_id/offerings", get(api::offerings::list_offerings))
        .route("/businesses/:business_id/offerings", post(api::offerings::create_offering))
        .route("/businesses/:business_id/offerings/:id", get(api::offerings::get_offering))
        .route("/businesses/:business_id/offerings/:id", put(api::offerings::update_offering))
        .route("/businesses/:business_id/offerings/:id", delete(api::offerings::delete_offering))
        // Schedules
        .route("/businesses/:business_id/working-hours", get(api::schedules::list_working_hours))
        .route("/businesses/:business_id/working-hours", post(api::schedules::create_working_hours))
        .route("/businesses/:business_id/working-hours/:id", delete(api::schedules::delete_working_hours))
        .route("/businesses/:business_id/custom-working-hours", get(api::schedules::list_custom_working_hours))
        .route("/businesses/:business_id/custom-working-hours", put(api::schedules::upsert_custom_working_hours))
        .route("/businesses/:business_id/custom-working-hours/:id", delete(api::schedules::delete_custom_working_hours))
        // Availability
        .route("/businesses/:business_id/availability", get(api::availability::get_availability))
        .route("/businesses/:business_id/availability/check", get(api::availability::check_slot))
        // Appointments
        .route("/businesses/:business_id/appointments", get(api::appointments::list_appointments))
        .route("/businesses/:business_id/appointments", post(api::appointments::create_appointment))
        .route("/appointments/:id", get(api::appointments::get_appointment))
        .route("/appointments/ref/:reference", get(api::appointments::get_appointment_by_reference))
        .route("/appointments/:id/approve", post(api::appointments::approve_appointment))
        .route("/appointments/:id/cancel", post(api::appointments::cancel_appointment))
        .route("/appointments/:id/complete", post(api::appointments::complete_appointment))
        // Ratings
        .route("/appointments/:id/rating", post(api::ratings::rate_appointment))
        .route("/businesses/:business_id/ratings", get(api::ratings::list_ratings))
        // Statistics
        .route("/businesses/:business_id/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
