//! Repository layer for database operations

pub mod appointments;
pub mod businesses;
pub mod employees;
pub mod guests;
pub mod offerings;
pub mod ratings;
pub mod schedules;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub businesses: businesses::BusinessesRepository,
    pub employees: employees::EmployeesRepository,
    pub offerings: offerings::OfferingsRepository,
    pub guests: guests::GuestsRepository,
    pub schedules: schedules::SchedulesRepository,
    pub appointments: appointments::AppointmentsRepository,
    pub ratings: ratings::RatingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            businesses: businesses::BusinessesRepository::new(pool.clone()),
            employees: employees::EmployeesRepository::new(pool.clone()),
            offerings: offerings::OfferingsRepository::new(pool.clone()),
            guests: guests::GuestsRepository::new(pool.clone()),
            schedules: schedules::SchedulesRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            ratings: ratings::RatingsRepository::new(pool.clone()),
            pool,
        }
    }
}
