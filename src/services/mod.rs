//! Business logic services

pub mod availability;
pub mod bookings;
pub mod businesses;
pub mod offerings;
pub mod ratings;
pub mod schedules;
pub mod stats;

use crate::{config::BookingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub businesses: businesses::BusinessesService,
    pub offerings: offerings::OfferingsService,
    pub schedules: schedules::SchedulesService,
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
    pub ratings: ratings::RatingsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking: &BookingConfig) -> Self {
        let availability = availability::AvailabilityService::new(repository.clone(), booking);
        Self {
            businesses: businesses::BusinessesService::new(repository.clone()),
            offerings: offerings::OfferingsService::new(repository.clone()),
            schedules: schedules::SchedulesService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), availability.clone()),
            ratings: ratings::RatingsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            availability,
        }
    }
}
