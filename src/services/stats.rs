//! Statistics service

use crate::{
    api::stats::{AppointmentStats, RatingStats, StatsResponse},
    error::AppResult,
    models::enums::AppointmentStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get booking statistics for a business
    pub async fn get_stats(&self, business_id: i32) -> AppResult<StatsResponse> {
        self.repository.businesses.get_by_id(business_id).await?;

        let appointments = &self.repository.appointments;
        let pending = appointments.count_by_status(business_id, AppointmentStatus::Pending).await?;
        let confirmed = appointments.count_by_status(business_id, AppointmentStatus::Confirmed).await?;
        let cancelled = appointments.count_by_status(business_id, AppointmentStatus::Cancelled).await?;
        let completed = appointments.count_by_status(business_id, AppointmentStatus::Completed).await?;
        let upcoming = appointments.count_upcoming(business_id).await?;

        let guests = self.repository.guests.count_for_business(business_id).await?;
        let active_offerings = self.repository.offerings.count_active(business_id).await?;
        let (rating_count, rating_average) =
            self.repository.ratings.summary_for_business(business_id).await?;

        Ok(StatsResponse {
            appointments: AppointmentStats {
                total: pending + confirmed + cancelled + completed,
                pending,
                confirmed,
                cancelled,
                completed,
                upcoming,
            },
            guests,
            active_offerings,
            ratings: RatingStats {
                count: rating_count,
                average: rating_average,
            },
        })
    }
}
