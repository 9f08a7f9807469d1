//! Ratings service

use crate::{
    error::{AppError, AppResult},
    models::enums::AppointmentStatus,
    models::rating::{CreateRating, Rating},
    repository::Repository,
};

#[derive(Clone)]
pub struct RatingsService {
    repository: Repository,
}

impl RatingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Rate a completed appointment, once
    pub async fn rate_appointment(&self, appointment_id: i32, data: &CreateRating) -> AppResult<Rating> {
        let appointment = self.repository.appointments.get_by_id(appointment_id).await?;
        if appointment.status != AppointmentStatus::Completed {
            return Err(AppError::BusinessRule(
                "Only completed appointments can be rated".to_string(),
            ));
        }
        self.repository
            .ratings
            .create(
                appointment.business_id,
                appointment.id,
                appointment.guest_id,
                data.score,
                data.comment.as_deref(),
            )
            .await
    }

    pub async fn list_for_business(&self, business_id: i32) -> AppResult<Vec<Rating>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.ratings.list_for_business(business_id).await
    }
}
