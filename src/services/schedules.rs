//! Schedules service (recurring working hours, date-specific overrides)

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{
        CreateWorkingHours, CustomWorkingHours, UpsertCustomWorkingHours, WorkingHours,
    },
    repository::Repository,
    services::bookings::{parse_date, parse_time},
};

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
}

impl SchedulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Recurring working hours ----

    pub async fn list_working_hours(&self, business_id: i32) -> AppResult<Vec<WorkingHours>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.schedules.list_working_hours(business_id).await
    }

    /// Create a recurring interval. The ISO day-of-week convention
    /// (1 = Monday .. 7 = Sunday) is enforced here, at write time.
    pub async fn create_working_hours(
        &self,
        business_id: i32,
        data: &CreateWorkingHours,
    ) -> AppResult<WorkingHours> {
        self.repository.businesses.get_by_id(business_id).await?;
        if !(1..=7).contains(&data.day_of_week) {
            return Err(AppError::Validation(
                "day_of_week must be 1 (Monday) .. 7 (Sunday)".to_string(),
            ));
        }
        let start = parse_time(&data.start_time)?;
        let end = parse_time(&data.end_time)?;
        if start >= end {
            return Err(AppError::Validation(
                "start_time must be before end_time".to_string(),
            ));
        }
        self.repository
            .schedules
            .create_working_hours(business_id, data.day_of_week, start, end)
            .await
    }

    pub async fn delete_working_hours(&self, business_id: i32, id: i32) -> AppResult<()> {
        self.repository.schedules.delete_working_hours(business_id, id).await
    }

    // ---- Date-specific overrides ----

    pub async fn list_custom(
        &self,
        business_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<CustomWorkingHours>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository
            .schedules
            .list_custom(business_id, start_date, end_date)
            .await
    }

    /// Create or replace the override for a date. Equal start and end times
    /// close the date entirely.
    pub async fn upsert_custom(
        &self,
        business_id: i32,
        data: &UpsertCustomWorkingHours,
    ) -> AppResult<CustomWorkingHours> {
        self.repository.businesses.get_by_id(business_id).await?;
        let work_date = parse_date(&data.work_date)?;
        let start = parse_time(&data.start_time)?;
        let end = parse_time(&data.end_time)?;
        if start > end {
            return Err(AppError::Validation(
                "start_time must not be after end_time".to_string(),
            ));
        }
        self.repository
            .schedules
            .upsert_custom(business_id, work_date, start, end)
            .await
    }

    pub async fn delete_custom(&self, business_id: i32, id: i32) -> AppResult<()> {
        self.repository.schedules.delete_custom(business_id, id).await
    }
}
