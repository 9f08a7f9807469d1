//! Offering management service

use crate::{
    error::AppResult,
    models::enums::OfferingStatus,
    models::offering::{CreateOffering, Offering, UpdateOffering},
    repository::Repository,
};

#[derive(Clone)]
pub struct OfferingsService {
    repository: Repository,
}

impl OfferingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, business_id: i32, active_only: bool) -> AppResult<Vec<Offering>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.offerings.list_for_business(business_id, active_only).await
    }

    pub async fn get(&self, business_id: i32, id: i32) -> AppResult<Offering> {
        self.repository.offerings.get_by_id(business_id, id).await
    }

    pub async fn create(&self, business_id: i32, data: &CreateOffering) -> AppResult<Offering> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.offerings.create(business_id, data).await
    }

    pub async fn update(&self, business_id: i32, id: i32, data: &UpdateOffering) -> AppResult<Offering> {
        self.repository.offerings.update(business_id, id, data).await
    }

    /// Delete an offering; falls back to archiving when appointments
    /// reference it, so history stays intact
    pub async fn delete(&self, business_id: i32, id: i32) -> AppResult<OfferingStatus> {
        self.repository.offerings.delete_or_archive(business_id, id).await
    }
}
