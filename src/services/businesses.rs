//! Business and employee management service

use chrono_tz::Tz;

use crate::{
    error::{AppError, AppResult},
    models::business::{Business, CreateBusiness, UpdateBusiness},
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
    models::guest::Guest,
    repository::Repository,
};

#[derive(Clone)]
pub struct BusinessesService {
    repository: Repository,
}

impl BusinessesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Businesses ----

    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Business>> {
        self.repository.businesses.list(search).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Business> {
        self.repository.businesses.get_by_id(id).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Business> {
        self.repository.businesses.get_by_slug(slug).await
    }

    pub async fn create(&self, data: &CreateBusiness) -> AppResult<Business> {
        let timezone = validate_timezone(data.timezone.as_deref().unwrap_or("UTC"))?;
        self.repository.businesses.create(data, timezone).await
    }

    pub async fn update(&self, id: i32, data: &UpdateBusiness) -> AppResult<Business> {
        let timezone = match data.timezone.as_deref() {
            Some(tz) => Some(validate_timezone(tz)?),
            None => None,
        };
        self.repository.businesses.update(id, data, timezone).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.businesses.delete(id).await
    }

    // ---- Employees ----

    pub async fn list_employees(&self, business_id: i32) -> AppResult<Vec<Employee>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.employees.list_for_business(business_id).await
    }

    pub async fn create_employee(&self, business_id: i32, data: &CreateEmployee) -> AppResult<Employee> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.employees.create(business_id, data).await
    }

    pub async fn update_employee(
        &self,
        business_id: i32,
        id: i32,
        data: &UpdateEmployee,
    ) -> AppResult<Employee> {
        self.repository.employees.update(business_id, id, data).await
    }

    pub async fn delete_employee(&self, business_id: i32, id: i32) -> AppResult<()> {
        self.repository.employees.delete(business_id, id).await
    }

    // ---- Guests ----

    pub async fn list_guests(&self, business_id: i32) -> AppResult<Vec<Guest>> {
        self.repository.businesses.get_by_id(business_id).await?;
        self.repository.guests.list_for_business(business_id).await
    }

    pub async fn get_guest(&self, business_id: i32, id: i32) -> AppResult<Guest> {
        let guest = self.repository.guests.get_by_id(id).await?;
        if guest.business_id != business_id {
            return Err(AppError::NotFound(format!("Guest {} not found", id)));
        }
        Ok(guest)
    }
}

/// Reject unknown IANA zone names at write time; availability computations
/// trust the stored value afterwards.
fn validate_timezone(name: &str) -> AppResult<&str> {
    name.parse::<Tz>()
        .map_err(|_| AppError::Validation(format!("Unknown timezone '{}'", name)))?;
    Ok(name)
}
