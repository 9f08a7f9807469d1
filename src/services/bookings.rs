//! Booking service: appointment creation and status lifecycle

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentDetails, AppointmentQuery, CreateBooking, NewAppointment},
    models::enums::{AppointmentStatus, OfferingStatus},
    repository::Repository,
    services::availability::AvailabilityService,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    availability: AvailabilityService,
}

impl BookingsService {
    pub fn new(repository: Repository, availability: AvailabilityService) -> Self {
        Self {
            repository,
            availability,
        }
    }

    /// Create a booking for a guest-requested slot.
    ///
    /// The availability predicate here is the fast path; the repository
    /// re-checks under a per-business advisory lock inside the insert
    /// transaction, and the EXCLUDE constraint backs both up.
    pub async fn create_booking(&self, business_id: i32, request: CreateBooking) -> AppResult<Appointment> {
        let date = parse_date(&request.date)?;
        let time = parse_time(&request.time)?;

        let business = self.repository.businesses.get_by_id(business_id).await?;
        let offering = self
            .repository
            .offerings
            .get_by_id(business_id, request.offering_id)
            .await?;
        if offering.status != OfferingStatus::Active {
            return Err(AppError::BusinessRule("Offering is archived".to_string()));
        }
        if let Some(id) = request.employee_id {
            let employee = self.repository.employees.get_by_id(business_id, id).await?;
            if !employee.active {
                return Err(AppError::BusinessRule(format!(
                    "Employee {} is not taking appointments",
                    employee.display_name
                )));
            }
        }

        let check = self
            .availability
            .check_slot(business_id, request.offering_id, request.employee_id, date, time)
            .await?;
        if !check.is_available() {
            return Err(AppError::SlotUnavailable(format!(
                "Slot {} {} cannot be booked: {}",
                date, time, check.reason()
            )));
        }

        let tz = AvailabilityService::business_tz(&business)?;
        let start_local = date.and_time(time);
        let end_local = start_local + Duration::minutes(offering.duration_minutes as i64);
        let start_at = AvailabilityService::local_to_utc(tz, start_local)?;
        let end_at = AvailabilityService::local_to_utc(tz, end_local)?;

        // Guest bookings auto-confirm unless the business wants to approve
        let status = if business.approval_required {
            AppointmentStatus::Pending
        } else {
            AppointmentStatus::Confirmed
        };

        let appointment = self
            .repository
            .appointments
            .create_booked(&NewAppointment {
                business_id,
                employee_id: request.employee_id,
                offering_id: request.offering_id,
                guest: request.guest,
                start_at,
                end_at,
                status,
                notes: request.notes,
            })
            .await?;

        tracing::info!(
            appointment_id = appointment.id,
            business_id,
            status = %appointment.status,
            "Booking created"
        );
        Ok(appointment)
    }

    /// List a business's appointments for calendar display
    pub async fn list_for_business(
        &self,
        business_id: i32,
        query: &AppointmentQuery,
    ) -> AppResult<Vec<AppointmentDetails>> {
        let business = self.repository.businesses.get_by_id(business_id).await?;
        let tz = AvailabilityService::business_tz(&business)?;

        let from = match &query.from {
            Some(s) => Some(AvailabilityService::local_to_utc(
                tz,
                parse_date(s)?.and_time(NaiveTime::MIN),
            )?),
            None => None,
        };
        let to = match &query.to {
            Some(s) => Some(AvailabilityService::local_to_utc(
                tz,
                (parse_date(s)? + Duration::days(1)).and_time(NaiveTime::MIN),
            )?),
            None => None,
        };
        let status = match &query.status {
            Some(s) => Some(s.parse::<AppointmentStatus>().map_err(AppError::Validation)?),
            None => None,
        };

        self.repository
            .appointments
            .list_for_business(business_id, from, to, status, query.employee_id)
            .await
    }

    /// Get an appointment by ID
    pub async fn get(&self, id: i32) -> AppResult<Appointment> {
        self.repository.appointments.get_by_id(id).await
    }

    /// Get an appointment by the public reference handed to the guest
    pub async fn get_by_reference(&self, reference: uuid::Uuid) -> AppResult<Appointment> {
        self.repository.appointments.get_by_reference(reference).await
    }

    /// Approve a pending appointment
    pub async fn approve(&self, id: i32) -> AppResult<Appointment> {
        self.transition(id, AppointmentStatus::Confirmed).await
    }

    /// Cancel a pending or confirmed appointment, freeing its calendar time
    pub async fn cancel(&self, id: i32) -> AppResult<Appointment> {
        self.transition(id, AppointmentStatus::Cancelled).await
    }

    /// Mark a confirmed appointment as completed
    pub async fn complete(&self, id: i32) -> AppResult<Appointment> {
        self.transition(id, AppointmentStatus::Completed).await
    }

    async fn transition(&self, id: i32, next: AppointmentStatus) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;
        if !appointment.status.can_transition_to(next) {
            return Err(AppError::BusinessRule(format!(
                "Cannot move appointment {} from {} to {}",
                id, appointment.status, next
            )));
        }
        let updated = self.repository.appointments.update_status(id, next).await?;
        tracing::info!(appointment_id = id, from = %appointment.status, to = %next, "Appointment status changed");
        Ok(updated)
    }
}

/// Parse a YYYY-MM-DD date parameter
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{}' (use YYYY-MM-DD)", s)))
}

/// Parse an HH:MM time parameter
pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time '{}' (use HH:MM)", s)))
}
