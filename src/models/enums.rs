//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AppointmentStatus
// ---------------------------------------------------------------------------

/// Appointment lifecycle status.
///
/// Transitions: pending -> {confirmed, cancelled}, confirmed -> {cancelled,
/// completed}. Cancelled and completed are terminal. Appointments are never
/// hard-deleted; only `cancelled` frees the calendar for conflict purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Whether the appointment still occupies calendar time
    pub fn occupies_calendar(self) -> bool {
        self != AppointmentStatus::Cancelled
    }

    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(format!("unknown appointment status: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// OfferingStatus
// ---------------------------------------------------------------------------

/// Offering status. Archived offerings are kept for appointment history but
/// cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "offering_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OfferingStatus {
    Active,
    Archived,
}

impl std::fmt::Display for OfferingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OfferingStatus::Active => "active",
            OfferingStatus::Archived => "archived",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Confirmed));
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Cancelled));
        assert!(!AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Completed));
    }

    #[test]
    fn cancelled_is_terminal() {
        for next in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
        ] {
            assert!(!AppointmentStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn only_cancelled_frees_the_calendar() {
        assert!(AppointmentStatus::Pending.occupies_calendar());
        assert!(AppointmentStatus::Confirmed.occupies_calendar());
        assert!(AppointmentStatus::Completed.occupies_calendar());
        assert!(!AppointmentStatus::Cancelled.occupies_calendar());
    }
}
