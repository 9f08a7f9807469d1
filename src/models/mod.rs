//! Data models for Rendezvous

pub mod appointment;
pub mod business;
pub mod employee;
pub mod enums;
pub mod guest;
pub mod offering;
pub mod rating;
pub mod schedule;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentDetails};
pub use business::Business;
pub use employee::Employee;
pub use enums::{AppointmentStatus, OfferingStatus};
pub use guest::Guest;
pub use offering::Offering;
pub use rating::Rating;
pub use schedule::{CustomWorkingHours, WorkingHours};
