//! API handlers for Rendezvous REST endpoints

pub mod appointments;
pub mod availability;
pub mod businesses;
pub mod health;
pub mod offerings;
pub mod openapi;
pub mod ratings;
pub mod schedules;
pub mod stats;
