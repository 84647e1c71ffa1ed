//! # club-service
//!
//! Application layer containing the calendar and RSVP use cases, the service
//! context, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CalendarService, RsvpService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
