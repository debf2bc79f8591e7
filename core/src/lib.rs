//! # OxTickets Core
//!
//! Core business logic and domain layer for the OxTickets backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types for institutional email verification and the contact gate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{
    InMemoryProfileRepository, InMemoryVerificationRepository, ProfileRepository,
    VerificationRecordRepository,
};
pub use services::*;
