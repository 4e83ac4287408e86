//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They run validation to completion before any repository call and work with domain
//! models rather than DTOs or entity models.

pub mod person;
pub mod validation;
