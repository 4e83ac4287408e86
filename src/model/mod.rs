//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models live in
//! `server::model` and convert to and from these DTOs at the controller boundary.

pub mod api;
pub mod person;
