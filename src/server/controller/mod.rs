//! HTTP request handlers.
//!
//! Controllers extract and parse request input, convert DTOs to domain parameters,
//! call the service layer and convert the results back to DTOs. Errors propagate as
//! `AppError` and are turned into responses by its `IntoResponse` implementation.

pub mod info;
pub mod person;

#[cfg(test)]
mod test;
