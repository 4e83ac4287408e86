use crate::server::{
    data::StoreKind,
    error::AppError,
    model::person::PersonId,
};

/// Message returned when no entry matches a requested id.
pub const PERSON_NOT_FOUND: &str = "Person not found";

/// Parses a person id from a path segment
///
/// Only the canonical decimal form is accepted, so `+5` and `05` do not name
/// entry 5. The database store reports ids it cannot parse as malformed. The memory store
/// treats them as ids that match no entry, so the request ends in a 404.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `kind` - Store serving the request
///
/// # Returns
/// - `Ok(PersonId)` - Successfully parsed id
/// - `Err(AppError::MalformedId)` - Unparseable id on the database store
/// - `Err(AppError::NotFound)` - Unparseable id on the memory store
pub fn parse_person_id(value: &str, kind: StoreKind) -> Result<PersonId, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id.to_string() == value => Ok(PersonId(id)),
        _ => match kind {
            StoreKind::Database => Err(AppError::MalformedId(value.to_string())),
            StoreKind::Memory => Err(AppError::NotFound(PERSON_NOT_FOUND.to_string())),
        },
    }
}
