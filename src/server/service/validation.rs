//! Validation rules for phonebook entries.
//!
//! All checks are synchronous and side-effect free. The service runs them to
//! completion and only touches the store once they have passed, so a rejected
//! candidate never causes a partial write.

use crate::server::{
    data::StoreKind,
    error::validation::ValidationError,
    model::person::{CreatePersonParams, Person, PersonCandidate, PersonId},
};

/// Minimum number of characters in a name.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 3;

/// Tunable rule set applied to every create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum name length in characters, counted on the submitted value.
    pub min_name_length: usize,
    /// Reject candidates without a number.
    pub require_number: bool,
    /// Reject names already used by another live entry.
    pub unique_names: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            require_number: true,
            unique_names: false,
        }
    }
}

impl ValidationRules {
    /// Default rules for a store.
    ///
    /// Name uniqueness is enforced on the memory store only, unless overridden
    /// through configuration.
    pub fn for_store(kind: StoreKind) -> Self {
        Self {
            unique_names: kind == StoreKind::Memory,
            ..Self::default()
        }
    }
}

/// Checks presence and length rules and returns the fields as submitted.
///
/// Checks run in order: name present, number present, name length. Surrounding
/// whitespace only matters for the presence checks; a whitespace-only value is
/// missing. Values are never rewritten.
pub fn validate_candidate(
    candidate: &PersonCandidate,
    rules: &ValidationRules,
) -> Result<CreatePersonParams, ValidationError> {
    let name = candidate
        .name
        .as_deref()
        .filter(|name| !is_blank(name))
        .ok_or(ValidationError::MissingName)?;

    let number = candidate.number.as_deref().unwrap_or_default();
    if rules.require_number && is_blank(number) {
        return Err(ValidationError::MissingNumber);
    }

    if name.chars().count() < rules.min_name_length {
        return Err(ValidationError::NameTooShort {
            min: rules.min_name_length,
        });
    }

    Ok(CreatePersonParams {
        name: name.to_string(),
        number: number.to_string(),
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails if `existing` holds the name and is not the entry being updated.
///
/// # Arguments
/// - `existing` - Live entry currently using the candidate name, if any
/// - `updating` - Id of the entry being replaced, `None` on create
pub fn ensure_unique_name(
    existing: Option<&Person>,
    updating: Option<PersonId>,
) -> Result<(), ValidationError> {
    match existing {
        Some(person) if Some(person.id) != updating => Err(ValidationError::DuplicateName),
        _ => Ok(()),
    }
}
