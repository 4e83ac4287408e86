//! Phonebook entry domain models and parameters.
//!
//! Provides the domain model for a phonebook entry along with its identifier type and
//! the parameter types accepted by the repository for create and update operations.
//! Parameter types are only built from input that has passed validation.

use std::fmt;

use crate::model::person::{PersonDto, PersonPayloadDto};

/// Identifier of a phonebook entry.
///
/// Assigned by the store on creation and never changed afterwards. The database store
/// uses its auto-increment primary key, the memory store a monotonically increasing
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub i32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl Person {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: PersonId(entity.id),
            name: entity.name,
            number: entity.number,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// The identifier is rendered as a string so clients never depend on the
    /// store-native key type.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id.to_string(),
            name: self.name,
            number: self.number,
        }
    }
}

/// Unvalidated entry fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonCandidate {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonCandidate {
    /// Converts a request body into a candidate for validation.
    pub fn from_dto(dto: PersonPayloadDto) -> Self {
        Self {
            name: dto.name,
            number: dto.number,
        }
    }
}

/// Validated fields for a new phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePersonParams {
    pub name: String,
    pub number: String,
}

/// Validated replacement fields for an existing phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePersonParams {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl UpdatePersonParams {
    /// Builds update parameters for `id` from already validated fields.
    pub fn new(id: PersonId, fields: CreatePersonParams) -> Self {
        Self {
            id,
            name: fields.name,
            number: fields.number,
        }
    }
}
