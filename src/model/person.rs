use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A phonebook entry as exposed over the API.
///
/// The identifier is always serialized as a string regardless of the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Request body for creating or replacing a phonebook entry.
///
/// Both fields are optional so that a missing field is reported as a validation
/// failure with a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonPayloadDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}
