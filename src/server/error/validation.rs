use thiserror::Error;

/// Rejection reasons for a candidate phonebook entry.
///
/// The `Display` output is returned verbatim to the client in the `error` field
/// of a 400 Bad Request response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `name` field is absent or blank.
    #[error("name is missing")]
    MissingName,

    /// The `number` field is absent or blank.
    #[error("number is missing")]
    MissingNumber,

    /// The name is shorter than the configured minimum.
    #[error("name must be at least {min} characters long")]
    NameTooShort {
        /// Minimum accepted length in characters
        min: usize,
    },

    /// Another live entry already uses this name.
    #[error("name must be unique")]
    DuplicateName,
}
