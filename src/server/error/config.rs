use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined for the
    /// selected configuration. Check `.env.example` for the expected variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be interpreted.
    #[error("Invalid value '{value}' for environment variable {name}: expected {expected}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The raw value that was rejected
        value: String,
        /// Short description of the accepted format
        expected: &'static str,
    },
}
