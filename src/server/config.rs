use std::path::PathBuf;

use crate::server::{
    data::StoreKind, error::config::ConfigError, service::validation::ValidationRules,
};

const DEFAULT_PORT: u16 = 3001;
/// Default prefix of the person routes.
pub const DEFAULT_BASE_PATH: &str = "/api/persons";

/// Fixed routes a base path may not shadow.
const RESERVED_PATHS: [&str; 2] = ["/info", "/api/openapi.json"];

pub struct Config {
    pub port: u16,
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub base_path: String,
    pub unique_names: bool,
    pub seed_entries: bool,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
                expected: "a port number",
            })?,
            None => DEFAULT_PORT,
        };

        let store = match var("PHONEBOOK_STORE") {
            Some(value) => value.parse::<StoreKind>().map_err(|_| ConfigError::InvalidValue {
                name: "PHONEBOOK_STORE".to_string(),
                value,
                expected: "'memory' or 'database'",
            })?,
            None => StoreKind::Database,
        };

        let database_url = var("DATABASE_URL");
        if store == StoreKind::Database && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
        }

        let base_path = match var("BASE_PATH") {
            Some(value) => normalize_base_path(&value).ok_or(ConfigError::InvalidValue {
                name: "BASE_PATH".to_string(),
                value,
                expected: "a non-root path such as /api/persons, free of route syntax and fixed routes",
            })?,
            None => DEFAULT_BASE_PATH.to_string(),
        };

        let unique_names = match var("UNIQUE_NAMES") {
            Some(value) => parse_bool("UNIQUE_NAMES", value)?,
            None => ValidationRules::for_store(store).unique_names,
        };

        let seed_entries = match var("SEED_ENTRIES") {
            Some(value) => parse_bool("SEED_ENTRIES", value)?,
            None => true,
        };

        Ok(Self {
            port,
            store,
            database_url,
            base_path,
            unique_names,
            seed_entries,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }

    /// Validation rules for the configured store.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            unique_names: self.unique_names,
            ..ValidationRules::for_store(self.store)
        }
    }
}

fn parse_bool(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value,
            expected: "true or false",
        }),
    }
}

/// Ensures a leading slash and strips trailing ones.
///
/// Rejects the root path, paths holding route capture syntax and paths taken by
/// fixed routes.
fn normalize_base_path(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed.contains(&['{', '}', '*', ':'][..]) {
        return None;
    }

    let path = format!("/{}", trimmed);
    if RESERVED_PATHS.contains(&path.as_str()) {
        return None;
    }

    Some(path)
}
