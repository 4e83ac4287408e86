use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{memory::InMemoryPersonRepository, person::PersonRepository, PersonStore, StoreKind},
    error::{config::ConfigError, AppError},
};

const DEFAULT_LOG_FILTER: &str = "info,phonebook=debug,tower_http=debug";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the provided connection string, then runs all
/// pending SeaORM migrations to ensure the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `database_url` - Connection string for the database
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the store selected by configuration.
///
/// # Returns
/// - `Ok(Arc<dyn PersonStore>)` - Store ready to serve requests
/// - `Err(AppError)` - Missing database URL or failed database connection
pub async fn build_store(config: &Config) -> Result<Arc<dyn PersonStore>, AppError> {
    match config.store {
        StoreKind::Memory => {
            let repo = if config.seed_entries {
                InMemoryPersonRepository::seeded()
            } else {
                InMemoryPersonRepository::new()
            };

            tracing::info!("Using in-memory phonebook store");

            Ok(Arc::new(repo))
        }
        StoreKind::Database => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

            let db = connect_to_database(url).await.inspect_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
            })?;

            tracing::info!("Connected to database");

            Ok(Arc::new(PersonRepository::new(db)))
        }
    }
}
