//! Person factory for creating phonebook entries in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test phonebook entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&db)
///     .name("Arto Hellas")
///     .number("040-123456")
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    number: String,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Person {id}"` where id is auto-incremented
    /// - number: `"040-{id:06}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Person {}", id),
            number: format!("040-{:06}", id),
        }
    }

    /// Sets the name for the entry.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone number for the entry.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Inserts the entry into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted person with its generated id
    /// - `Err(DbErr)` - Database insert failed
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            name: ActiveValue::Set(self.name),
            number: ActiveValue::Set(self.number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
