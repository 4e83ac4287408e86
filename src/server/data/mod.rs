//! Repository layer for phonebook entries.
//!
//! Two stores implement [`PersonStore`]: [`person::PersonRepository`] persists entries
//! through SeaORM, [`memory::InMemoryPersonRepository`] keeps them in process memory.
//! Both return domain models so the service and controller layers never see entity
//! models or store-native keys.

pub mod memory;
pub mod person;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::server::model::person::{CreatePersonParams, Person, PersonId, UpdatePersonParams};

/// Which store implementation is serving requests.
///
/// The HTTP contract differs slightly between stores: deletes return 204 on the
/// database store but echo the removed entry on the memory store, and malformed
/// identifiers are a 400 only on the database store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Database,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" | "db" => Ok(Self::Database),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Database => write!(f, "database"),
        }
    }
}

/// Storage operations for phonebook entries.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Store implementation backing this repository.
    fn kind(&self) -> StoreKind;

    /// Gets all entries in ascending id order.
    async fn get_all(&self) -> Result<Vec<Person>, DbErr>;

    /// Gets an entry by id, `None` if absent.
    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, DbErr>;

    /// Gets the first entry with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, DbErr>;

    /// Counts live entries.
    async fn count(&self) -> Result<u64, DbErr>;

    /// Inserts a new entry and returns it with its assigned id.
    async fn create(&self, params: CreatePersonParams) -> Result<Person, DbErr>;

    /// Replaces name and number of an entry.
    ///
    /// Returns `None` without modifying anything when no entry has the id.
    async fn update(&self, params: UpdatePersonParams) -> Result<Option<Person>, DbErr>;

    /// Removes an entry and returns it, `None` if absent.
    async fn delete(&self, id: PersonId) -> Result<Option<Person>, DbErr>;
}
