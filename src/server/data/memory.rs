//! In-process phonebook store.
//!
//! Entries live in a single `Vec` owned by the repository and guarded by a tokio
//! `RwLock`. Clones share the same collection. Identifiers come from a counter that
//! only moves forward, so ids of deleted entries are never handed out again.

use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    data::{PersonStore, StoreKind},
    model::person::{CreatePersonParams, Person, PersonId, UpdatePersonParams},
};

/// Sample entries loaded when the memory store is seeded.
const SEED_ENTRIES: [(&str, &str); 6] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-44-5323523"),
    ("Dan Abramov", "12-43-234345"),
    ("Mary Poppendieck", "39-23-6423122"),
    ("Luka Poppendieck", "33-23-6423122"),
    ("Lena Poppendieck", "33-23-6423882"),
];

struct MemoryState {
    entries: Vec<Person>,
    next_id: i32,
}

impl MemoryState {
    fn position(&self, id: PersonId) -> Option<usize> {
        self.entries.iter().position(|p| p.id == id)
    }
}

/// Phonebook repository keeping entries in process memory.
#[derive(Clone)]
pub struct InMemoryPersonRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPersonRepository {
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// Creates a store holding `entries`.
    ///
    /// The id counter starts after the highest id present.
    pub fn with_entries(entries: Vec<Person>) -> Self {
        let next_id = entries.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;

        Self {
            state: Arc::new(RwLock::new(MemoryState { entries, next_id })),
        }
    }

    /// Creates a store holding the sample phonebook, ids 1 through 6.
    pub fn seeded() -> Self {
        let entries = SEED_ENTRIES
            .iter()
            .zip(1..)
            .map(|((name, number), id)| Person {
                id: PersonId(id),
                name: name.to_string(),
                number: number.to_string(),
            })
            .collect();

        Self::with_entries(entries)
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }

    async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        Ok(self.state.read().await.entries.clone())
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, DbErr> {
        let state = self.state.read().await;

        Ok(state.entries.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, DbErr> {
        let state = self.state.read().await;

        Ok(state.entries.iter().find(|p| p.name == name).cloned())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        Ok(self.state.read().await.entries.len() as u64)
    }

    async fn create(&self, params: CreatePersonParams) -> Result<Person, DbErr> {
        let mut state = self.state.write().await;

        let id = PersonId(state.next_id);
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| DbErr::Custom("Person id space exhausted".to_string()))?;

        let person = Person {
            id,
            name: params.name,
            number: params.number,
        };
        state.entries.push(person.clone());

        Ok(person)
    }

    async fn update(&self, params: UpdatePersonParams) -> Result<Option<Person>, DbErr> {
        let mut state = self.state.write().await;

        let Some(index) = state.position(params.id) else {
            return Ok(None);
        };

        let entry = &mut state.entries[index];
        entry.name = params.name;
        entry.number = params.number;

        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: PersonId) -> Result<Option<Person>, DbErr> {
        let mut state = self.state.write().await;

        Ok(state.position(id).map(|index| state.entries.remove(index)))
    }
}
