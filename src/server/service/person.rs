use crate::server::{
    data::PersonStore,
    error::AppError,
    model::person::{Person, PersonCandidate, PersonId, UpdatePersonParams},
    service::validation::{self, ValidationRules},
};

pub struct PersonService<'a> {
    store: &'a dyn PersonStore,
    rules: &'a ValidationRules,
}

impl<'a> PersonService<'a> {
    pub fn new(store: &'a dyn PersonStore, rules: &'a ValidationRules) -> Self {
        Self { store, rules }
    }

    /// Gets all phonebook entries
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Gets a specific phonebook entry by ID
    pub async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Counts phonebook entries
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.store.count().await?)
    }

    /// Validates a candidate and stores it as a new entry
    ///
    /// # Returns
    /// - `Ok(Person)`: The stored entry with its assigned id
    /// - `Err(AppError::ValidationErr)`: Candidate rejected, nothing stored
    /// - `Err(AppError::DbErr)`: Store failure
    pub async fn create(&self, candidate: PersonCandidate) -> Result<Person, AppError> {
        let params = validation::validate_candidate(&candidate, self.rules)?;

        if self.rules.unique_names {
            let existing = self.store.find_by_name(&params.name).await?;
            validation::ensure_unique_name(existing.as_ref(), None)?;
        }

        let person = self.store.create(params).await?;

        tracing::debug!("Created person {} ({})", person.id, person.name);

        Ok(person)
    }

    /// Validates a candidate and replaces the fields of an existing entry
    ///
    /// Returns None if no entry has the given id.
    pub async fn update(
        &self,
        id: PersonId,
        candidate: PersonCandidate,
    ) -> Result<Option<Person>, AppError> {
        let fields = validation::validate_candidate(&candidate, self.rules)?;

        if self.store.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if self.rules.unique_names {
            let existing = self.store.find_by_name(&fields.name).await?;
            validation::ensure_unique_name(existing.as_ref(), Some(id))?;
        }

        let person = self
            .store
            .update(UpdatePersonParams::new(id, fields))
            .await?;

        if let Some(person) = &person {
            tracing::debug!("Updated person {} ({})", person.id, person.name);
        }

        Ok(person)
    }

    /// Deletes a phonebook entry
    /// Returns the removed entry, or None if not found
    pub async fn delete(&self, id: PersonId) -> Result<Option<Person>, AppError> {
        let removed = self.store.delete(id).await?;

        if let Some(person) = &removed {
            tracing::debug!("Deleted person {} ({})", person.id, person.name);
        }

        Ok(removed)
    }
}
