use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{PersonStore, StoreKind},
    model::person::{CreatePersonParams, Person, PersonId, UpdatePersonParams},
};

/// SeaORM-backed phonebook repository.
///
/// Holds a clone of the connection pool, clones share the same pool.
#[derive(Clone)]
pub struct PersonRepository {
    db: DatabaseConnection,
}

impl PersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonStore for PersonRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::Database
    }

    async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entries = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entries.into_iter().map(Person::from_entity).collect())
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, DbErr> {
        let entry = entity::prelude::Person::find_by_id(id.0)
            .one(&self.db)
            .await?;

        Ok(entry.map(Person::from_entity))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, DbErr> {
        let entry = entity::prelude::Person::find()
            .filter(entity::person::Column::Name.eq(name))
            .order_by_asc(entity::person::Column::Id)
            .one(&self.db)
            .await?;

        Ok(entry.map(Person::from_entity))
    }

    async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Person::find().count(&self.db).await
    }

    async fn create(&self, params: CreatePersonParams) -> Result<Person, DbErr> {
        let entry = entity::person::ActiveModel {
            name: ActiveValue::Set(params.name),
            number: ActiveValue::Set(params.number),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Person::from_entity(entry))
    }

    async fn update(&self, params: UpdatePersonParams) -> Result<Option<Person>, DbErr> {
        let Some(existing) = entity::prelude::Person::find_by_id(params.id.0)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.number = ActiveValue::Set(params.number);

        let updated = active.update(&self.db).await?;

        Ok(Some(Person::from_entity(updated)))
    }

    async fn delete(&self, id: PersonId) -> Result<Option<Person>, DbErr> {
        let Some(existing) = entity::prelude::Person::find_by_id(id.0)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let result = entity::prelude::Person::delete_by_id(id.0)
            .exec(&self.db)
            .await?;

        // Removed concurrently between the lookup and the delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Person::from_entity(existing)))
    }
}
