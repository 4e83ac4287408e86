use crate::server::{
    data::{person::PersonRepository, PersonStore, StoreKind},
    model::person::{CreatePersonParams, PersonId, UpdatePersonParams},
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod count;
mod create;
mod delete;
mod find_by_name;
mod get_all;
mod get_by_id;
mod update;

/// Builds a test context with the person table created.
async fn person_db() -> TestContext {
    TestBuilder::new().with_person_table().build().await.unwrap()
}

/// Counts rows in the person table directly, bypassing the repository.
async fn row_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Person::find().count(db).await
}
