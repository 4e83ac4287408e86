use super::*;

/// Tests creating an entry returns it with a store-assigned id.
///
/// Verifies that the repository inserts the row and returns the stored
/// name and number alongside the generated primary key.
///
/// Expected: Ok with entry persisted
#[tokio::test]
async fn creates_person_successfully() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db.clone());
    let created = repo
        .create(CreatePersonParams {
            name: "Alice".to_string(),
            number: "123-456".to_string(),
        })
        .await?;

    assert_eq!(created.name, "Alice");
    assert_eq!(created.number, "123-456");

    let db_person = entity::prelude::Person::find_by_id(created.id.0)
        .one(db)
        .await?
        .expect("created row should exist");
    assert_eq!(db_person.name, "Alice");
    assert_eq!(db_person.number, "123-456");

    Ok(())
}

/// Tests consecutive creates receive distinct ids.
///
/// Expected: Ok with two different ids and two rows
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db.clone());
    let first = repo
        .create(CreatePersonParams {
            name: "Alice".to_string(),
            number: "1".to_string(),
        })
        .await?;
    let second = repo
        .create(CreatePersonParams {
            name: "Alice".to_string(),
            number: "2".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(row_count(db).await?, 2);

    Ok(())
}

/// Tests the repository reports the database store kind.
#[tokio::test]
async fn reports_database_kind() {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    assert_eq!(PersonRepository::new(db.clone()).kind(), StoreKind::Database);
}
