use super::*;

/// Tests deleting an entry by id.
///
/// Verifies that the repository removes the row and returns the removed entry.
///
/// Expected: Ok(Some) with entry deleted
#[tokio::test]
async fn deletes_person_successfully() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let removed = repo.delete(PersonId(person.id)).await?;

    assert_eq!(removed.map(|p| p.name), Some(person.name.clone()));

    let db_person = entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?;
    assert!(db_person.is_none());

    Ok(())
}

/// Tests deleting a nonexistent entry.
///
/// Expected: Ok(None) with table unchanged
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo.delete(PersonId(99999)).await?;

    assert!(result.is_none());
    assert_eq!(row_count(db).await?, 1);

    Ok(())
}

/// Tests deleting one entry doesn't affect others.
///
/// Expected: Ok with only the target removed
#[tokio::test]
async fn deletes_without_affecting_others() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_person(db).await?;
    let second = factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    repo.delete(PersonId(first.id)).await?;

    assert!(repo.get_by_id(PersonId(first.id)).await?.is_none());
    assert!(repo.get_by_id(PersonId(second.id)).await?.is_some());

    Ok(())
}
