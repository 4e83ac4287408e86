use super::*;

/// Tests fetching an existing entry by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_person() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .name("Ada Lovelace")
        .number("39-44-5323523")
        .build()
        .await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo.get_by_id(PersonId(person.id)).await?;

    let found = result.expect("person should be found");
    assert_eq!(found.id, PersonId(person.id));
    assert_eq!(found.name, "Ada Lovelace");
    assert_eq!(found.number, "39-44-5323523");

    Ok(())
}

/// Tests fetching an id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo.get_by_id(PersonId(99999)).await?;

    assert!(result.is_none());

    Ok(())
}
