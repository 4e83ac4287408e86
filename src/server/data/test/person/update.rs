use super::*;

/// Tests updating replaces name and number but keeps the id.
///
/// Expected: Ok(Some) with new fields, row updated
#[tokio::test]
async fn updates_person_successfully() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let updated = repo
        .update(UpdatePersonParams {
            id: PersonId(person.id),
            name: "Mary Poppendieck".to_string(),
            number: "39-23-6423122".to_string(),
        })
        .await?
        .expect("existing person should be updated");

    assert_eq!(updated.id, PersonId(person.id));
    assert_eq!(updated.name, "Mary Poppendieck");
    assert_eq!(updated.number, "39-23-6423122");

    let db_person = entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_person.name, "Mary Poppendieck");

    Ok(())
}

/// Tests updating an unknown id leaves the table unchanged.
///
/// Expected: Ok(None), no rows added
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo
        .update(UpdatePersonParams {
            id: PersonId(99999),
            name: "Nobody".to_string(),
            number: "000".to_string(),
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(row_count(db).await?, 1);

    let untouched = entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched, person);

    Ok(())
}
