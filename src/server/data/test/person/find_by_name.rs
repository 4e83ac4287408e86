use super::*;

/// Tests looking up an entry by its exact name.
///
/// Expected: Ok(Some) with the matching entry
#[tokio::test]
async fn finds_entry_with_exact_name() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    factory::create_person(db).await?;
    let target = factory::person::PersonFactory::new(db)
        .name("Dan Abramov")
        .build()
        .await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo.find_by_name("Dan Abramov").await?;

    assert_eq!(result.map(|p| p.id), Some(PersonId(target.id)));

    Ok(())
}

/// Tests name lookup does not match partial or differently cased names.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_partial_matches() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .name("Dan Abramov")
        .build()
        .await?;

    let repo = PersonRepository::new(db.clone());

    assert!(repo.find_by_name("Dan").await?.is_none());
    assert!(repo.find_by_name("dan abramov").await?.is_none());

    Ok(())
}
