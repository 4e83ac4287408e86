use super::*;

/// Tests counting reflects inserts and deletes.
///
/// Expected: Ok with counts 0, 2, 1
#[tokio::test]
async fn counts_live_entries() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db.clone());
    assert_eq!(repo.count().await?, 0);

    let first = factory::create_person(db).await?;
    factory::create_person(db).await?;
    assert_eq!(repo.count().await?, 2);

    repo.delete(PersonId(first.id)).await?;
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
