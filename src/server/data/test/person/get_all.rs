use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_when_no_entries() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db.clone());
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing returns every entry in ascending id order.
///
/// Expected: Ok with entries in insertion order
#[tokio::test]
async fn returns_all_entries_in_id_order() -> Result<(), DbErr> {
    let test = person_db().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_person(db).await?;
    let second = factory::create_person(db).await?;
    let third = factory::create_person(db).await?;

    let repo = PersonRepository::new(db.clone());
    let result = repo.get_all().await?;

    let ids: Vec<i32> = result.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(result[1].name, second.name);

    Ok(())
}
