//! Runs against the database in `TEST_DATABASE_URL`:
//! `cargo test -p barky_server --test db_service_repository_test -- --ignored`

use barky_app::uow::{UnitOfWork, UnitOfWorkProvider};
use barky_core::ApplicationError;
use barky_db::{establish_test_connection_pool, uow::PostgresUnitOfWorkProvider};
use barky_domain::{
    models::Service,
    test_utils::{BookmarkFactoryOptions, bookmark_factory},
};

async fn setup_provider() -> Result<PostgresUnitOfWorkProvider, ApplicationError> {
    let pool = establish_test_connection_pool().await?;
    let provider = PostgresUnitOfWorkProvider::new(pool);
    provider.initialize().await?;
    Ok(provider)
}

fn service_with(sku: &str, ids: &[i64]) -> Service {
    let mut service = Service::new(sku).unwrap();
    for id in ids {
        service.add_bookmark(bookmark_factory(BookmarkFactoryOptions {
            id: Some(*id),
            name: Some(sku),
            ..Default::default()
        }));
    }
    service
}

fn unique_sku(prefix: &str) -> String {
    format!("{prefix}_{}", rand::random::<u32>())
}

fn unique_id() -> i64 {
    rand::random::<u32>() as i64
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_add_then_get_within_transaction() -> Result<(), ApplicationError> {
    let provider = setup_provider().await?;
    let uow = provider.begin().await?;
    let sku = unique_sku("tx");
    let (first, second) = (unique_id(), unique_id());

    uow.services().add(&mut service_with(&sku, &[first, second])).await?;

    let service = uow.services().get(&sku).await?.unwrap();
    let ids: Vec<i64> = service.bookmarks().iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![first, second]);

    let owner = uow.services().get_by_bookmark_id(second).await?.unwrap();
    assert_eq!(owner.sku(), sku);

    assert_eq!(uow.collect_new_events().len(), 2);
    uow.rollback().await?;

    let uow = provider.begin().await?;
    assert!(uow.services().get(&sku).await?.is_none());
    uow.rollback().await?;

    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_commit_persists_service() -> Result<(), ApplicationError> {
    let provider = setup_provider().await?;
    let sku = unique_sku("commit");
    let id = unique_id();

    let uow = provider.begin().await?;
    uow.services().add(&mut service_with(&sku, &[id])).await?;
    uow.commit().await?;

    let uow = provider.begin().await?;
    let service = uow.services().get(&sku).await?.unwrap();
    assert_eq!(service.bookmarks().len(), 1);
    assert!(service.pending_events().is_empty());
    assert!(uow.services().get_by_bookmark_id(id).await?.is_some());
    uow.rollback().await?;

    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_dropped_unit_of_work_rolls_back() -> Result<(), ApplicationError> {
    let provider = setup_provider().await?;
    let sku = unique_sku("drop");

    {
        let uow = provider.begin().await?;
        uow.services().add(&mut service_with(&sku, &[unique_id()])).await?;
    }

    let uow = provider.begin().await?;
    assert!(uow.services().get(&sku).await?.is_none());
    assert!(uow.services().get_by_bookmark_id(-1).await?.is_none());
    uow.rollback().await?;

    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_events_survive_reload_within_transaction() -> Result<(), ApplicationError> {
    let provider = setup_provider().await?;
    let uow = provider.begin().await?;
    let sku = unique_sku("events");

    uow.services().add(&mut service_with(&sku, &[unique_id()])).await?;

    // Reloaded from the transaction, without the first add's events.
    let mut service = uow.services().get(&sku).await?.unwrap();
    service.add_bookmark(bookmark_factory(BookmarkFactoryOptions {
        id: Some(unique_id()),
        name: Some(&sku),
        ..Default::default()
    }));
    uow.services().add(&mut service).await?;

    assert_eq!(uow.collect_new_events().len(), 2);
    assert!(uow.collect_new_events().is_empty());
    uow.rollback().await?;

    Ok(())
}
