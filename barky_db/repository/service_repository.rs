use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use barky_app::repository::{SeenServices, ServiceRepository};
use barky_core::{ApplicationError, DbError};
use barky_domain::{events::DomainEvent, models::Service};

use crate::{mapping::ServiceAggregate, models as db_models};

#[derive(Clone)]
pub struct PostgresServiceRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    seen: Arc<SeenServices>,
}

impl<'a> PostgresServiceRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>, seen: Arc<SeenServices>) -> Self {
        Self { tx, seen }
    }
}

#[async_trait::async_trait]
impl<'a> ServiceRepository for PostgresServiceRepository<'a> {
    async fn add(&self, service: &mut Service) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO services (sku)
            VALUES ($1)
            ON CONFLICT (sku) DO NOTHING
            "#,
        )
        .bind(service.sku())
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        // Bookmarks are rewritten as a whole to keep their order.
        sqlx::query("DELETE FROM bookmarks WHERE sku = $1")
            .bind(service.sku())
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        for (position, bookmark) in service.bookmarks().iter().enumerate() {
            let position = bookmark_position(service.sku(), position)?;
            sqlx::query(
                r#"
                INSERT INTO bookmarks (id, sku, name, url, category, created_at, edited_at, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(bookmark.id())
            .bind(service.sku())
            .bind(bookmark.name())
            .bind(bookmark.url())
            .bind(bookmark.category())
            .bind(bookmark.created_at())
            .bind(bookmark.edited_at())
            .bind(position)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }

        self.seen.track(service);
        Ok(())
    }

    async fn get(&self, sku: &str) -> Result<Option<Service>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let exists: Option<String> = sqlx::query_scalar("SELECT sku FROM services WHERE sku = $1")
            .bind(sku)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let Some(sku) = exists else {
            return Ok(None);
        };

        let bookmarks = sqlx::query_as::<_, db_models::Bookmark>(
            r#"
            SELECT id, sku, name, url, category, created_at, edited_at, position
            FROM bookmarks
            WHERE sku = $1
            ORDER BY position
            "#,
        )
        .bind(&sku)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let service = Service::try_from(ServiceAggregate { sku, bookmarks })?;
        Ok(Some(service))
    }

    async fn get_by_bookmark_id(
        &self,
        bookmark_id: i64,
    ) -> Result<Option<Service>, ApplicationError> {
        let sku: Option<String> = {
            let mut tx_guard = self.tx.lock().await;
            sqlx::query_scalar("SELECT sku FROM bookmarks WHERE id = $1")
                .bind(bookmark_id)
                .fetch_optional(&mut *tx_guard.as_mut())
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        };

        match sku {
            Some(sku) => self.get(&sku).await,
            None => Ok(None),
        }
    }

    fn collect_new_events(&self) -> Vec<DomainEvent> {
        self.seen.drain_events()
    }
}

fn bookmark_position(sku: &str, position: usize) -> Result<i32, DbError> {
    i32::try_from(position).map_err(|_| {
        DbError::InvalidRow(format!(
            "bookmark position {position} of '{sku}' does not fit the position column"
        ))
    })
}
