use barky_core::DbError;
use barky_domain::models::{Bookmark, Service};

use crate::models as db_models;

/// Rows making up one service, ordered by position.
pub struct ServiceAggregate {
    pub sku: String,
    pub bookmarks: Vec<db_models::Bookmark>,
}

impl TryFrom<ServiceAggregate> for Service {
    type Error = DbError;

    fn try_from(agg: ServiceAggregate) -> Result<Self, Self::Error> {
        let bookmarks = agg
            .bookmarks
            .into_iter()
            .map(|row| {
                if row.sku != agg.sku {
                    return Err(DbError::InvalidRow(format!(
                        "bookmark {} belongs to '{}', not '{}'",
                        row.id, row.sku, agg.sku
                    )));
                }
                Ok(Bookmark::from(row))
            })
            .collect::<Result<Vec<Bookmark>, DbError>>()?;

        Ok(Service::from_parts(agg.sku, bookmarks))
    }
}

impl From<db_models::Bookmark> for Bookmark {
    fn from(row: db_models::Bookmark) -> Self {
        Bookmark::from_parts(
            row.id,
            row.name,
            row.url,
            row.category,
            row.created_at,
            row.edited_at,
        )
    }
}
