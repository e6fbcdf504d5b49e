use barky_core::{AppError, ApplicationError, Result};
use barky_domain::models::Service;

use crate::{
    context::HandlerContext,
    cqrs::{CommandHandler, commands::AddBookmark},
    uow::UnitOfWork,
};

pub struct AddBookmarkCommandHandler {}

impl AddBookmarkCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddBookmark> for AddBookmarkCommandHandler {
    async fn handle(
        &self,
        command: AddBookmark,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _ctx: &HandlerContext,
    ) -> Result<(), ApplicationError> {
        let services = uow.services();
        let bookmark = command.to_bookmark()?;
        let sku = command.sku();

        // A bookmark id belongs to a single service
        if let Some(owner) = services.get_by_bookmark_id(bookmark.id()).await? {
            if owner.sku() != sku {
                return Err(AppError::BookmarkIdTaken {
                    id: bookmark.id(),
                    sku: owner.sku().to_string(),
                }
                .into());
            }
        }

        let mut service = match services.get(sku).await? {
            Some(service) => service,
            None => Service::new(sku)?,
        };

        if !service.add_bookmark(bookmark) {
            tracing::warn!(sku, bookmark_id = command.id, "Bookmark already present, skipping");
        }

        services.add(&mut service).await?;

        Ok(())
    }
}
