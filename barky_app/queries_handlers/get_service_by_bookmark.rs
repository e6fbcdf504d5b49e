use async_trait::async_trait;

use barky_core::ApplicationError;

use crate::{
    context::HandlerContext,
    cqrs::{Query, QueryHandler, queries::GetServiceByBookmark},
    uow::UnitOfWork,
};

pub struct GetServiceByBookmarkHandler {}

impl GetServiceByBookmarkHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetServiceByBookmark> for GetServiceByBookmarkHandler {
    async fn handle(
        &self,
        query: GetServiceByBookmark,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _ctx: &HandlerContext,
    ) -> Result<<GetServiceByBookmark as Query>::Output, ApplicationError> {
        uow.services().get_by_bookmark_id(query.bookmark_id).await
    }
}
