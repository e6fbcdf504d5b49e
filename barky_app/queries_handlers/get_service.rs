use async_trait::async_trait;

use barky_core::ApplicationError;

use crate::{
    context::HandlerContext,
    cqrs::{Query, QueryHandler, queries::GetService},
    uow::UnitOfWork,
};

pub struct GetServiceHandler {}

impl GetServiceHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetService> for GetServiceHandler {
    async fn handle(
        &self,
        query: GetService,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _ctx: &HandlerContext,
    ) -> Result<<GetService as Query>::Output, ApplicationError> {
        uow.services().get(&query.sku).await
    }
}
