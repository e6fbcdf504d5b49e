mod get_service;
mod get_service_by_bookmark;

pub use get_service::GetServiceHandler;
pub use get_service_by_bookmark::GetServiceByBookmarkHandler;
