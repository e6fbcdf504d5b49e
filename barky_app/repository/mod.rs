mod seen_services;
mod service_repository;

pub use seen_services::SeenServices;
pub use service_repository::ServiceRepository;
