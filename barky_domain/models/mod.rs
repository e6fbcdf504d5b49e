pub mod bookmark;
pub mod service;

pub use bookmark::Bookmark;
pub use service::Service;
