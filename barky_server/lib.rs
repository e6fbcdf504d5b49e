pub mod http;
pub mod logs;
pub mod publish;

pub use http::{AppState, WebRouter};
