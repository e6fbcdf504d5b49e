mod command;
mod event;
mod query;

pub mod commands;
pub mod queries;

pub use command::*;
pub use event::*;
pub use query::*;
