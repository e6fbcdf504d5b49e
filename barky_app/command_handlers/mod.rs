mod add_bookmark;

pub use add_bookmark::AddBookmarkCommandHandler;
