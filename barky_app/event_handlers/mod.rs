mod notify_bookmark_added;
mod notify_duplicate_bookmark;
mod publish_bookmark_added;

pub use notify_bookmark_added::NotifyBookmarkAddedHandler;
pub use notify_duplicate_bookmark::NotifyDuplicateBookmarkHandler;
pub use publish_bookmark_added::PublishBookmarkAddedHandler;
