//! Bookmarks Entity Module

pub mod bookmark;

pub use bookmark::{Bookmark, BookmarkStatus};
