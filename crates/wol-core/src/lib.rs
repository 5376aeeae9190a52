pub mod config;
pub mod error;
pub mod link;
pub mod logging;

pub use error::LinkError;
pub use link::{main_verse_url, shared, ChapterRef, LinkBuilder};
