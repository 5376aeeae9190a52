//! CLI command handlers, one per file.

mod chapter;
mod config;
mod docs;
mod resolve;
mod verse;

pub use chapter::run_chapter;
pub use config::run_config;
pub use docs::{run_completions, run_man};
pub use resolve::run_resolve;
pub use verse::run_verse;

pub(crate) use chapter::chapter_url;
pub(crate) use resolve::resolve_all;
pub(crate) use verse::verse_url;
