//! `wol-link verse` – link for raw book/chapter tokens.

use anyhow::{Context, Result};
use wol_core::config::{LinkConfig, TokenEncoding};
use wol_core::LinkBuilder;

/// Builds the link, with `--strict` / `--encode` layered over the config.
pub(crate) fn verse_url(
    link: &LinkConfig,
    book: &str,
    chapter: &str,
    strict: bool,
    encode: bool,
) -> Result<String> {
    let mut cfg = link.clone();
    cfg.strict |= strict;
    if encode {
        cfg.encoding = TokenEncoding::Percent;
    }
    let builder = LinkBuilder::new(cfg)?;
    builder
        .try_main_verse_url(book, chapter)
        .with_context(|| format!("build link for book={book:?} chapter={chapter:?}"))
}

pub fn run_verse(
    link: &LinkConfig,
    book: &str,
    chapter: &str,
    strict: bool,
    encode: bool,
) -> Result<()> {
    let url = verse_url(link, book, chapter, strict, encode)?;
    tracing::info!("verse book={} chapter={} -> {}", book, chapter, url);
    println!("{url}");
    Ok(())
}
