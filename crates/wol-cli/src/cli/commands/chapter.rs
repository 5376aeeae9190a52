//! `wol-link chapter` – link for a validated reference.

use anyhow::Result;
use wol_core::config::LinkConfig;
use wol_core::{ChapterRef, LinkBuilder};

pub(crate) fn chapter_url(link: &LinkConfig, reference: ChapterRef) -> Result<String> {
    let builder = LinkBuilder::new(link.clone())?;
    Ok(builder.chapter_url(reference))
}

pub fn run_chapter(link: &LinkConfig, reference: ChapterRef) -> Result<()> {
    let url = chapter_url(link, reference)?;
    tracing::info!("chapter {} -> {}", reference, url);
    println!("{url}");
    Ok(())
}
