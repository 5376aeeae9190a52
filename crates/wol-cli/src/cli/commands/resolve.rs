//! `wol-link resolve` – absolute links from site-relative hrefs.

use anyhow::Result;
use wol_core::config::LinkConfig;
use wol_core::LinkBuilder;

pub(crate) fn resolve_all(link: &LinkConfig, hrefs: &[String]) -> Result<Vec<String>> {
    let builder = LinkBuilder::new(link.clone())?;
    Ok(hrefs.iter().map(|h| builder.resolve_href(h)).collect())
}

pub fn run_resolve(link: &LinkConfig, hrefs: &[String]) -> Result<()> {
    for url in resolve_all(link, hrefs)? {
        println!("{url}");
    }
    Ok(())
}
