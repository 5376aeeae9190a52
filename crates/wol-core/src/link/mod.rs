//! Study-page link building.
//!
//! Builds links of the form
//! `https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/{book}/{chapter}#study=discover`
//! from a [`LinkConfig`]. Callers normally construct a [`LinkBuilder`] and pass
//! it around; [`shared`] hands out one process-wide builder with the default
//! config for code that has nothing to pass.

mod reference;
mod resolve;
mod token;

use std::sync::OnceLock;

pub use reference::{ChapterRef, BOOK_COUNT};
pub use resolve::resolve_href;

use crate::config::{LinkConfig, TokenEncoding};
use crate::error::{LinkError, TokenField};

/// Immutable link builder. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    config: LinkConfig,
}

impl LinkBuilder {
    /// Builds from a validated config.
    pub fn new(config: LinkConfig) -> Result<Self, LinkError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Link to the study page for `book` / `chapter`.
    ///
    /// Never fails. With raw encoding (the default) both tokens are embedded
    /// verbatim, so `("", "")` yields `.../nwtsty//#study=discover` and tokens
    /// containing `/`, `?` or `#` change the URL structure. Use
    /// [`try_main_verse_url`](Self::try_main_verse_url) to reject such input.
    pub fn main_verse_url(&self, book: &str, chapter: &str) -> String {
        let mut out = self.join_tokens(book, chapter);
        if !self.config.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.config.fragment);
        }
        tracing::trace!(book, chapter, url = %out, "built study link");
        out
    }

    /// Like [`main_verse_url`](Self::main_verse_url) but rejects empty tokens
    /// and, in strict mode, tokens unsafe for a path segment.
    pub fn try_main_verse_url(&self, book: &str, chapter: &str) -> Result<String, LinkError> {
        let (strict, encoding) = (self.config.strict, self.config.encoding);
        token::check_token(TokenField::Book, book, strict, encoding)?;
        token::check_token(TokenField::Chapter, chapter, strict, encoding)?;
        Ok(self.main_verse_url(book, chapter))
    }

    /// Link for a typed reference; numeric tokens never need escaping.
    pub fn chapter_url(&self, chapter: ChapterRef) -> String {
        self.main_verse_url(&chapter.book().to_string(), &chapter.chapter().to_string())
    }

    /// Resolves a site-relative href (as found in study pages) against the origin.
    pub fn resolve_href(&self, href: &str) -> String {
        resolve_href(&self.config.origin, href)
    }

    fn prefix(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.origin, self.config.library_path, self.config.publication
        )
    }

    fn join_tokens(&self, book: &str, chapter: &str) -> String {
        let prefix = self.prefix();
        match self.config.encoding {
            TokenEncoding::Raw => format!("{prefix}/{book}/{chapter}"),
            TokenEncoding::Percent => {
                let encoded = url::Url::parse(&prefix).ok().and_then(|base| {
                    Some((encode_segment(&base, book)?, encode_segment(&base, chapter)?))
                });
                match encoded {
                    Some((book, chapter)) => format!("{prefix}/{book}/{chapter}"),
                    None => {
                        tracing::warn!("cannot percent-encode against {prefix}; using raw tokens");
                        format!("{prefix}/{book}/{chapter}")
                    }
                }
            }
        }
    }
}

/// Percent-encodes `token` as a single path segment.
///
/// `push` skips `.` and `..`, so dot-only tokens are escaped by hand.
fn encode_segment(base: &url::Url, token: &str) -> Option<String> {
    if token == "." || token == ".." {
        return Some("%2E".repeat(token.len()));
    }
    let mut url = base.clone();
    url.path_segments_mut().ok()?.push(token);
    url.path_segments()?.last().map(str::to_string)
}

static SHARED: OnceLock<LinkBuilder> = OnceLock::new();

/// The process-wide builder with the default config.
///
/// Created on first call; every caller on every thread gets the same instance.
pub fn shared() -> &'static LinkBuilder {
    SHARED.get_or_init(|| {
        tracing::debug!("initializing shared link builder");
        LinkBuilder::default()
    })
}

/// Study-page link for `book` / `chapter` using the shared builder.
///
/// # Examples
///
/// - `main_verse_url("19", "1")` → `"https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/19/1#study=discover"`
pub fn main_verse_url(book: &str, chapter: &str) -> String {
    shared().main_verse_url(book, chapter)
}
