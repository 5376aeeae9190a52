//! Integration test: load a config file from disk, build a link builder from it,
//! and check the links it produces against the shared default builder.

use std::io::Write;

use wol_core::config::{self, TokenEncoding};
use wol_core::{main_verse_url, shared, ChapterRef, LinkBuilder, LinkError};

#[test]
fn builder_from_config_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"
[link]
library_path = "en/wol/b/r1/lp-e"
publication = "nwtsty"
encoding = "percent"
strict = true
"#
    )
    .unwrap();
    f.flush().unwrap();

    let cfg = config::load_from(f.path()).unwrap();
    assert_eq!(cfg.link.encoding, TokenEncoding::Percent);
    let builder = LinkBuilder::new(cfg.link).unwrap();

    assert_eq!(
        builder.try_main_verse_url("40", "24").unwrap(),
        "https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/40/24#study=discover"
    );
    assert_eq!(
        builder.try_main_verse_url("40 ", "24").unwrap(),
        "https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/40%20/24#study=discover"
    );
    assert_eq!(
        builder.try_main_verse_url("..", "1").unwrap(),
        "https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/%2E%2E/1#study=discover"
    );
    assert!(matches!(
        builder.try_main_verse_url("", "1"),
        Err(LinkError::EmptyToken { .. })
    ));
}

#[test]
fn default_builder_matches_shared() {
    let own = LinkBuilder::default();
    for (b, c) in [("19", "1"), ("1", "1"), ("", ""), ("66", "22")] {
        assert_eq!(own.main_verse_url(b, c), main_verse_url(b, c));
    }
    let r = ChapterRef::new(66, 22).unwrap();
    assert_eq!(own.chapter_url(r), shared().chapter_url(r));
}

#[test]
fn shared_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let url = shared().main_verse_url(&i.to_string(), "1");
                (shared() as *const LinkBuilder as usize, url)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = results[0].0;
    for (i, (addr, url)) in results.into_iter().enumerate() {
        assert_eq!(addr, first);
        assert_eq!(
            url,
            format!("https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/{i}/1#study=discover")
        );
    }
}
