//! Typed book/chapter reference.

use std::fmt;
use std::str::FromStr;

use crate::error::LinkError;

/// Number of books in the Bible canon used by the site.
pub const BOOK_COUNT: u32 = 66;

/// A validated book and chapter, e.g. `19:1` for Psalms 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterRef {
    book: u8,
    chapter: u32,
}

impl ChapterRef {
    pub fn new(book: u32, chapter: u32) -> Result<Self, LinkError> {
        if !(1..=BOOK_COUNT).contains(&book) {
            return Err(LinkError::BookOutOfRange(book));
        }
        if chapter == 0 {
            return Err(LinkError::ChapterOutOfRange(chapter));
        }
        Ok(Self {
            book: book as u8,
            chapter,
        })
    }

    pub fn book(&self) -> u8 {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }
}

impl fmt::Display for ChapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.book, self.chapter)
    }
}

/// ASCII digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_number(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses `book:chapter` or `book/chapter`.
impl FromStr for ChapterRef {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LinkError::MalformedReference(s.to_string());
        let trimmed = s.trim();
        let (book, chapter) = trimmed
            .split_once(':')
            .or_else(|| trimmed.split_once('/'))
            .ok_or_else(malformed)?;
        let book = parse_number(book).ok_or_else(malformed)?;
        let chapter = parse_number(chapter).ok_or_else(malformed)?;
        Self::new(book, chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_colon_and_slash() {
        let r: ChapterRef = "19:1".parse().unwrap();
        assert_eq!((r.book(), r.chapter()), (19, 1));
        let r: ChapterRef = " 40/24 ".parse().unwrap();
        assert_eq!((r.book(), r.chapter()), (40, 24));
    }

    #[test]
    fn display() {
        assert_eq!(ChapterRef::new(1, 1).unwrap().to_string(), "1:1");
    }

    #[test]
    fn book_bounds() {
        assert!(ChapterRef::new(1, 1).is_ok());
        assert!(ChapterRef::new(66, 22).is_ok());
        assert_eq!(ChapterRef::new(0, 1), Err(LinkError::BookOutOfRange(0)));
        assert_eq!("67:1".parse::<ChapterRef>(), Err(LinkError::BookOutOfRange(67)));
    }

    #[test]
    fn leading_zeros_are_digits() {
        let r: ChapterRef = "019:01".parse().unwrap();
        assert_eq!((r.book(), r.chapter()), (19, 1));
    }

    #[test]
    fn chapter_zero() {
        assert_eq!("1:0".parse::<ChapterRef>(), Err(LinkError::ChapterOutOfRange(0)));
    }

    #[test]
    fn malformed() {
        for bad in ["abc", "19", "19:", ":1", "19:1:3", "-1:2", "", "+19:1", "19:+1", "1_0:1"] {
            assert!(
                matches!(bad.parse::<ChapterRef>(), Err(LinkError::MalformedReference(_))),
                "{bad:?} should be malformed"
            );
        }
    }
}
