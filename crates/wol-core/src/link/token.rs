//! Token checks for the fallible builders.

use crate::config::TokenEncoding;
use crate::error::{LinkError, TokenField};

/// Characters that end or restructure a path segment when written raw.
fn is_structural(c: char) -> bool {
    matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control()
}

/// Validates one token before it is substituted into the template.
///
/// Empty tokens are always rejected. With `strict`, raw tokens must not contain
/// structural characters or be `.`/`..` (dot segments are collapsed by URL
/// normalization). Percent encoding escapes both, so it only needs the empty check.
pub(crate) fn check_token(
    field: TokenField,
    token: &str,
    strict: bool,
    encoding: TokenEncoding,
) -> Result<(), LinkError> {
    if token.is_empty() {
        return Err(LinkError::EmptyToken { field });
    }
    if !strict {
        return Ok(());
    }
    let is_dot_segment = token == "." || token == "..";
    if encoding == TokenEncoding::Raw && (is_dot_segment || token.chars().any(is_structural)) {
        return Err(LinkError::UnsafeToken {
            field,
            token: token.to_string(),
        });
    }
    Ok(())
}
