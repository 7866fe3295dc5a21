//! Emoji alias resolution.
//!
//! Maps alias tokens like `party_face` or `:party_face:` to their literal
//! emoji character via the static gemoji shortcode table. Input that does
//! not look like an alias is passed through unchanged, so literal glyphs
//! work directly on the command line.

use crate::error::{FavemojiError, Result};

/// Resolve an emoji token to a literal character.
///
/// Tokens made up entirely of alias characters are looked up in the
/// shortcode table (with one wrapping colon pair stripped first); a miss is
/// fatal. Anything else, including multi-codepoint sequences and the empty
/// string, is returned as-is.
pub fn resolve(input: &str) -> Result<String> {
    if !is_alias(input) {
        return Ok(input.to_string());
    }

    let id = strip_colons(input);
    match emojis::get_by_shortcode(id) {
        Some(emoji) => Ok(emoji.as_str().to_string()),
        None => Err(FavemojiError::UnknownEmoji { id: id.to_string() }),
    }
}

/// True when `input` is non-empty and matches `[a-z0-9:_-]+`.
fn is_alias(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | ':' | '_' | '-'))
}

/// Strip a single wrapping colon pair: `:tada:` -> `tada`.
///
/// Tokens with only one colon present are left untouched and looked up
/// literally.
fn strip_colons(input: &str) -> &str {
    if input.len() >= 2 && input.starts_with(':') && input.ends_with(':') {
        &input[1..input.len() - 1]
    } else {
        input
    }
}
