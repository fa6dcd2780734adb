//! Shared character-level scanning helpers.
//!
//! Both the descriptor scanner and the element builder walk `&str` slices
//! by byte position; these helpers keep the two in agreement about what an
//! identifier is and how whitespace is skipped.

/// True for characters that may appear in a tag name, id, class name, or
/// bare property key.
pub(crate) const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte index of the first non-whitespace character at or after `pos`, or
/// the end of the string.
pub(crate) fn skip_ws(s: &str, pos: usize) -> usize {
    s[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(s.len(), |i| pos + i)
}

/// Byte index just past the identifier run starting at `pos` (which may be
/// empty).
pub(crate) fn ident_end(s: &str, pos: usize) -> usize {
    s[pos..]
        .find(|c: char| !is_ident_char(c))
        .map_or(s.len(), |i| pos + i)
}

/// Peek the character at byte position `pos`.
pub(crate) fn peek(s: &str, pos: usize) -> Option<char> {
    s[pos..].chars().next()
}
