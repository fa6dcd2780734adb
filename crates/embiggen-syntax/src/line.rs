//! Line-level parsing: descriptor scanning and the cursor walk.
//!
//! A line is a sequence of element descriptors linked by separators. The
//! parser keeps a *cursor* into the tree being built; the three separators
//! move it in constant time, so the linear token stream turns into tree
//! shape without an explicit stack:
//!
//! - `>` descends into the element just built,
//! - `+` keeps the cursor (the next element is a sibling),
//! - `<` ascends through the parent back-reference.

use embiggen_dom::Tree;
use serde::Serialize;
use strum_macros::Display;

use crate::element::build_element;
use crate::error::CompileError;
use crate::scan::{ident_end, peek, skip_ws};

/// One of the three separators linking element descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Separator {
    /// `<` - move the cursor to its parent.
    Ascend,
    /// `+` - keep the cursor; the next element becomes a sibling.
    Sibling,
    /// `>` - move the cursor to the element just built.
    Descend,
}

impl Separator {
    /// Map a separator character to its kind.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Ascend),
            '+' => Some(Self::Sibling),
            '>' => Some(Self::Descend),
            _ => None,
        }
    }
}

/// One descriptor scanned off the front of the input, with whatever
/// followed it.
struct ScannedElement<'a> {
    /// The descriptor substring (may contain inner whitespace).
    descriptor: &'a str,
    /// The separator that followed, if any.
    separator: Option<Separator>,
    /// The input after the separator (or after the descriptor).
    rest: &'a str,
}

/// Scan the next element descriptor and trailing separator off `input`.
///
/// A descriptor is a run of token units (`identifier`, `#identifier`,
/// `.identifier`, `[...]`, `{...}`), each optionally preceded by
/// whitespace. Bracket and brace contents are opaque here, so braced text
/// may contain literal `<`, `+`, `>` without terminating the descriptor.
///
/// Returns `Ok(None)` when the input is exhausted (only whitespace left).
fn scan_element(input: &str) -> Result<Option<ScannedElement<'_>>, CompileError> {
    let start = skip_ws(input, 0);
    let mut pos = start;
    let mut units = 0usize;

    loop {
        let unit_start = skip_ws(input, pos);
        match peek(input, unit_start) {
            Some('#' | '.') => {
                let end = ident_end(input, unit_start + 1);
                if end == unit_start + 1 {
                    // A lone `#`/`.` is not a token unit; leave it for the
                    // trailing-input check below.
                    break;
                }
                pos = end;
            }
            Some('[') => {
                let close = input[unit_start..]
                    .find(']')
                    .ok_or_else(|| CompileError::InvalidDescriptor(input[start..].trim().to_string()))?;
                pos = unit_start + close + 1;
            }
            Some('{') => {
                let close = input[unit_start..]
                    .find('}')
                    .ok_or_else(|| CompileError::InvalidDescriptor(input[start..].trim().to_string()))?;
                pos = unit_start + close + 1;
            }
            Some(c) if crate::scan::is_ident_char(c) => {
                pos = ident_end(input, unit_start);
            }
            _ => break,
        }
        units += 1;
    }

    let after = skip_ws(input, pos);
    if units == 0 {
        return match peek(input, after) {
            None => Ok(None),
            Some(_) => Err(CompileError::UnparseableLine(input[after..].to_string())),
        };
    }

    let descriptor = &input[start..pos];
    match peek(input, after) {
        None => Ok(Some(ScannedElement {
            descriptor,
            separator: None,
            rest: "",
        })),
        Some(c) => match Separator::from_char(c) {
            Some(separator) => Ok(Some(ScannedElement {
                descriptor,
                separator: Some(separator),
                rest: &input[after + c.len_utf8()..],
            })),
            None => Err(CompileError::UnparseableLine(input[after..].to_string())),
        },
    }
}

/// Parse one input line into an element tree.
///
/// The cursor starts at the anonymous root; each scanned descriptor is
/// built and appended as the cursor's last child (consuming the cursor's
/// content placeholder if it still has one), then the separator moves the
/// cursor. A whitespace-only line yields an empty tree.
///
/// # Errors
///
/// - [`CompileError::InvalidDescriptor`] for a descriptor that does not
///   match the grammar.
/// - [`CompileError::UnparseableLine`] for leftover input that cannot
///   start a descriptor, including a trailing separator.
/// - [`CompileError::UnbalancedAscend`] for `<` at the root.
pub fn parse_line(line: &str) -> Result<Tree, CompileError> {
    let mut tree = Tree::new();
    if line.trim().is_empty() {
        return Ok(tree);
    }

    let mut cursor = tree.root();
    let mut rest = line;
    loop {
        let Some(scanned) = scan_element(rest)? else {
            // A separator promised another element that never came.
            return Err(CompileError::UnparseableLine(rest.trim().to_string()));
        };

        let node = build_element(scanned.descriptor, &mut tree)?;
        tree.append_child(cursor, node);

        match scanned.separator {
            None => return Ok(tree),
            Some(Separator::Ascend) => {
                cursor = tree.parent(cursor).ok_or(CompileError::UnbalancedAscend)?;
            }
            Some(Separator::Sibling) => {}
            Some(Separator::Descend) => cursor = node,
        }
        rest = scanned.rest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_characters() {
        assert_eq!(Separator::from_char('<'), Some(Separator::Ascend));
        assert_eq!(Separator::from_char('+'), Some(Separator::Sibling));
        assert_eq!(Separator::from_char('>'), Some(Separator::Descend));
        assert_eq!(Separator::from_char('^'), None);
    }

    #[test]
    fn scan_descriptor_then_separator() {
        let scanned = scan_element("div#a.b > span").unwrap().unwrap();
        assert_eq!(scanned.descriptor, "div#a.b");
        assert_eq!(scanned.separator, Some(Separator::Descend));
        assert_eq!(scanned.rest, " span");
    }

    #[test]
    fn scan_last_descriptor_has_no_separator() {
        let scanned = scan_element("  span{x}  ").unwrap().unwrap();
        assert_eq!(scanned.descriptor, "span{x}");
        assert_eq!(scanned.separator, None);
        assert_eq!(scanned.rest, "");
    }

    #[test]
    fn scan_treats_brace_content_as_opaque() {
        let scanned = scan_element("span{a > b} + em").unwrap().unwrap();
        assert_eq!(scanned.descriptor, "span{a > b}");
        assert_eq!(scanned.separator, Some(Separator::Sibling));
    }

    #[test]
    fn scan_rejects_junk() {
        assert!(matches!(
            scan_element("^div"),
            Err(CompileError::UnparseableLine(_))
        ));
        assert!(matches!(
            scan_element("div ^rest"),
            Err(CompileError::UnparseableLine(_))
        ));
    }

    #[test]
    fn scan_exhausted_input() {
        assert!(scan_element("").unwrap().is_none());
        assert!(scan_element("   ").unwrap().is_none());
    }
}
