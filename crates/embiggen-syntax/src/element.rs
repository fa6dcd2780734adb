//! Element descriptor parsing.
//!
//! A descriptor is the shorthand text for one element:
//!
//! ```text
//! name? ('#' id)? ('.' class)* ('[' properties ']')* ('{' content '}')?
//! ```
//!
//! Every part is optional, but the parts must appear in this order and the
//! whole descriptor must be consumed; leftovers are an error. Optional
//! whitespace is permitted before every part.

use embiggen_dom::tags;
use embiggen_dom::{AttributesMap, Content, ElementData, NodeId, Tree};

use crate::error::CompileError;
use crate::scan::{ident_end, peek, skip_ws};

/// Parse one element descriptor and allocate it as an (unattached) node in
/// `tree`.
///
/// Behavior:
/// - A missing name defaults the tag to `div`.
/// - `#id` sets the `id` attribute; each `.class` joins the space-separated
///   `class` attribute in written order.
/// - Required per-tag attribute defaults (see
///   [`tags::required_attributes`]) are applied before explicit `[...]`
///   properties, so explicit properties win.
/// - Braced content becomes the element's text; whitespace-only braced
///   content means "explicitly nothing" and renders self-closing.
/// - A void tag gets no content placeholder; giving it braces is an error.
///
/// # Errors
///
/// Returns [`CompileError::InvalidDescriptor`] when the descriptor does
/// not match the grammar.
pub fn build_element(descriptor: &str, tree: &mut Tree) -> Result<NodeId, CompileError> {
    let invalid = || CompileError::InvalidDescriptor(descriptor.trim().to_string());

    // Name (optional, defaults to div).
    let mut pos = skip_ws(descriptor, 0);
    let name_end = ident_end(descriptor, pos);
    let name = &descriptor[pos..name_end];
    pos = name_end;
    let tag = if name.is_empty() { "div" } else { name };

    // Id (optional).
    pos = skip_ws(descriptor, pos);
    let mut id = None;
    if peek(descriptor, pos) == Some('#') {
        let end = ident_end(descriptor, pos + 1);
        if end == pos + 1 {
            return Err(invalid());
        }
        id = Some(&descriptor[pos + 1..end]);
        pos = end;
    }

    // Classes (zero or more).
    let mut classes: Vec<&str> = Vec::new();
    loop {
        let start = skip_ws(descriptor, pos);
        if peek(descriptor, start) != Some('.') {
            break;
        }
        let end = ident_end(descriptor, start + 1);
        if end == start + 1 {
            return Err(invalid());
        }
        classes.push(&descriptor[start + 1..end]);
        pos = end;
    }

    // Property groups (zero or more bracketed lists).
    let mut props = AttributesMap::new();
    loop {
        let start = skip_ws(descriptor, pos);
        if peek(descriptor, start) != Some('[') {
            break;
        }
        let close = descriptor[start..].find(']').ok_or_else(invalid)?;
        parse_properties(&descriptor[start + 1..start + close], &mut props)?;
        pos = start + close + 1;
    }

    // Content (optional braced text).
    let mut braced = None;
    let start = skip_ws(descriptor, pos);
    if peek(descriptor, start) == Some('{') {
        let close = descriptor[start..].find('}').ok_or_else(invalid)?;
        braced = Some(descriptor[start + 1..start + close].trim());
        pos = start + close + 1;
    }

    // The grammar order is fixed; anything left over did not fit it.
    if skip_ws(descriptor, pos) != descriptor.len() {
        return Err(invalid());
    }

    let mut data = ElementData::new(tag);
    for &(key, value) in tags::required_attributes(tag) {
        let _ = data.attrs.insert(key.to_string(), value.to_string());
    }
    if let Some(id) = id {
        let _ = data.attrs.insert("id".to_string(), id.to_string());
    }
    if !classes.is_empty() {
        let _ = data.attrs.insert("class".to_string(), classes.join(" "));
    }
    // Explicit properties override any default with the same key.
    for (key, value) in props {
        let _ = data.attrs.insert(key, value);
    }

    let content = match braced {
        Some(_) if tags::is_void(tag) => return Err(invalid()),
        Some("") => Content::Children(Vec::new()),
        Some(text) => Content::Text(text.to_string()),
        None if tags::is_void(tag) => Content::Children(Vec::new()),
        None => Content::Empty,
    };

    Ok(tree.alloc_element(data, content))
}

/// Parse the inside of one `[...]` group into `attrs`.
///
/// Properties are separated by commas or whitespace; each is `key=value`
/// or a bare `key` (empty value). Whitespace around `=` is tolerated, and
/// only the first `=` splits a property, so values may contain further
/// `=` (query-string URLs, for instance).
fn parse_properties(inner: &str, attrs: &mut AttributesMap) -> Result<(), CompileError> {
    let invalid = || CompileError::InvalidDescriptor(inner.trim().to_string());

    let mut rest = inner;
    let mut parsed_any = false;
    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            break;
        }

        let key_end = rest
            .find(|c: char| c == ',' || c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let key = &rest[..key_end];
        rest = &rest[key_end..];

        let after = rest.trim_start();
        let value = if let Some(after_eq) = after.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let value_end = after_eq
                .find(|c: char| c == ',' || c.is_whitespace())
                .unwrap_or(after_eq.len());
            rest = &after_eq[value_end..];
            &after_eq[..value_end]
        } else {
            ""
        };

        if key.is_empty() {
            return Err(invalid());
        }
        let _ = attrs.insert(key.to_string(), value.to_string());
        parsed_any = true;
    }

    // Empty brackets carry no property at all; treat them as malformed
    // rather than as an accidental no-op.
    if parsed_any { Ok(()) } else { Err(invalid()) }
}
