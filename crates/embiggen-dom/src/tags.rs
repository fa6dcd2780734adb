//! Fixed per-tag formatting tables.
//!
//! Three static lookups drive tag-specific behavior: void tags, block
//! tags, and per-tag required attributes. All three are closed tables from
//! the shorthand's HTML 4/XHTML heritage; they are not meant to track the
//! living HTML standard.

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified
/// for void elements."
///
/// A void tag never has content: it renders self-closing and never
/// receives the empty-content placeholder.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "basefont"
            | "br"
            | "embed"
            | "hr"
            | "input"
            | "img"
            | "link"
            | "param"
            | "meta"
    )
}

/// A block tag always renders its children each on their own indented
/// line, regardless of child count; non-block tags collapse a single child
/// onto the opening-tag line.
///
/// The table values human-readable output over pedantic HTML correctness:
/// some block-level elements (like `p`) are deliberately absent so short
/// content stays inline.
#[must_use]
pub fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "blockquote"
            | "div"
            | "dl"
            | "ul"
            | "ol"
            | "fieldset"
            | "form"
            | "tr"
            | "table"
            | "tbody"
            | "thead"
            | "tfoot"
            | "noframes"
            | "frameset"
    )
}

/// Default attributes a tag always carries, applied before any explicit
/// `[...]` properties (which override a default with the same key).
///
/// Covers the attributes a tag cannot meaningfully omit, e.g. `href` on
/// `a` or `src`/`alt` on `img`, so the generated markup is a fill-in
/// skeleton rather than invalid HTML.
#[must_use]
pub fn required_attributes(tag: &str) -> &'static [(&'static str, &'static str)] {
    match tag {
        "a" | "base" => &[("href", "")],
        "abbr" | "acronym" => &[("title", "")],
        "bdo" => &[("dir", "")],
        "link" => &[("rel", "stylesheet"), ("href", "")],
        "style" => &[("type", "text/css")],
        "script" => &[("type", "text/javascript")],
        "img" => &[("src", ""), ("alt", "")],
        "iframe" => &[("src", ""), ("frameborder", "0")],
        "embed" => &[("src", ""), ("type", "")],
        "object" => &[("data", ""), ("type", "")],
        "param" => &[("name", ""), ("value", "")],
        "form" => &[("action", ""), ("method", "post")],
        "table" => &[("cellspacing", "0")],
        "input" => &[("type", ""), ("name", ""), ("value", "")],
        "area" => &[("shape", ""), ("coords", ""), ("href", ""), ("alt", "")],
        "select" | "textarea" => &[("name", "")],
        "option" => &[("value", "")],
        "meta" => &[("content", "")],
        _ => &[],
    }
}
