//! High-level API for the Embiggen shorthand compiler.
//!
//! Embiggen expands one line of CSS-selector-like shorthand into indented
//! HTML. A descriptor names an element the way a selector would match it:
//!
//! ```text
//! div#header.wide > span{Hello}
//! ```
//!
//! becomes
//!
//! ```text
//! <div class="wide" id="header">
//!     <span>Hello</span>
//! </div>
//! ```
//!
//! # Scope
//!
//! This crate ties the pipeline together:
//! - **Parsing** - descriptor and line grammar ([`embiggen_syntax`])
//! - **Tree Model** - arena element tree ([`embiggen_dom`])
//! - **Rendering** - indented HTML output ([`embiggen_render`])

pub use embiggen_dom as dom;
pub use embiggen_render as render;
pub use embiggen_syntax as syntax;

pub use embiggen_dom::{Content, ElementData, NodeId, Tree};
pub use embiggen_render::{RenderOptions, render};
pub use embiggen_syntax::{CompileError, Separator, parse_line};

/// Compile one line of shorthand into indented HTML.
///
/// This is the main entry point. The line is parsed into an element tree
/// and pretty-printed in one pass; a whitespace-only line compiles to the
/// empty string.
///
/// # Errors
///
/// Returns [`CompileError`] when the line does not parse: a malformed
/// descriptor, leftover input no grammar rule covers, or a `<` separator
/// with no parent level to return to.
pub fn compile(line: &str, options: &RenderOptions) -> Result<String, CompileError> {
    let tree = parse_line(line)?;
    Ok(render(&tree, options))
}

/// Parse one line of shorthand into its element tree without rendering.
///
/// Useful for callers that want to inspect or dump the tree, such as the
/// CLI's tree-dump mode.
///
/// # Errors
///
/// Returns [`CompileError`] when the line does not parse.
pub fn parse(line: &str) -> Result<Tree, CompileError> {
    parse_line(line)
}
