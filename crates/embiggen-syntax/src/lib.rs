//! Shorthand grammar parser for the Embiggen compiler.
//!
//! # Scope
//!
//! This crate implements:
//! - **Element Builder** ([`build_element`]) - parses one element
//!   descriptor (`name#id.class[props]{content}`) into a tree node.
//! - **Line Parser** ([`parse_line`]) - scans a full input line left to
//!   right, extracting descriptors and separators (`<`, `+`, `>`) and
//!   assembling them into a tree with a cursor walk.
//!
//! The grammar is deliberately small; anything the scanner cannot place is
//! an error rather than silently dropped.

/// Element descriptor parsing.
pub mod element;
/// Error types for the whole compile pipeline.
pub mod error;
/// Line-level parsing: descriptor scanning and the cursor walk.
pub mod line;
mod scan;

pub use element::build_element;
pub use error::CompileError;
pub use line::{Separator, parse_line};
