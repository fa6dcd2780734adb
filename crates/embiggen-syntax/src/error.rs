//! Error types for the shorthand compiler.

use serde::Serialize;
use thiserror::Error;

/// Errors the compiler can report for one input line.
///
/// All three are unrecoverable for the line being processed: the compiler
/// never guesses or drops input, and never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum CompileError {
    /// An element descriptor does not match the shorthand grammar, e.g.
    /// malformed brackets or braces, or braced content on a void tag.
    /// Carries the offending substring.
    #[error("invalid element descriptor: `{0}`")]
    InvalidDescriptor(String),

    /// Input remains that cannot be interpreted as an element descriptor.
    /// Carries the remainder (empty for a trailing separator).
    #[error("unparseable input remains: `{0}`")]
    UnparseableLine(String),

    /// An ascend separator (`<`) was used while the cursor was already at
    /// the tree root.
    #[error("unbalanced `<`: cursor is already at the top level")]
    UnbalancedAscend,
}
