/// Parsing errors.
///
/// Defines the failures that come from the shape of a line: running out of
/// tokens, leftover tokens, and structural violations of the `fn` grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures raised while resolving names against the variable
/// and function tables, or when evaluation nests too deeply.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while evaluating a single line.
///
/// Every variant aborts only the line being evaluated. Tables keep whatever
/// earlier lines (and earlier assignments in the same line) committed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
