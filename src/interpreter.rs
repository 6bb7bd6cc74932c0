/// The token cursor.
///
/// Wraps a lexed line in a stream with a single-step read position that
/// can move forward and back, which is all the lookahead the grammar needs.
pub mod cursor;
/// The evaluator parses and evaluates lines against persistent tables.
///
/// There is no separate syntax tree: each grammar level computes its value
/// as it consumes tokens, so assignments and definitions take effect the
/// moment they are read.
///
/// # Responsibilities
/// - Owns the variable and function tables.
/// - Implements the assignment, additive, multiplicative and primary levels.
/// - Defines, validates and invokes user functions.
pub mod evaluator;
/// The lexer splits a line into tokens.
///
/// Built on `logos`. Every fragment of input becomes a token, so lexing
/// cannot fail; unrecognised text surfaces later as an evaluation error.
pub mod lexer;
/// Runtime values produced by the grammar levels.
pub mod value;
