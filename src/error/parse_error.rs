/// Represents all errors that can occur while reading the shape of a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The cursor was asked for a token past the end of the stream.
    #[error("Error: unexpected end of input")]
    EndOfInput,
    /// The line parsed but tokens were left over.
    #[error("Error: illegal expression '{input}'")]
    TrailingTokens {
        /// The original line.
        input: String,
    },
    /// A parameter name appears twice in one definition.
    #[error("Error: parameter conflict '{name}'")]
    ParamConflict {
        /// The repeated parameter.
        name: String,
    },
    /// The `fn` line does not follow `fn name params = > body`.
    #[error("Error: illegal function definition near '{found}'")]
    MalformedDefinition {
        /// The token found where the grammar wanted something else.
        found: String,
    },
    /// Nothing follows the `=>` arrow.
    #[error("Error: function '{name}' has an empty body")]
    EmptyBody {
        /// The function being defined.
        name: String,
    },
    /// A token that cannot start an operand was found where one was needed.
    #[error("Error: unexpected token '{found}'")]
    UnexpectedToken {
        /// The offending token.
        found: String,
    },
    /// The left side of `=` is not an identifier.
    #[error("Error: cannot assign to '{target}'")]
    InvalidAssignmentTarget {
        /// The token in target position.
        target: String,
    },
}
