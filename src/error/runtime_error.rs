/// Represents all errors that can occur while resolving and evaluating names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A function definition targets a name already bound as a variable.
    #[error("Error: {name} is a variable")]
    NameIsVariable {
        /// The contested name.
        name: String,
    },
    /// An assignment targets a name already bound as a function.
    #[error("Error: {name} is a function")]
    NameIsFunction {
        /// The contested name.
        name: String,
    },
    /// A function body mentions a bare name that is not one of its
    /// parameters.
    #[error("Error: unknown identifier '{name}'")]
    UnknownIdentifier {
        /// The unknown name.
        name: String,
    },
    /// A name resolved to nothing and was used as a value.
    #[error("Error: undefined variable '{name}'")]
    UndefinedVariable {
        /// The unresolved name.
        name: String,
    },
    /// Expressions nested deeper than the evaluator allows, usually through a
    /// function that calls itself.
    #[error("Error: maximum evaluation depth of {limit} exceeded")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}
