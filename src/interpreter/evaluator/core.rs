use std::{collections::HashMap, panic, thread};

use crate::{
    error::{ParseError, Result},
    interpreter::{cursor::TokenStream, lexer::Token},
};

/// Keyword that starts a function definition line.
pub const FN_KEYWORD: &str = "fn";

/// Default limit on how deeply expressions may nest, including nesting
/// through function calls.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Stack reserved for the thread that evaluates a line. Sized so that
/// [`DEFAULT_MAX_DEPTH`] nested calls fit with room to spare.
pub const EVAL_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Parameter bindings for one function invocation.
pub type Environment = HashMap<String, f64>;

/// A stored user-defined function.
///
/// The body is kept as the unparsed tokens that followed the `=>` arrow; it
/// is only parsed when the function is called.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Parameter names in declaration order. Names are unique.
    pub params: Vec<String>,
    /// Tokens to the right of the arrow.
    pub body:   Vec<Token>,
}

impl FunctionDef {
    /// The body tokens joined back into text, with no separator.
    #[must_use]
    pub fn rejoined_body(&self) -> String {
        self.body.iter().map(ToString::to_string).collect()
    }
}

/// Stores the evaluation state that persists across lines.
///
/// ## Usage
///
/// An `Evaluator` is created once and fed one line at a time through
/// [`Evaluator::evaluate_line`]. Variables and functions live in separate
/// namespaces: a name bound as one cannot be claimed by the other.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub(crate) variables: HashMap<String, f64>,
    pub(crate) functions: HashMap<String, FunctionDef>,
    pub(crate) max_depth: usize,
    pub(crate) depth:     usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with empty tables and [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates an evaluator with empty tables and a custom nesting limit.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               max_depth,
               depth: 0 }
    }

    /// The configured nesting limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The last value assigned to `name`, if any.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// The function stored under `name`, if any.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Evaluates one line of input.
    ///
    /// A line starting with `fn` defines a function; anything else is an
    /// expression, possibly an assignment. The line runs on its own thread
    /// with [`EVAL_STACK_SIZE`] of stack, so the depth limit does not depend
    /// on the caller's stack.
    ///
    /// # Returns
    /// - `Some(value)` for expressions.
    /// - `None` for blank lines and function definitions.
    ///
    /// # Errors
    /// Any parse or runtime failure. The tables keep everything committed
    /// before the failure, including assignments made earlier in this line.
    pub fn evaluate_line(&mut self, text: &str) -> Result<Option<f64>> {
        let spawned = thread::scope(|scope| {
                          thread::Builder::new().name("tokcalc-eval".to_string())
                                                .stack_size(EVAL_STACK_SIZE)
                                                .spawn_scoped(scope, || self.evaluate_tokens(text))
                                                .map(thread::ScopedJoinHandle::join)
                      });

        match spawned {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(payload)) => panic::resume_unwind(payload),
            Err(e) => {
                log::warn!("could not spawn evaluation thread, evaluating inline: {e}");
                self.evaluate_tokens(text)
            },
        }
    }

    fn evaluate_tokens(&mut self, text: &str) -> Result<Option<f64>> {
        let mut tokens = TokenStream::tokenize(text);
        if tokens.is_empty() {
            return Ok(None);
        }
        self.depth = 0;

        if tokens.remaining().first().and_then(Token::as_identifier) == Some(FN_KEYWORD) {
            tokens.next()?;
            self.define_function(&mut tokens)?;
            return Ok(None);
        }

        let value = self.parse_expression(&mut tokens, None)?;
        if tokens.remaining_count() != 0 {
            return Err(ParseError::TrailingTokens { input: text.to_string() }.into());
        }
        Ok(Some(value))
    }
}
