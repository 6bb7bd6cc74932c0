//! # tokcalc
//!
//! tokcalc is a line-oriented calculator language. Each line is either an
//! arithmetic expression, an assignment, or a function definition, and is
//! evaluated against variables and functions that persist across lines.
//!
//! ```
//! use tokcalc::Evaluator;
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate_line("x = 4").unwrap(), Some(4.0));
//! assert_eq!(evaluator.evaluate_line("fn double a = > a * 2").unwrap(), None);
//! assert_eq!(evaluator.evaluate_line("1 + double x").unwrap(), Some(9.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// Every failure is reported for the current line only. The message text of
/// each error is what a front end should print verbatim.
pub mod error;
/// Ties together lexing, the token cursor, values and evaluation.
///
/// # Responsibilities
/// - Converts input lines into tokens.
/// - Parses and evaluates tokens in a single pass.
/// - Maintains variables and user-defined functions between lines.
pub mod interpreter;
/// The read-evaluate-print loop used by the binary.
pub mod session;

pub use crate::{
    error::{Error, ParseError, Result, RuntimeError},
    interpreter::{
        cursor::TokenStream,
        evaluator::core::{DEFAULT_MAX_DEPTH, EVAL_STACK_SIZE, Evaluator, FunctionDef},
        lexer::{Literal, Token},
        value::Value,
    },
};

/// Evaluates each line of `source` in order with one fresh [`Evaluator`].
///
/// A failing line does not stop the lines after it, and does not undo what
/// earlier lines defined.
///
/// # Examples
/// ```
/// use tokcalc::evaluate_script;
///
/// let results = evaluate_script("a = 2\nb\na * 3");
/// assert_eq!(results[0], Ok(Some(2.0)));
/// assert!(results[1].is_err());
/// assert_eq!(results[2], Ok(Some(6.0)));
/// ```
#[must_use]
pub fn evaluate_script(source: &str) -> Vec<Result<Option<f64>>> {
    let mut evaluator = Evaluator::new();
    source.lines().map(|line| evaluator.evaluate_line(line)).collect()
}
