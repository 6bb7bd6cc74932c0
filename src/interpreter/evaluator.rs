/// Core evaluation state and the per-line entry point.
///
/// Holds the variable and function tables, the nesting limit, and the
/// top-level dispatch between function definitions and expressions.
pub mod core;

/// The expression grammar.
///
/// Assignment, additive, multiplicative and primary levels, evaluated
/// directly off the token cursor as they are parsed.
pub mod expression;

/// User-defined functions.
///
/// Definition and eager body validation, invocation, and the re-tokenizing
/// lookup of parameter values.
pub mod function;
