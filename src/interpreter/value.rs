use crate::{
    error::{Result, RuntimeError},
    interpreter::lexer::Token,
};

/// The result of evaluating a primary or a term.
///
/// Almost always a number. An identifier that resolves to no function,
/// parameter or variable is carried as [`Value::Unresolved`] so the additive
/// level can name it in the error it raises.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric result.
    Number(f64),
    /// A name that resolved to nothing.
    Unresolved(String),
}

/// The multiplicative operators, applied with native `f64` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOperator {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl TermOperator {
    /// Maps a token to its operator, if it is one of `*`, `/` or `%`.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Percent => Some(Self::Rem),
            _ => None,
        }
    }

    /// Applies the operator. Division by zero yields infinity or NaN.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Rem => lhs % rhs,
        }
    }
}

impl Value {
    /// Converts to a number, failing with `UndefinedVariable` when the value
    /// is an unresolved name.
    pub fn into_number(self) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Unresolved(name) => Err(RuntimeError::UndefinedVariable { name }.into()),
        }
    }
}

