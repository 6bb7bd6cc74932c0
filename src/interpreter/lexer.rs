use std::fmt;

use logos::Logos;

/// A numeric literal together with the text it was read from.
///
/// The text is kept because function bodies are rejoined from their tokens
/// and lexed again; `.5` and `007` must come back exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The parsed value.
    pub value: f64,
    /// The literal as it appeared in the source.
    pub text:  String,
}

impl Literal {
    /// Parses `text` as a literal, keeping the text verbatim.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let value = text.parse().ok()?;
        Some(Self { value,
                    text: text.to_string() })
    }
}

/// Represents a lexical token in a calculator line.
///
/// A token is the smallest meaningful piece of a line. Its shape (literal,
/// identifier, operator or unrecognised fragment) is decided here, once, so
/// the grammar levels only ever match on variants.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(Literal),
    /// Identifier tokens; variable, parameter or function names such as `x`
    /// or `add_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `>`, only meaningful as the second half of the `= >` arrow.
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any fragment the patterns above do not recognise. These are kept so
    /// that malformed input fails during evaluation, not while lexing.
    #[regex(r"[^ \t\r\n\f]", |lex| lex.slice().to_string(), priority = 0)]
    Other(String),
}

impl Token {
    /// Returns the identifier name, if this token is one.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this token is an identifier made only of ASCII letters.
    ///
    /// Function bodies are checked against their parameter list with this
    /// predicate; names containing digits or underscores are not checked.
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        self.as_identifier()
            .is_some_and(|name| name.chars().all(|c| c.is_ascii_alphabetic()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(Literal { text, .. }) | Self::Identifier(text) | Self::Other(text) => {
                write!(f, "{text}")
            },
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Equals => write!(f, "="),
            Self::Greater => write!(f, ">"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits `text` into tokens.
///
/// Whitespace is dropped and order is preserved. Runs of adjacent
/// unrecognised characters are merged into a single [`Token::Other`], so
/// `a $$ b` yields three tokens. Lexing never fails.
#[must_use]
pub fn lex(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut last_end = None;
    let mut lexer = Token::lexer(text);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = result.unwrap_or_else(|()| Token::Other(lexer.slice().to_string()));

        if let Token::Other(fragment) = &token
           && last_end == Some(span.start)
           && let Some(Token::Other(previous)) = tokens.last_mut()
        {
            previous.push_str(fragment);
        } else {
            tokens.push(token);
        }
        last_end = Some(span.end);
    }

    log::trace!("lexed {text:?} into {} tokens", tokens.len());
    tokens
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(Literal)`: The parsed value and its source text.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Literal> {
    Literal::parse(lex.slice())
}
