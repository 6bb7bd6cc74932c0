use crate::{
    error::ParseError,
    interpreter::lexer::{Token, lex},
};

/// An ordered run of tokens with a movable read position.
///
/// The grammar uses one token of lookahead by reading with [`next`] and
/// stepping back with [`back`]. Reading exactly at the end is allowed once
/// and yields `None`, which lets every grammar level probe for an operator
/// without special-casing the end of the line. Reading any further fails
/// with [`ParseError::EndOfInput`].
///
/// [`next`]: TokenStream::next
/// [`back`]: TokenStream::back
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    idx:    usize,
}

impl TokenStream {
    /// Lexes `text` into a fresh stream positioned at its first token.
    #[must_use]
    pub fn tokenize(text: &str) -> Self {
        Self::from_tokens(lex(text))
    }

    /// Wraps already-lexed tokens.
    #[must_use]
    pub const fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens, idx: 0 }
    }

    /// Returns the token under the cursor and advances by one.
    ///
    /// # Returns
    /// - `Some(token)` while tokens remain.
    /// - `None` for the single read exactly at the end.
    ///
    /// # Errors
    /// [`ParseError::EndOfInput`] once the cursor is already past the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token>, ParseError> {
        if self.idx > self.tokens.len() {
            return Err(ParseError::EndOfInput);
        }
        let token = self.tokens.get(self.idx).cloned();
        self.idx += 1;
        Ok(token)
    }

    /// Moves the cursor back one position. Only meaningful right after a
    /// matching [`next`](TokenStream::next).
    pub const fn back(&mut self) {
        self.idx = self.idx.saturating_sub(1);
    }

    /// Every token from the cursor to the end, without consuming them.
    #[must_use]
    pub fn remaining(&self) -> &[Token] {
        self.tokens.get(self.idx..).unwrap_or_default()
    }

    /// `len - idx`. This is `-1` after the one permitted read past the end.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn remaining_count(&self) -> isize {
        self.tokens.len() as isize - self.idx as isize
    }

    /// Whether the token under the cursor equals `token`, without moving.
    #[must_use]
    pub fn peek_is(&self, token: &Token) -> bool {
        self.tokens.get(self.idx) == Some(token)
    }

    /// Whether the stream holds no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
