use crate::{
    error::{ParseError, Result, RuntimeError},
    interpreter::{
        cursor::TokenStream,
        evaluator::core::{Environment, Evaluator},
        lexer::Token,
        value::{TermOperator, Value},
    },
};

impl Evaluator {
    /// Parses and evaluates an expression, or an assignment.
    ///
    /// Grammar:
    /// ```text
    /// expression := assignment | additive
    /// assignment := IDENT '=' expression
    /// additive   := term (('+' | '-') term)*
    /// ```
    ///
    /// # Parameters
    /// - `tokens`: Cursor positioned at the start of the expression.
    /// - `env`: Parameter bindings while evaluating a function body.
    ///
    /// # Errors
    /// - `UndefinedVariable` if an additive operand is an unresolved name.
    /// - `DepthExceeded` if nesting passes the configured limit.
    /// - Anything raised by the lower grammar levels.
    pub(crate) fn parse_expression(&mut self,
                                   tokens: &mut TokenStream,
                                   env: Option<&Environment>)
                                   -> Result<f64> {
        if self.depth >= self.max_depth {
            log::warn!("evaluation depth limit of {} reached", self.max_depth);
            return Err(RuntimeError::DepthExceeded { limit: self.max_depth }.into());
        }
        self.depth += 1;
        let result = self.parse_additive(tokens, env);
        self.depth -= 1;
        result
    }

    fn parse_additive(&mut self,
                      tokens: &mut TokenStream,
                      env: Option<&Environment>)
                      -> Result<f64> {
        if is_assignment(tokens) {
            return self.parse_assignment(tokens);
        }

        let mut lhs = self.parse_term(tokens, env)?.into_number()?;
        loop {
            let subtract = match tokens.next()? {
                Some(Token::Plus) => false,
                Some(Token::Minus) => true,
                _ => {
                    tokens.back();
                    break;
                },
            };
            let rhs = self.parse_term(tokens, env)?.into_number()?;
            lhs = if subtract { lhs - rhs } else { lhs + rhs };
        }
        Ok(lhs)
    }

    /// Binds the value of the right-hand side to the name on the left.
    ///
    /// The right-hand side is evaluated without parameter bindings, and the
    /// variable is written before any enclosing expression finishes.
    fn parse_assignment(&mut self, tokens: &mut TokenStream) -> Result<f64> {
        let name = match tokens.next()? {
            Some(Token::Identifier(name)) => name,
            Some(other) => {
                return Err(ParseError::InvalidAssignmentTarget { target: other.to_string() }.into());
            },
            None => return Err(ParseError::EndOfInput.into()),
        };
        if self.functions.contains_key(&name) {
            return Err(RuntimeError::NameIsFunction { name }.into());
        }

        // `=`
        tokens.next()?;
        let value = self.parse_expression(tokens, None)?;
        log::debug!("assigned {name} = {value}");
        self.variables.insert(name, value);
        Ok(value)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `term := primary (('*' | '/' | '%') primary)*`
    ///
    /// A lone unresolved name passes through untouched; the additive level
    /// decides whether it is an error. One that takes part in an operation
    /// fails here.
    fn parse_term(&mut self, tokens: &mut TokenStream, env: Option<&Environment>) -> Result<Value> {
        let mut lhs = self.parse_primary(tokens, env)?;
        loop {
            let Some(op) = tokens.next()?.as_ref().and_then(TermOperator::from_token) else {
                tokens.back();
                break;
            };
            let rhs = self.parse_primary(tokens, env)?;
            lhs = Value::Number(op.apply(lhs.into_number()?, rhs.into_number()?));
        }
        Ok(lhs)
    }

    /// Parses a primary expression.
    ///
    /// Grammar: `primary := '-'? (NUMBER | IDENT callArgs? | '(' expression ')')`
    ///
    /// The leading `-` only negates number literals; `-x` and `-(1 + 2)`
    /// evaluate to `x` and `3`. The closing parenthesis is consumed without
    /// being checked, so `(1 + 2 3` evaluates to `3`.
    ///
    /// # Errors
    /// - `EndOfInput` if the line ends where an operand was expected.
    /// - `UnexpectedToken` if the next token cannot start an operand. The
    ///   cursor is stepped back over it first.
    pub(crate) fn parse_primary(&mut self,
                                tokens: &mut TokenStream,
                                env: Option<&Environment>)
                                -> Result<Value> {
        let negate = tokens.peek_is(&Token::Minus);
        if negate {
            tokens.next()?;
        }

        match tokens.next()? {
            Some(Token::Number(literal)) => {
                Ok(Value::Number(if negate { -literal.value } else { literal.value }))
            },
            Some(Token::Identifier(name)) => self.resolve_identifier(name, tokens, env),
            Some(Token::LParen) => {
                let value = self.parse_expression(tokens, env)?;
                // `)`
                tokens.next()?;
                Ok(Value::Number(value))
            },
            Some(other) => {
                tokens.back();
                Err(ParseError::UnexpectedToken { found: other.to_string() }.into())
            },
            None => Err(ParseError::EndOfInput.into()),
        }
    }

    /// Looks a name up as a function, then a parameter, then a variable.
    /// Names that match none of these come back as [`Value::Unresolved`].
    fn resolve_identifier(&mut self,
                          name: String,
                          tokens: &mut TokenStream,
                          env: Option<&Environment>)
                          -> Result<Value> {
        if let Some(def) = self.functions.get(&name).cloned() {
            return self.invoke_function(&name, &def, tokens).map(Value::Number);
        }
        if let Some(value) = env.and_then(|env| env.get(&name)) {
            return self.resolve_parameter_value(*value);
        }
        if let Some(value) = self.variables.get(&name) {
            return Ok(Value::Number(*value));
        }
        Ok(Value::Unresolved(name))
    }
}

/// An assignment needs at least `name = value`, with `=` second.
fn is_assignment(tokens: &TokenStream) -> bool {
    tokens.remaining_count() >= 3 && tokens.remaining().get(1) == Some(&Token::Equals)
}
