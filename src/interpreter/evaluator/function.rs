use crate::{
    error::{ParseError, Result, RuntimeError},
    interpreter::{
        cursor::TokenStream,
        evaluator::core::{Environment, Evaluator, FunctionDef},
        lexer::Token,
        value::Value,
    },
};

impl Evaluator {
    /// Parses and stores a function definition.
    ///
    /// Syntax, with the cursor already past `fn`:
    /// ```text
    ///     fn <name> <param>* = > <body token>+
    /// ```
    /// The body is kept as tokens and validated eagerly: every bare
    /// alphabetic name in it must be a parameter. A later definition with the
    /// same name replaces the earlier one.
    ///
    /// # Errors
    /// - `NameIsVariable` if `name` is already a variable.
    /// - `ParamConflict` if a parameter is repeated.
    /// - `MalformedDefinition` if the name or a parameter is not an
    ///   identifier, or `=` is not followed by `>`.
    /// - `EmptyBody` if nothing follows the arrow.
    /// - `UnknownIdentifier` if the body names something other than a
    ///   parameter.
    /// - `EndOfInput` if the line ends before the `=`.
    pub(crate) fn define_function(&mut self, tokens: &mut TokenStream) -> Result<()> {
        let name = match tokens.next()? {
            Some(Token::Identifier(name)) => name,
            Some(other) => return Err(malformed(Some(&other))),
            None => return Err(ParseError::EndOfInput.into()),
        };
        if self.variables.contains_key(&name) {
            return Err(RuntimeError::NameIsVariable { name }.into());
        }

        let mut params: Vec<String> = Vec::new();
        loop {
            match tokens.next()? {
                Some(Token::Equals) => break,
                Some(Token::Identifier(param)) => {
                    if params.contains(&param) {
                        return Err(ParseError::ParamConflict { name: param }.into());
                    }
                    params.push(param);
                },
                Some(other) => return Err(malformed(Some(&other))),
                None => return Err(ParseError::EndOfInput.into()),
            }
        }

        match tokens.next()? {
            Some(Token::Greater) => {},
            other => return Err(malformed(other.as_ref())),
        }

        let body = tokens.remaining().to_vec();
        if body.is_empty() {
            return Err(ParseError::EmptyBody { name }.into());
        }
        if let Some(unknown) = body.iter()
                                   .filter(|token| token.is_alphabetic())
                                   .filter_map(Token::as_identifier)
                                   .find(|ident| !params.iter().any(|p| p == ident))
        {
            return Err(RuntimeError::UnknownIdentifier { name: unknown.to_string() }.into());
        }

        log::debug!("defined function {name}({})", params.join(", "));
        self.functions.insert(name, FunctionDef { params, body });
        Ok(())
    }

    /// Calls a user-defined function.
    ///
    /// One argument expression is read from the caller's cursor per
    /// parameter, evaluated without any parameter bindings. The body is then
    /// rejoined into text, re-tokenized and evaluated with those bindings.
    ///
    /// Arity is not checked: a call that runs out of tokens fails with
    /// `EndOfInput` from the cursor.
    pub(crate) fn invoke_function(&mut self,
                                  name: &str,
                                  def: &FunctionDef,
                                  tokens: &mut TokenStream)
                                  -> Result<f64> {
        let mut env = Environment::with_capacity(def.params.len());
        for param in &def.params {
            let argument = self.parse_expression(tokens, None)?;
            env.insert(param.clone(), argument);
        }

        log::debug!("calling {name} with {env:?}");
        let mut body = TokenStream::tokenize(&def.rejoined_body());
        self.parse_expression(&mut body, Some(&env))
    }

    /// Produces the value of a parameter reference.
    ///
    /// The bound number is printed, lexed into a new stream and read back
    /// through the primary level with no bindings. A negative value
    /// therefore re-enters through the unary minus, and a non-finite one
    /// (`NaN`, `inf`) is read as a name and resolved like any other.
    pub(crate) fn resolve_parameter_value(&mut self, value: f64) -> Result<Value> {
        let text = value.to_string();
        log::trace!("re-reading parameter value {text:?}");
        let mut tokens = TokenStream::tokenize(&text);
        self.parse_primary(&mut tokens, None)
    }
}

fn malformed(found: Option<&Token>) -> crate::error::Error {
    ParseError::MalformedDefinition { found: found.map_or_else(|| "end of input".to_string(),
                                                               ToString::to_string) }.into()
}
