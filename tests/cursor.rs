use tokcalc::{Literal, ParseError, Token, TokenStream, interpreter::lexer::lex};

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn num(text: &str) -> Token {
    Token::Number(Literal::parse(text).expect("numeric literal"))
}

fn other(text: &str) -> Token {
    Token::Other(text.to_string())
}

#[test]
fn lexes_operators_numbers_and_identifiers() {
    assert_eq!(lex("1 + foo_1*(2.5)"),
               vec![num("1"),
                    Token::Plus,
                    ident("foo_1"),
                    Token::Star,
                    Token::LParen,
                    num("2.5"),
                    Token::RParen]);
    assert_eq!(lex("a-b/c%d"),
               vec![ident("a"),
                    Token::Minus,
                    ident("b"),
                    Token::Slash,
                    ident("c"),
                    Token::Percent,
                    ident("d")]);
}

#[test]
fn number_shapes() {
    assert_eq!(lex(".5"), vec![num(".5")]);
    assert_eq!(lex("1.2.3"), vec![num("1.2"), num(".3")]);
    assert_eq!(lex("5."), vec![num("5"), other(".")]);
    assert_eq!(lex("2x"), vec![num("2"), ident("x")]);
}

#[test]
fn arrow_is_two_tokens() {
    assert_eq!(lex("=>"), vec![Token::Equals, Token::Greater]);
    assert_eq!(lex("= >"), vec![Token::Equals, Token::Greater]);
}

#[test]
fn unrecognised_runs_merge_until_whitespace() {
    assert_eq!(lex("a $$ b"), vec![ident("a"), other("$$"), ident("b")]);
    assert_eq!(lex("$ $"), vec![other("$"), other("$")]);
    assert_eq!(lex("#1"), vec![other("#"), num("1")]);
}

#[test]
fn whitespace_only_input_is_empty() {
    assert!(lex("").is_empty());
    assert!(lex(" \t  ").is_empty());
    assert!(TokenStream::tokenize("   ").is_empty());
}

#[test]
fn display_reproduces_source_text() {
    let joined: String = lex("x * 2.5 + (y % 3)").iter().map(ToString::to_string).collect();
    assert_eq!(joined, "x*2.5+(y%3)");

    let joined: String = lex("1 .5 * 007 + 2.50").iter().map(ToString::to_string).collect();
    assert_eq!(joined, "1.5*007+2.50");
}

#[test]
fn literals_keep_their_text() {
    let tokens = lex(".5 007 2.50");
    assert_eq!(tokens, vec![num(".5"), num("007"), num("2.50")]);
    assert!(matches!(&tokens[0], Token::Number(Literal { value, .. }) if *value == 0.5));
    assert!(matches!(&tokens[1], Token::Number(Literal { value, .. }) if *value == 7.0));
    assert_ne!(num(".5"), num("0.5"));
}

#[test]
fn alphabetic_identifiers() {
    assert!(ident("abc").is_alphabetic());
    assert!(!ident("ab1").is_alphabetic());
    assert!(!ident("a_b").is_alphabetic());
    assert!(!num("1").is_alphabetic());
    assert_eq!(ident("x").as_identifier(), Some("x"));
    assert_eq!(Token::Plus.as_identifier(), None);
}

#[test]
fn cursor_reads_and_steps_back() {
    let mut stream = TokenStream::tokenize("1 + x");
    assert_eq!(stream.remaining_count(), 3);
    assert_eq!(stream.next(), Ok(Some(num("1"))));
    assert_eq!(stream.next(), Ok(Some(Token::Plus)));
    stream.back();
    assert!(stream.peek_is(&Token::Plus));
    assert_eq!(stream.remaining(), &[Token::Plus, ident("x")]);
    assert_eq!(stream.remaining_count(), 2);
}

#[test]
fn cursor_allows_one_read_at_the_end() {
    let mut stream = TokenStream::tokenize("7");
    assert_eq!(stream.next(), Ok(Some(num("7"))));
    assert_eq!(stream.next(), Ok(None));
    assert_eq!(stream.remaining_count(), -1);
    assert!(stream.remaining().is_empty());
    assert_eq!(stream.next(), Err(ParseError::EndOfInput));

    stream.back();
    assert_eq!(stream.remaining_count(), 0);
    assert_eq!(stream.next(), Ok(None));
}

#[test]
fn remaining_does_not_consume() {
    let stream = TokenStream::tokenize("a = 1");
    assert_eq!(stream.remaining().len(), 3);
    assert_eq!(stream.remaining().len(), 3);
    assert_eq!(stream.remaining_count(), 3);
}
