use tokcalc::{Evaluator, ParseError, session};

fn run_session(input: &str, prompt: Option<&str>) -> String {
    let mut evaluator = Evaluator::new();
    let mut output = Vec::new();
    session::run(&mut evaluator, input.as_bytes(), &mut output, prompt).expect("in-memory I/O");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn prints_values_blanks_and_errors() {
    let output = run_session("x = 2\nfn f a = > a * x_\ny\nx + 1\n", None);
    assert_eq!(output, "2\n\nError: undefined variable 'y'\n3\n");
}

#[test]
fn prompts_before_every_read() {
    let output = run_session("1\n\n", Some(">>> "));
    assert_eq!(output, ">>> 1\n>>> \n>>> ");
}

#[test]
fn state_survives_failed_lines() {
    let output = run_session("a = 1\na +\nfn g = > 2\nfn a = > 3\na + g\n", None);
    assert_eq!(output,
               "1\nError: unexpected end of input\n\nError: a is a variable\n3\n");
}

#[test]
fn render_formats_native_numbers() {
    assert_eq!(session::render(&Ok(Some(0.1 + 0.2))), "0.30000000000000004");
    assert_eq!(session::render(&Ok(Some(f64::INFINITY))), "inf");
    assert_eq!(session::render(&Ok(Some(-4.0))), "-4");
    assert_eq!(session::render(&Ok(None)), "");
    assert_eq!(session::render(&Err(ParseError::EndOfInput.into())),
               "Error: unexpected end of input");
}

#[test]
fn invalid_utf8_fails_only_its_line() {
    let mut evaluator = Evaluator::new();
    let mut output = Vec::new();
    session::run(&mut evaluator, &b"1 + 1\n\xff\xfe\n2 + 2\n"[..], &mut output, None).expect("in-memory I/O");
    let output = String::from_utf8(output).expect("utf-8 output");
    assert_eq!(output,
               "2\nError: unexpected token '\u{fffd}\u{fffd}'\n4\n");
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(run_session("1 + 2\r\nx = 4\r\n", None), "3\n4\n");
}
