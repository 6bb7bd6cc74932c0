use std::io::{self, BufRead, Write};

use crate::{error::Result, interpreter::evaluator::core::Evaluator};

/// Formats the outcome of one line the way the loop prints it.
///
/// Numbers use the native `f64` form, definitions and blank lines print as
/// an empty string, and errors print their message.
#[must_use]
pub fn render(outcome: &Result<Option<f64>>) -> String {
    match outcome {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Reads lines from `input` until it is exhausted, evaluating each one and
/// writing the rendered outcome to `output`.
///
/// Evaluation errors are printed and the loop carries on. Bytes that are not
/// valid UTF-8 are replaced rather than ending the loop. When `prompt` is
/// set it is written before every line is read.
///
/// # Errors
/// Only I/O failures on `input` or `output` end the loop early.
pub fn run<R, W>(evaluator: &mut Evaluator,
                 mut input: R,
                 mut output: W,
                 prompt: Option<&str>)
                 -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut buf = Vec::new();
    loop {
        if let Some(prompt) = prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&decoded);

        let outcome = evaluator.evaluate_line(line);
        if let Err(e) = &outcome {
            log::debug!("line {line:?} failed: {e:?}");
        }
        writeln!(output, "{}", render(&outcome))?;
    }
    Ok(())
}

/// Drops a trailing `\n` or `\r\n`, as `BufRead::lines` does.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |line| line.strip_suffix('\r').unwrap_or(line))
}
