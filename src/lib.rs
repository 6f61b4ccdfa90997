use std::io::{BufRead, Write};

use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("'{0}' is not a valid integer")]
    InvalidInput(String),
    #[error("no input")]
    EmptyInput,
}

/// Prompts on `writer`, then reads one whitespace-delimited token from
/// `reader` and parses it as an `i32`. Blank lines before the token are
/// skipped.
pub fn read_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<i32, Error> {
    write!(writer, "Enter a positive integer: ")?;
    writer.flush()?;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::EmptyInput);
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<i32>()
                .map_err(|_| Error::InvalidInput(token.to_owned()));
        }
    }
}

/// Factorial of `n` in 64-bit signed arithmetic. Values of `n` above 20
/// overflow and wrap, so the result is the true factorial modulo 2^64
/// reinterpreted as signed.
pub fn calculate_factorial(n: i32) -> i64 {
    let mut result: i64 = 1;
    let mut i = i64::from(n);
    while i > 1 {
        result = result.wrapping_mul(i);
        i -= 1;
    }
    result
}

/// One prompt/compute/print cycle: read a number, reject negatives with a
/// message, otherwise print its factorial.
pub fn run<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), Error> {
    let n = read_input(reader, writer)?;
    debug!("parsed input: {}", n);
    if n < 0 {
        writeln!(writer, "Factorial is not defined for negative numbers.")?;
        return Ok(());
    }
    let result = calculate_factorial(n);
    writeln!(writer, "Factorial of {} = {}", n, result)?;
    Ok(())
}
