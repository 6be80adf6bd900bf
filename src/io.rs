//! Reading and writing fractions as lines of text, one `numerator/denominator` per line.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::fraction::{Fraction, FractionError};

#[derive(Debug, Error)]
pub enum FractionIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] FractionError),
    /// A parse error at a known 1-based line, as reported by [`FractionLines`].
    #[error("Line {line}: {source}")]
    Line { line: usize, source: FractionError },
}

/// Strips one trailing line terminator, `\n` or `\r\n`. Other whitespace is kept: `" 1/2"` is not
/// a fraction.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads the next line and parses it as a fraction. Returns `Ok(None)` at the end of input.
///
/// A lone read doesn't know its position, so parse errors carry no line number. Use
/// [`FractionLines`] for that.
pub fn read_fraction<R: BufRead>(reader: &mut R) -> Result<Option<Fraction>, FractionIoError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }

    Ok(Some(strip_line_ending(&buf).parse()?))
}

/// Writes `fraction` in its canonical form, followed by a newline.
pub fn write_fraction<W: Write>(writer: &mut W, fraction: &Fraction) -> Result<(), FractionIoError> {
    writeln!(writer, "{}", fraction)?;
    Ok(())
}

/// An iterator over the fractions in a reader, one per line.
#[derive(Debug)]
pub struct FractionLines<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> FractionLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> Iterator for FractionLines<R> {
    type Item = Result<Fraction, FractionIoError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line += 1;
        let line = self.line;
        read_fraction(&mut self.reader)
            .map_err(|e| match e {
                FractionIoError::Parse(source) => FractionIoError::Line { line, source },
                e => e,
            })
            .transpose()
    }
}
