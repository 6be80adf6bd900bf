//! A line-oriented fraction calculator: reads one expression per line from stdin and prints the
//! result of each.
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use fraction::{
    calc::Outcome,
    io::write_fraction,
    markup::{RenderMode, UNICODE},
    parsing::parse_expression,
};

/// Evaluates fraction expressions like `1/2 + 0.25` or `inv -3/4`, one per line.
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Print results with Unicode fraction glyphs and minus signs instead of plain `n/d`
    #[arg(long)]
    unicode: bool,
}

fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome, unicode: bool) -> Result<()> {
    match outcome {
        Outcome::Value(f) if !unicode => write_fraction(out, f)?,
        Outcome::Truth(b) if !unicode => writeln!(out, "{}", b)?,
        _ => writeln!(out, "{}", UNICODE.render_to_string(outcome))?,
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let opts = Opts::parse();
    tracing::debug!(?opts, "starting calculator");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut failures = 0usize;

    for (n, line) in stdin.lines().enumerate() {
        let line_number = n + 1;
        let line = line.with_context(|| format!("reading line {}", line_number))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_expression(trimmed).and_then(|e| e.evaluate()) {
            Ok(outcome) => print_outcome(&mut stdout, &outcome, opts.unicode)
                .context("writing result")?,
            Err(error) => {
                failures += 1;
                tracing::warn!(line = line_number, %error, "could not evaluate expression");
            }
        }
    }

    stdout.flush().context("flushing output")?;
    tracing::debug!(failures, "finished");
    Ok(())
}
