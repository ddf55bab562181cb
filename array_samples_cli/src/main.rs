use anyhow::{Context, Result};
use array_samples::listings::run_all;
use clap::Parser;
use std::io::{self, BufWriter, Write};

/// Run the fixed-size array listings and print them to standard output
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {}

fn run<W>(w: &mut W) -> Result<()>
where
    W: Write,
{
    run_all(w).context("Could not write listings to standard output")?;
    w.flush().context("Could not flush standard output")
}

fn main() -> Result<()> {
    let Args {} = Args::parse();
    let mut stdout = BufWriter::new(io::stdout().lock());
    run(&mut stdout)
}
