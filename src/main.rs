//! codonchain - DNA to protein translation
//!
//! Translates a DNA sequence into a protein chain and writes a report.
//!
//! ## Usage
//!
//! ```bash
//! codonchain                          # fully interactive
//! codonchain -n report -s ATGTTCCCG   # custom sequence
//! codonchain -n report -r 12          # random sequence of 12 bases
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::info;

use codonchain::prompt::Console;
use codonchain::report::ReportWriter;
use codonchain::sequence::{check_length, check_sequence, SequenceSource};
use codonchain::translation::Translation;

/// codonchain - Translate a DNA sequence into a protein chain
///
/// Missing options are asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report file name, without extension (".txt" is appended)
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Custom DNA sequence (A, C, G, T; 9-30 bases, divisible by 3)
    #[arg(short = 's', long = "sequence", conflicts_with = "random")]
    sequence: Option<String>,

    /// Length of a random DNA sequence (9-30, divisible by 3)
    #[arg(short = 'r', long = "random")]
    random: Option<usize>,

    /// Directory where the report is written
    #[arg(short = 'd', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Picks the sequence source from the command line, or asks for it.
fn resolve_source<R, W>(args: &Args, console: &mut Console<R, W>) -> Result<SequenceSource>
where
    R: std::io::BufRead,
    W: Write,
{
    if let Some(sequence) = &args.sequence {
        check_sequence(sequence).with_context(|| format!("Invalid DNA sequence '{}'", sequence))?;
        return Ok(SequenceSource::Custom(sequence.clone()));
    }
    if let Some(length) = args.random {
        check_length(length).context("Invalid random sequence length")?;
        return Ok(SequenceSource::Random(length));
    }
    Ok(console.ask_source()?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut console = Console::stdio();

    let name = match &args.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => console.ask_report_name()?,
    };
    let source = resolve_source(&args, &mut console)?;

    let translation = Translation::new(source)?;
    info!("Translated {} bases into {} amino acids", translation.dna.len(), translation.amino_acids.len());

    let writer = ReportWriter::new(&args.output_dir, &name);
    writer.write_report(&translation)?;

    println!("Protein chain: {}", translation.protein_chain);
    println!("Process completed. Check {} for information.", writer.path().display());

    Ok(())
}
