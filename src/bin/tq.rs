//! CLI tool to run a filter expression over lines of text.
//!
//! Usage:
//!   tq [OPTIONS] [FILTER] [FILE]...
//!   tq [OPTIONS] --args [FILTER] [STRING]...
//!   tq --list
//!
//! With no files, lines are read from standard input. Results go to stdout,
//! one line each.

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tq::{Document, ExecOptions, FilterError, execute, parse_chain, registry};

const EXAMPLES: &str = "\
Examples:
  tq 'snake-case'                      convert each line to snake_case
  tq 'snake-case | reverse | count'    chain filters left to right
  tq 'indent:2 | pad-right:20:_'       indent by 2, pad right to 20 with _
  tq 'remove-empty | col-width:8'      drop blank lines, wrap at 8 chars
  tq --args 'camel-case' 'foo bar'     filter literal strings";

#[derive(Parser, Debug)]
#[command(
    name = "tq",
    version,
    about = "Commandline plaintext processor",
    long_about = "Apply a pipe-separated chain of filters to lines of text.\n\n\
                  Element-wise filters transform each line; collection-wise\n\
                  filters (join, sort, unique, first, last, remove-empty,\n\
                  col-width) work on all lines at once. Run with --list to\n\
                  see every filter.",
    after_help = EXAMPLES
)]
struct Cli {
    /// Filter expression, e.g. 'snake-case | reverse'. Omit to echo input.
    #[arg(value_name = "FILTER")]
    filter: Option<String>,

    /// Input files (default: stdin), or literal lines with --args.
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Treat inputs as literal lines instead of file paths.
    #[arg(long)]
    args: bool,

    /// Pass unknown filter names through instead of failing.
    #[arg(long)]
    lenient: bool,

    /// List available filters and exit.
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.list {
        print_filters();
        return;
    }

    if let Err(e) = run_cli(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: failed to initialize logging: {e}");
    }
}

fn run_cli(cli: &Cli) -> Result<(), CliError> {
    let lines = read_input(cli)?;
    let chain = parse_chain(cli.filter.as_deref());
    let options = if cli.lenient {
        ExecOptions::lenient()
    } else {
        ExecOptions::default()
    };

    let input_count = lines.len();
    let output = execute(&chain, lines, &options)?;
    info!(
        filters = chain.len(),
        input_count,
        output_count = output.len(),
        "processed"
    );

    write_output(&output).map_err(CliError::Write)
}

fn read_input(cli: &Cli) -> Result<Document, CliError> {
    if cli.args {
        return Ok(cli.inputs.clone());
    }

    if cli.inputs.is_empty() {
        debug!("reading from stdin");
        return io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .map_err(CliError::ReadStdin);
    }

    let mut lines = Vec::new();
    for path in &cli.inputs {
        debug!(path = %path, "reading file");
        let content = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        lines.extend(content.lines().map(str::to_string));
    }
    Ok(lines)
}

fn write_output(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn print_filters() {
    println!("Filters:");
    for spec in registry::all() {
        let defaults = spec
            .params
            .iter()
            .map(|p| format!("{}='{}'", p.name, p.default))
            .collect::<Vec<_>>()
            .join(", ");
        let defaults = if defaults.is_empty() {
            String::new()
        } else {
            format!(" (default {defaults})")
        };
        println!(
            "  {:<20} {:<10} {}{}",
            spec.signature(),
            spec.kind,
            spec.summary,
            defaults
        );
    }
}
