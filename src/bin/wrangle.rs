//! Interactive data wrangler.
//!
//! Usage:
//!   wrangle                 read commands from stdin
//!   wrangle <script>        read commands from a file
//!
//! Set `RUST_LOG=debug` to trace stage dispatch on stderr.

use clap::Parser;
use data_wrangler::{
    Error, LineSource, Limits, MAX_COLS, MAX_LINE_LEN, MAX_PROJECT, MAX_ROWS, Printer,
    ReaderSource, Session, WritePrinter,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "> ";

/// Maintain an in-memory table of integers, driven one command per line.
///
/// Commands: `a1,2,3` add, `?` print, `p2,3` project, `s2<5` select.
/// Project and select stages can be chained with `|`.
#[derive(Parser)]
#[command(name = "wrangle")]
struct Cli {
    /// Command script to run instead of reading stdin
    script: Option<String>,

    /// Do not print the prompt
    #[arg(short, long)]
    quiet: bool,

    /// Maximum number of records in the table
    #[arg(long, default_value_t = MAX_ROWS)]
    max_rows: usize,

    /// Maximum number of columns in a record
    #[arg(long, default_value_t = MAX_COLS)]
    max_cols: usize,

    /// Maximum number of columns a projection honors
    #[arg(long, default_value_t = MAX_PROJECT)]
    max_project: usize,

    /// Maximum line length after whitespace is removed
    #[arg(long, default_value_t = MAX_LINE_LEN)]
    max_line_len: usize,
}

impl Cli {
    fn limits(&self) -> Limits {
        Limits {
            max_cols: self.max_cols,
            max_rows: self.max_rows,
            max_project: self.max_project,
            max_line_len: self.max_line_len,
        }
    }
}

/// Read lines until the source is exhausted or a fatal error occurs.
fn run<S: LineSource, W: Write>(
    session: &mut Session,
    source: &mut S,
    out: &mut WritePrinter<W>,
    prompt: bool,
) -> Result<(), Error> {
    loop {
        if prompt {
            out.write_raw(PROMPT)?;
        }
        let Some(line) = source.next_line()? else {
            break;
        };
        if line.is_truncated() {
            out.emit(&line.overflow_warning())?;
        }
        session.process_line(&line.text, out)?;
    }
    if prompt {
        out.emit("")?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let limits = cli.limits();

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error reading script '{path}': {e}");
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut source = ReaderSource::new(reader, limits.max_line_len);
    let mut out = WritePrinter::new(io::stdout().lock());
    let mut session = Session::new(limits);

    if let Err(e) = run(&mut session, &mut source, &mut out, !cli.quiet) {
        drop(out);
        eprintln!("{e}");
        process::exit(1);
    }
}
