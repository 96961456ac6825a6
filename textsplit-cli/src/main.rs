use std::collections::VecDeque;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use textsplit::{quote_string, split_n, Direction, SplitLimit};

mod env;

use env::{env_flag, flag_or_warn};

#[derive(Debug)]
struct Args {
    /// Separator to split each line on.
    separator: String,

    /// Files to read. Reads stdin if empty.
    files: Vec<String>,

    /// Maximum number of splits per line.
    max_splits: SplitLimit,

    /// End of each line that splits are taken from.
    direction: Direction,

    /// Print pieces as JSON arrays instead of quoted strings.
    json: bool,

    /// Replacement for `"` when quoting a piece that contains both kinds of
    /// quote.
    dquote_replacement: Option<String>,

    /// Enable debug logging.
    verbose: bool,
}

fn parse_args(mut parser: lexopt::Parser) -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut values = VecDeque::new();
    let mut max_splits = SplitLimit::Unlimited;
    let mut direction = Direction::FromLeft;
    let mut json = false;
    let mut dquote_replacement = None;
    let mut verbose = false;

    while let Some(arg) = parser.next()? {
        match arg {
            Value(val) => values.push_back(val.string()?),
            Short('n') | Long("max-splits") => {
                let n: i64 = parser.value()?.parse()?;
                max_splits = SplitLimit::try_from(n)
                    .map_err(|err| lexopt::Error::Custom(Box::new(err)))?;
            }
            Short('r') | Long("from-right") => direction = Direction::FromRight,
            Short('j') | Long("json") => json = true,
            Short('e') | Long("escape") => dquote_replacement = Some(parser.value()?.string()?),
            Short('v') | Long("verbose") => verbose = true,
            Short('h') | Long("help") => {
                println!(
                    "Split lines of text on a separator.

Usage: {bin_name} [OPTIONS] <separator> [FILE...]

  -n, --max-splits <N>  Maximum number of splits per line (-1 = unlimited)
  -r, --from-right      Apply the limit to the rightmost separators
  -j, --json            Print each line's pieces as a JSON array
  -e, --escape <STR>    Replacement for `\"` when quoting pieces (default \\\")
  -v, --verbose         Enable verbose logging
  -h, --help            Print help

Reads stdin if no files are given. Set TEXTSPLIT_VERBOSE=1 to enable verbose
logging from the environment.
",
                    bin_name = parser.bin_name().unwrap_or("textsplit")
                );
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    let separator = values.pop_front().ok_or("missing `<separator>` arg")?;

    Ok(Args {
        separator,
        files: values.into(),
        max_splits,
        direction,
        json,
        dquote_replacement,
        verbose,
    })
}

/// JSON record emitted for each input line in `--json` mode.
#[derive(Serialize)]
struct LineRecord<'a> {
    source: &'a str,
    line: usize,
    direction: Direction,
    pieces: Vec<&'a str>,
}

/// Format pieces as quoted strings separated by spaces.
fn render_quoted(pieces: &[&str], dquote_replacement: Option<&str>) -> String {
    pieces
        .iter()
        .map(|piece| quote_string(piece, dquote_replacement))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split each line of `input` and write the pieces to `out`.
fn process_lines<R: BufRead, W: Write>(
    source: &str,
    input: R,
    args: &Args,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let pieces = split_n(&line, &args.separator, args.max_splits, args.direction)?;
        log::debug!("{}:{}: {} pieces", source, index + 1, pieces.len());

        if args.json {
            let record = LineRecord {
                source,
                line: index + 1,
                direction: args.direction,
                pieces,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            let rendered = render_quoted(&pieces, args.dquote_replacement.as_deref());
            writeln!(out, "{}", rendered)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(lexopt::Parser::from_env())?;

    // Read the flag before configuring the logger, but only report a bad
    // value once the logger can display it.
    let env_verbose = env_flag("TEXTSPLIT_VERBOSE", false);
    let verbose = args.verbose || env_verbose.as_ref().is_ok_and(|verbose| *verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();
    flag_or_warn(env_verbose, false);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.files.is_empty() {
        log::info!("Processing stdin");
        process_lines("<stdin>", io::stdin().lock(), &args, &mut out)?;
    } else {
        for path in &args.files {
            log::info!("Processing file: {}", path);
            let file = File::open(path)?;
            process_lines(path, BufReader::new(file), &args, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
