use std::{
    borrow::Cow,
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use sinhala_norm::{NoEmoji, Normalizer, NormalizerError};
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

/// Normalize Sinhala social-media text, one line per record.
#[derive(Parser, Debug)]
#[command(name = "sinhala-norm", version, about)]
struct Cli {
    /// Input file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit tab-separated tokens instead of a space-joined line
    #[arg(long)]
    tokens: bool,

    /// Skip suffix stemming
    #[arg(long)]
    no_stem: bool,

    /// Tokens shorter than this are never stemmed
    #[arg(long, default_value_t = sinhala_norm::stemmer::DEFAULT_MIN_STEM_LEN)]
    min_stem_len: usize,

    /// Treat emoji as ordinary characters
    #[arg(long)]
    no_emoji: bool,

    /// Log pipeline diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_writer(io::stderr)
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let normalizer = build_normalizer(&cli)?;
    debug!(stages = ?normalizer.pre_stages(), "normalizer ready");

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = BufWriter::new(io::stdout().lock());
    run(&normalizer, cli.tokens, reader, &mut out)?;
    out.flush()?;
    Ok(())
}

fn build_normalizer(cli: &Cli) -> Result<Normalizer, NormalizerError> {
    let mut builder = Normalizer::builder()
        .stemming(!cli.no_stem)
        .min_stem_len(cli.min_stem_len);
    if cli.no_emoji {
        builder = builder.emoji_source(&NoEmoji);
    }
    builder.build()
}

/// One output line per input line. Invalid UTF-8 is replaced, not fatal.
fn run<R: BufRead, W: Write>(
    normalizer: &Normalizer,
    tokens: bool,
    mut reader: R,
    out: &mut W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if matches!(line, Cow::Owned(_)) {
            warn!(line = line_no, "invalid UTF-8 replaced");
        }

        if tokens {
            writeln!(out, "{}", normalizer.tokens(&line).join("\t"))?;
        } else {
            writeln!(out, "{}", normalizer.normalize(&line))?;
        }
    }
}
