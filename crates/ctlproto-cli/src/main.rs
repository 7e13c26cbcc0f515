use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ctlproto-cli",
    about = "Decode control-protocol reply lines",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse each input line into a JSON object of its tokens
    Parse {
        /// Pretty-print JSON on output
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Skip malformed lines instead of stopping at the first one
        #[arg(long, default_value_t = false)]
        keep_going: bool,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Unescape a double-quoted literal
    Unescape {
        literal: String,
    },
    /// Hex-encode the raw bytes of the input
    Hex {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Word-wrap the input text
    Wrap {
        #[arg(long, default_value_t = 80)]
        width: usize,

        #[arg(long, default_value = " ")]
        sep: String,

        #[arg(long, default_value = "\n")]
        line_ending: String,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

fn read_text(input: Option<&Path>) -> Result<String> {
    let bytes = read_input(input)?;
    String::from_utf8(bytes).context("input is not valid UTF-8")
}

fn parse(input: Option<&Path>, pretty: bool, keep_going: bool) -> Result<()> {
    let text = read_text(input)?;
    let mut rejected = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let keyvals = match ctlproto::parse_keyvals(line) {
            Ok(kv) => kv,
            Err(e) if keep_going => {
                log::warn!("skipping line {}: {}", idx + 1, e);
                rejected += 1;
                continue;
            }
            Err(e) => {
                return Err(ctlproto::Error::Line {
                    line: idx + 1,
                    source: Box::new(e),
                }
                .into());
            }
        };
        let sorted: BTreeMap<_, _> = keyvals.into_iter().collect();
        if pretty {
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        } else {
            println!("{}", serde_json::to_string(&sorted)?);
        }
    }
    if rejected > 0 {
        log::info!("{} line(s) rejected", rejected);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.command {
        Command::Parse {
            pretty,
            keep_going,
            input,
        } => parse(input.as_deref(), pretty, keep_going)?,
        Command::Unescape { literal } => {
            println!("{}", ctlproto::unescape_quoted(&literal)?);
        }
        Command::Hex { input } => {
            let bytes = read_input(input.as_deref())?;
            println!("{}", ctlproto::base16_encode(&bytes));
        }
        Command::Wrap {
            width,
            sep,
            line_ending,
            input,
        } => {
            if width == 0 {
                bail!("--width must be at least 1");
            }
            let text = read_text(input.as_deref())?;
            let opts = ctlproto::WrapOptions {
                width,
                sep,
                line_ending,
            };
            println!("{}", ctlproto::string_wrap(text.trim_end_matches('\n'), &opts));
        }
    }

    Ok(())
}
