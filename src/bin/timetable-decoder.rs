//! Decodes raw timetable scrapes into course schedules.
//!
//! With input files, each file holds one raw schedule and its decoded form
//! is printed to stdout. Without input files, raw schedules are read from
//! stdin one JSON document per line and decoded schedules are written the
//! same way.

use std::{fs, io, process, str::FromStr};

use clap::Parser;
use log::{debug, error, info, LevelFilter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use timetable_decoder::{Decoder, Error, JsonLinesSink, Layout};

const STDIN_BUFFER: usize = 64;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw schedule JSON files; stdin is read as JSON lines when omitted
    inputs: Vec<String>,

    /// Path to a layout file (TOML)
    #[arg(short, long)]
    layout: Option<String>,

    /// Pretty-print decoded schedules (file inputs only)
    #[arg(long)]
    pretty: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .target(env_logger::Target::Stderr)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = run(&args).await {
        error!("{}", err);
        process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), Error> {
    let layout = match &args.layout {
        Some(path) => {
            info!(path = path.as_str(); "Loading layout");
            Some(Layout::load(path)?)
        }
        None => None,
    };
    let decoder = Decoder::new(layout)?;

    if args.inputs.is_empty() {
        return run_stdin(&decoder).await;
    }

    for input in &args.inputs {
        info!(input = input.as_str(); "Decoding file");
        let message = fs::read_to_string(input)?;
        let schedule = decoder.decode_message(&message)?;

        let encoded = if args.pretty {
            serde_json::to_string_pretty(&schedule)
        } else {
            serde_json::to_string(&schedule)
        };
        let encoded = encoded.map_err(|err| {
            Error::SerializationError(format!("Could not serialize schedule ({}).", err))
        })?;
        println!("{}", encoded);
    }

    Ok(())
}

async fn run_stdin(decoder: &Decoder) -> Result<(), Error> {
    let (tx, rx) = mpsc::channel(STDIN_BUFFER);

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if tx.send(line).await.is_err() {
                break;
            }
        }
        Ok::<(), io::Error>(())
    });

    let mut sink = JsonLinesSink::new(io::stdout());
    let report = decoder.run_stage(rx, &mut sink).await?;

    match reader.await {
        Ok(result) => result?,
        Err(err) => {
            return Err(Error::IoError(format!(
                "Stdin reader stopped unexpectedly ({}).",
                err
            )))
        }
    }

    info!(decoded = report.decoded, rejected = report.rejected; "Input exhausted");
    Ok(())
}
