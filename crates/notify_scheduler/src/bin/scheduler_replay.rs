//! Replays calendar actions and prints the resulting snapshots.
//!
//! Reads one `{"type": ..., "payload": ...}` record per line from a file (or
//! stdin) and writes one JSON snapshot per line to stdout.
//!
//! ```text
//! scheduler_replay [--settings settings.json] [--today 2020-01-14] [actions.jsonl]
//! ```

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use notify_scheduler::dates::parse_year_month_day;
use notify_scheduler::{CalendarSettings, CalendarStore, TaggedAction};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

struct Args {
    settings: Option<PathBuf>,
    today: Option<NaiveDate>,
    input: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> notify_scheduler::Result<Self> {
        let mut res = Args {
            settings: None,
            today: None,
            input: None,
        };

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if arg == "--settings" {
                i += 1;
                match args.get(i) {
                    Some(path) => res.settings = Some(PathBuf::from(path)),
                    None => error!("settings argument missing?"),
                }
            } else if arg == "--today" {
                i += 1;
                match args.get(i) {
                    Some(day) => res.today = Some(parse_year_month_day(day)?),
                    None => error!("today argument missing?"),
                }
            } else if res.input.is_none() {
                res.input = Some(PathBuf::from(arg));
            } else {
                warn!("ignoring extra argument '{arg}'");
            }

            i += 1;
        }

        Ok(res)
    }
}

fn setup_logging() {
    // stdout carries the snapshots, so logs go to stderr
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notify_scheduler=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> notify_scheduler::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = Args::parse(&args)?;

    let settings = match &args.settings {
        Some(path) => CalendarSettings::load(path)?,
        None => CalendarSettings::default(),
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut store = CalendarStore::with_settings(today, &settings)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let tagged: TaggedAction = match serde_json::from_str(&line) {
            Ok(tagged) => tagged,
            Err(err) => {
                error!("line {}: not an action record: {err}", lineno + 1);
                continue;
            }
        };

        match store.dispatch_tagged(tagged) {
            Ok(state) => {
                serde_json::to_writer(&mut out, &*state)?;
                writeln!(out)?;
            }
            Err(err) => error!("line {}: {err}", lineno + 1),
        }
    }

    Ok(())
}

fn main() {
    setup_logging();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}
