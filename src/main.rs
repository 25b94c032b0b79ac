//! Command-line front end: reads mission input, prints final orientations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use expedition::process_input;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Simulates explorers moving on a rectangular landing area.
#[derive(Parser, Debug)]
#[command(name = "expedition")]
#[command(version, about, long_about = None)]
struct Args {
    /// Mission input file (reads stdin when omitted)
    input: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let lines: Vec<String> = match read_lines(args.input.as_deref()) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    info!(lines = lines.len(), "mission input read");

    match process_input(&lines) {
        Ok(orientations) => {
            for orientation in orientations {
                println!("{orientation}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_lines(input: Option<&std::path::Path>) -> io::Result<Vec<String>> {
    match input {
        Some(path) => BufReader::new(File::open(path)?).lines().collect(),
        None => io::stdin().lock().lines().collect(),
    }
}
