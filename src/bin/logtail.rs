#![deny(unsafe_code)]

//! Command-line front end for the rotation-aware tailer.
//!
//! One invocation delivers everything appended to FILE since the previous
//! invocation and records its position in a sidecar next to the file, so
//! repeated runs deliver each byte exactly once across log rotations. New
//! text goes to stdout; diagnostics go to stderr.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use access::LocalFs;
use clap::Parser;
use tail::Tail;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Deliver content appended to a log file since the previous invocation.
#[derive(Debug, Parser)]
#[command(name = "logtail", version)]
struct Args {
    /// Log file to tail.
    file: PathBuf,

    /// Sidecar recording progress (defaults to FILE.offset).
    #[arg(long, value_name = "PATH")]
    offset_file: Option<PathBuf>,

    /// Extra rotation suffix pattern, probed after the built-in ones.
    /// Anchored against the whole rotated file name; may be repeated.
    #[arg(long = "pattern", value_name = "REGEX")]
    patterns: Vec<String>,

    /// Keep polling and delivering new content until interrupted.
    #[arg(long)]
    follow: bool,

    /// Seconds between polls in follow mode.
    #[arg(long, value_name = "SECONDS", default_value_t = 5, requires = "follow")]
    interval: u64,

    /// Increase diagnostic verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // Help and version render through the same path as usage errors.
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(&args);

    let tail = match Tail::builder(LocalFs::new())
        .rotation_patterns(args.patterns.iter().cloned())
        .build()
    {
        Ok(tail) => tail,
        Err(error) => {
            tracing::error!(error = %error, "invalid rotation pattern");
            return ExitCode::from(1);
        }
    };

    match run(&tail, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "tailing failed");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(args: &Args) {
    let default = if args.quiet {
        LevelFilter::ERROR
    } else {
        match args.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    // Skip color codes when stderr is not a terminal.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn run(tail: &Tail<LocalFs>, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    loop {
        match tail.check_file(&args.file, args.offset_file.as_deref())? {
            Some(pass) if !pass.is_empty() => {
                stdout.write_all(pass.text().as_bytes())?;
                stdout.flush()?;
            }
            Some(_) => {}
            None => tracing::debug!(file = %args.file.display(), "target absent"),
        }
        if !args.follow {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(args.interval));
    }
}
