//! Plato CLI
//!
//! Looks up a physical constant by tag:
//! - `plato` prompts for a tag on stdin
//! - `plato Fundamental::Planck` looks the tag up directly
//! - `plato --list` prints every known tag
//!
//! A miss prints the known tags and reads one more tag from stdin. A second
//! miss is reported on stderr and ends the process with a failure status.
//! With `--json`, stdout holds only the JSON output.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod session;

use clap::Parser;
use session::Options;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "plato", version, about = "Look up physical constants in SI and CGS units")]
struct Args {
    /// Constant tag, e.g. Fundamental::Planck (read from stdin when omitted)
    tag: Option<String>,

    /// Print every known tag and exit
    #[arg(long)]
    list: bool,

    /// Print records as JSON
    #[arg(long)]
    json: bool,

    /// Skip the greeting
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    let options = Options { json: args.json, quiet: args.quiet };

    let registry = plato_std::global();
    tracing::debug!(constants = registry.len(), "registry ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    let result = if args.list {
        session::list(registry, options, &mut out)
    } else {
        session::run(registry, args.tag, options, &mut stdin.lock(), &mut out, &mut diag)
    };
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "session failed");
            let _ = session::report(&e, &mut diag);
            ExitCode::FAILURE
        }
    }
}
