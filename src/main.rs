//! Console twenty-one against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use twentyone::{GameOptions, Session};

/// Play twenty-one against a computer dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(GameOptions::default(), seed, stdin, stdout);

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
