mod command;
mod config;
mod render;
mod runner;

use std::io;
use std::path::Path;

use quiz_core::model::{QuestionBank, ScoreBands, ScoreBandsDraft};
use services::QuizSession;

use crate::config::{Config, Parsed, print_usage};
use crate::runner::Runner;

const SAMPLE_BANK: &str = include_str!("../assets/sample_bank.json");

fn read_bank_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => {
            log::info!("loading question bank from {}", path.display());
            std::fs::read_to_string(path)
        }
        None => {
            log::info!("using built-in sample question bank");
            Ok(SAMPLE_BANK.to_string())
        }
    }
}

/// Validate everything the session needs before the first screen is shown.
fn prepare(
    raw_bank: &str,
    bands: ScoreBandsDraft,
) -> Result<(QuestionBank, ScoreBands), quiz_core::Error> {
    let bank = QuestionBank::from_json_str(raw_bank)?;
    let bands = bands.validate()?;
    Ok((bank, bands))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_env().parse(std::env::args().skip(1)) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    let raw = read_bank_source(config.bank_path.as_deref())?;
    let (bank, bands) = prepare(&raw, config.bands)?;
    log::debug!(
        "bank has {} questions, bands excellent>={} good>={}",
        bank.len(),
        bands.excellent_at(),
        bands.good_at()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut runner = Runner::new(QuizSession::new(), bank, bands);
    runner.run(stdin.lock(), &mut stdout)?;

    if let Some(summary) = runner.session().final_summary() {
        let (score, total, percentage) = summary.as_tuple();
        log::info!("last attempt: {score}/{total} ({percentage}%)");
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
