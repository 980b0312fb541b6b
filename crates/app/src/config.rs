use std::fmt;
use std::path::PathBuf;

use quiz_core::model::ScoreBandsDraft;

pub const BANK_PATH_VAR: &str = "QUIZ_BANK_PATH";
pub const EXCELLENT_AT_VAR: &str = "QUIZ_EXCELLENT_AT";
pub const GOOD_AT_VAR: &str = "QUIZ_GOOD_AT";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPercent { flag: &'static str, raw: String },
    EmptyBankPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPercent { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected 0-100)")
            }
            ArgsError::EmptyBankPath => write!(f, "--bank path must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Runtime configuration of the terminal quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON bank to load; the embedded sample bank when `None`.
    pub bank_path: Option<PathBuf>,
    pub bands: ScoreBandsDraft,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Run(Config),
    Help,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_percent(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or_else(|| ArgsError::InvalidPercent {
            flag,
            raw: raw.to_string(),
        })
}

impl Config {
    /// Defaults taken from the environment. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let bank_path = var(BANK_PATH_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let excellent_at = var(EXCELLENT_AT_VAR)
            .and_then(|raw| parse_percent("--excellent-at", &raw).ok());
        let good_at = var(GOOD_AT_VAR).and_then(|raw| parse_percent("--good-at", &raw).ok());

        Self {
            bank_path,
            bands: ScoreBandsDraft {
                excellent_at,
                good_at,
            },
        }
    }

    /// Apply command-line flags on top of `self`.
    pub fn parse(mut self, args: impl IntoIterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(&mut args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyBankPath);
                    }
                    self.bank_path = Some(PathBuf::from(value));
                }
                "--excellent-at" => {
                    let value = require_value(&mut args, "--excellent-at")?;
                    self.bands.excellent_at = Some(parse_percent("--excellent-at", &value)?);
                }
                "--good-at" => {
                    let value = require_value(&mut args, "--good-at")?;
                    self.bands.good_at = Some(parse_percent("--good-at", &value)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Parsed::Run(self))
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [--bank <path.json>] [--excellent-at <pct>] [--good-at <pct>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank          built-in sample bank");
    eprintln!("  --excellent-at  80");
    eprintln!("  --good-at       60");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BANK_PATH_VAR}, {EXCELLENT_AT_VAR}, {GOOD_AT_VAR}, RUST_LOG");
}
