//! CLI argument definitions for the question bank validator.
//!
//! Separated from the main entrypoint to keep the binary focused on
//! orchestration and exit-code mapping.

use camino::Utf8PathBuf;
use clap::Parser;

/// Default bank location relative to the working directory.
pub const DEFAULT_BANK_PATH: &str = "bases/question_bank.json";

/// Validate the placement-exam question bank.
#[derive(Parser, Debug, Clone)]
#[command(name = "placement-validator")]
#[command(version, about)]
#[command(long_about = concat!(
    "Validate the placement-exam question bank.\n\n",
    "Checks schema correctness, duplicate IDs, band distribution against the ",
    "10/8/7 test blueprint, option integrity (exactly four options with exactly ",
    "one correct answer), anchor question designation, and metadata ",
    "completeness. Errors block form generation; warnings are advisory only.\n\n",
    "Exits 0 when no errors are found, 1 otherwise.",
))]
pub struct Cli {
    /// Path to question_bank.json.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BANK_PATH)]
    pub bank: Utf8PathBuf,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            bank: Utf8PathBuf::from(DEFAULT_BANK_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_defaults_to_bases_directory() {
        let cli = Cli::parse_from(["placement-validator"]);
        assert_eq!(cli.bank, Utf8PathBuf::from(DEFAULT_BANK_PATH));
    }

    #[test]
    fn bank_flag_overrides_default() {
        let cli = Cli::parse_from(["placement-validator", "--bank", "other/bank.json"]);
        assert_eq!(cli.bank, Utf8PathBuf::from("other/bank.json"));
    }
}
