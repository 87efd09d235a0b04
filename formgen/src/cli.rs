//! CLI argument definitions for the form generator.

use camino::Utf8PathBuf;
use clap::Parser;

/// Default bank location relative to the working directory.
pub const DEFAULT_BANK_PATH: &str = "bases/question_bank.json";

/// Default OAuth client-secret file location.
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

/// Default cached-token file location.
pub const DEFAULT_TOKEN_PATH: &str = "token.json";

/// Default bilingual form title.
pub const DEFAULT_TITLE: &str =
    "Teste de Nivelamento - Inglês Instrumental / ESL Placement Test";

/// Generate the placement test as a Google Form.
#[derive(Parser, Debug, Clone)]
#[command(name = "placement-formgen")]
#[command(version, about)]
#[command(long_about = concat!(
    "Generate the ESL placement test as a Google Form.\n\n",
    "Reads the question bank, creates a quiz-mode form with three difficulty ",
    "sections (10/8/7 questions), and wires the self-assessment branching: ",
    "beginners submit after section 1, everyone else continues to the end.\n\n",
    "Requires a Google OAuth client-secret file and a cached token file; the ",
    "token is refreshed in place when expired. On success the edit and ",
    "respondent URLs are printed together with the manual follow-up steps the ",
    "Forms API cannot perform.",
))]
pub struct Cli {
    /// Path to question_bank.json.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BANK_PATH)]
    pub bank: Utf8PathBuf,

    /// Path to the OAuth client-secret file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CREDENTIALS_PATH)]
    pub credentials: Utf8PathBuf,

    /// Path to the cached OAuth token file (refreshed across runs).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TOKEN_PATH)]
    pub token: Utf8PathBuf,

    /// Form title.
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            bank: Utf8PathBuf::from(DEFAULT_BANK_PATH),
            credentials: Utf8PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            token: Utf8PathBuf::from(DEFAULT_TOKEN_PATH),
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}
