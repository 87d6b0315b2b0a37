use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "bemestar",
    about = "Score DASS-21 and IAS questionnaires and plan follow-up checkups",
    version
)]
pub struct Cli {
    /// Directory holding settings and saved results (defaults to the platform data dir)
    #[arg(long, global = true, env = "BEMESTAR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a DASS-21 and an IAS submission and show the combined result
    Score(ScoreArgs),
    /// List saved assessments of one employee
    History(HistoryArgs),
    /// Show or change the company checkup intervals
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Print a questionnaire's question bank
    Questions {
        /// Questionnaire id ("dass21" or "ias")
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON array of DASS-21 responses ({"question_id": n, "value": v})
    #[arg(long)]
    pub dass21: PathBuf,
    /// JSON array of IAS responses
    #[arg(long)]
    pub ias: PathBuf,
    /// Reject incomplete or out-of-range submissions instead of scoring them
    #[arg(long)]
    pub strict: bool,
    /// Save the result for this employee
    #[arg(long, requires = "company")]
    pub employee: Option<String>,
    /// Company the employee belongs to
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[arg(long)]
    pub employee: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings
    Show,
    /// Store new intervals
    Set {
        /// Days between checkups for non-severe results
        #[arg(long)]
        normal: u32,
        /// Days between checkups for severe results
        #[arg(long)]
        severe: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Report,
}
