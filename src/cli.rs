use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "CRO scorecard: rate ten criteria and get a hiring recommendation"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding scorecard.toml and .scorecard/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every criterion with its answer choices
    Questions,
    /// Score a set of ratings given on the command line
    Score(ScoreCommand),
    /// Print the recommendation tier for a raw total
    Classify(ClassifyCommand),
    /// Answer the questionnaire interactively on stdin
    Interactive,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Rating assignment, e.g. --set team-size=5 (repeatable)
    #[arg(long = "set", value_name = "CRITERION=VALUE")]
    pub set: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Fail when any criterion is left unanswered
    #[arg(long)]
    pub require_complete: bool,
}

#[derive(Args)]
pub struct ClassifyCommand {
    pub total: u32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
