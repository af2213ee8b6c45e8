mod analyze;
mod catalog;
mod cli;
mod config;
mod error;
mod report;
mod session;
mod state;
mod telemetry;
mod types;

use crate::error::ScorecardError;
use clap::Parser;
use std::io;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScorecardError> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.config_dir)?;
    let level = telemetry::level_for(cli.verbose, cli.quiet, &loaded.config.log_level());
    telemetry::init(&level)?;
    tracing::debug!(layers = ?loaded.layers, "config loaded");

    let settings = &loaded.config;
    match cli.command {
        cli::Commands::Questions => {
            print!("{}", catalog::render_questions());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let card = state::from_assignments(cmd.set.iter().map(String::as_str))?;
            let snapshot = card.snapshot();

            if (cmd.require_complete || settings.require_complete()) && !snapshot.is_complete() {
                let missing = snapshot
                    .unanswered()
                    .iter()
                    .map(|criterion| criterion.key())
                    .collect::<Vec<_>>();
                return Err(ScorecardError::Incomplete(missing.join(", ")));
            }

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => settings.output_format()?,
            };
            let scorecard_report = analyze::evaluate(&snapshot);
            let rendered =
                report::render(&scorecard_report, output_format, &settings.render_options())?;
            println!("{rendered}");

            if scorecard_report.is_complete() {
                Ok(exit_code::SUCCESS)
            } else {
                if !cli.quiet {
                    eprintln!(
                        "warning: {} of {} criteria unanswered",
                        scorecard_report.unanswered.len(),
                        types::rating::Criterion::COUNT
                    );
                }
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Classify(cmd) => {
            let tier = analyze::classify_checked(cmd.total)?;
            println!(
                "{} / {}: {}",
                cmd.total,
                analyze::MAX_TOTAL,
                tier.label()
            );
            println!("action: {}", tier.action());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Interactive => {
            let stdin = io::stdin();
            let final_ratings = session::Session::new(
                stdin.lock(),
                io::stdout().lock(),
                settings.render_options(),
            )
            .run()?;
            tracing::info!(
                answered = final_ratings.answered(),
                total = analyze::grand_total(&final_ratings),
                "session ended"
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
