use crate::analyze::{self, classify, grand_total, section_total, MAX_TOTAL};
use crate::catalog;
use crate::error::{Result, ScorecardError};
use crate::report::{md, RenderOptions};
use crate::state::Scorecard;
use crate::types::rating::{parse_rating, Criterion, RatingValue};
use crate::types::scoring::Ratings;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  1 | 3 | 5              answer the current question
  set <criterion> <1|3|5>  answer or change any criterion
  show                   print the full report
  help                   print this help
  quit                   end the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCommand {
    Answer(RatingValue),
    Set(Criterion, RatingValue),
    Show,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str, current: Option<Criterion>) -> Result<SessionCommand> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(SessionCommand::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "show" => Ok(SessionCommand::Show),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
        "set" => {
            let (Some(key), Some(value), None) = (words.next(), words.next(), words.next())
            else {
                return Err(ScorecardError::InvalidCommand(format!(
                    "expected `set <criterion> <1|3|5>`, got `{}`",
                    line.trim()
                )));
            };
            let criterion: Criterion = key.parse()?;
            Ok(SessionCommand::Set(criterion, parse_rating(criterion, value)?))
        }
        _ => match (current, words.next()) {
            (Some(criterion), None) => Ok(SessionCommand::Answer(parse_rating(criterion, head)?)),
            _ => Err(ScorecardError::InvalidCommand(format!(
                "unrecognized command `{}`",
                line.trim()
            ))),
        },
    }
}

/// Line-driven questionnaire. Asks unanswered criteria in order and
/// re-evaluates the scorecard after every accepted answer.
pub struct Session<R, W> {
    input: R,
    output: W,
    card: Scorecard,
    options: RenderOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: RenderOptions) -> Self {
        Self {
            input,
            output,
            card: Scorecard::new(),
            options,
        }
    }

    /// Runs until `quit` or end of input; returns the final snapshot.
    pub fn run(mut self) -> Result<Ratings> {
        writeln!(self.output, "{}", catalog::TITLE)?;
        writeln!(
            self.output,
            "Rate each criterion 1 (low), 3 (medium) or 5 (high). Type `help` for commands."
        )?;

        let mut announced_section = None;
        loop {
            let current = self.card.snapshot().unanswered().first().copied();
            match current {
                Some(criterion) => {
                    let section = criterion.section();
                    if announced_section != Some(section) {
                        let copy = catalog::section(section);
                        writeln!(
                            self.output,
                            "\nSection {}: {}\n  {}",
                            section.number(),
                            copy.title,
                            copy.description
                        )?;
                        announced_section = Some(section);
                    }
                    write!(self.output, "{}", catalog::question_block(criterion))?;
                    write!(self.output, "{criterion}> ")?;
                }
                None => write!(self.output, "> ")?,
            }
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(err) => {
                    tracing::info!(error = %err, "rejected non utf-8 session input");
                    writeln!(self.output, "invalid input: line is not valid UTF-8")?;
                    continue;
                }
            };

            let command = match parse_command(&line, current) {
                Ok(command) => command,
                Err(err) => {
                    tracing::info!(input = line.trim(), "rejected session input");
                    writeln!(self.output, "invalid input: {err}")?;
                    continue;
                }
            };

            match command {
                SessionCommand::Answer(value) => {
                    if let Some(criterion) = current {
                        self.accept(criterion, value)?;
                    }
                }
                SessionCommand::Set(criterion, value) => self.accept(criterion, value)?,
                SessionCommand::Show => self.print_report()?,
                SessionCommand::Help => writeln!(self.output, "{HELP}")?,
                SessionCommand::Quit => break,
                SessionCommand::Empty => {}
            }
        }

        Ok(self.card.snapshot())
    }

    fn accept(&mut self, criterion: Criterion, value: RatingValue) -> Result<()> {
        let was_complete = self.card.snapshot().is_complete();
        let ratings = self.card.set_rating(criterion, value);
        self.print_status(&ratings, criterion)?;
        if ratings.is_complete() && !was_complete {
            writeln!(self.output, "\nAll criteria answered.\n")?;
            self.print_report()?;
        }
        Ok(())
    }

    fn print_status(&mut self, ratings: &Ratings, changed: Criterion) -> Result<()> {
        let section = changed.section();
        let total = grand_total(ratings);
        writeln!(
            self.output,
            "  section {}: {} / {} | total: {} / {} {} | {}",
            section.number(),
            section_total(ratings, section),
            section.max_points(),
            total,
            MAX_TOTAL,
            md::progress_bar(analyze::progress_fraction(ratings), self.options.progress_width),
            classify(total).label()
        )?;
        Ok(())
    }

    fn print_report(&mut self) -> Result<()> {
        let report = analyze::evaluate(&self.card.snapshot());
        write!(self.output, "{}", md::to_markdown(&report, &self.options))?;
        Ok(())
    }
}
