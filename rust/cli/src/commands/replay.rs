//! Replay command handler.
//!
//! Reads a command log line by line, feeds each parsed command to a turn
//! engine and reports every game the moment it finishes.
//!
//! ## Reporting
//!
//! - `text`: `Turn: <n>, cards: <depth>, with risk: <risks>` per game
//! - `jsonl`: one `GameRecord` per game
//!
//! Malformed lines are reported on stderr with their 1-based line number and
//! skipped. A position outside the hand ends the current game, which is then
//! reported like any other finished game.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_totals, ReplayTotals};
use crate::io_utils::{read_all, read_text_auto};
use crate::parser::parse_command;
use crate::ui;
use hanabi_engine::command::CommandKind;
use hanabi_engine::engine::{Engine, Phase, Verdict};
use hanabi_engine::errors::GameError;
use hanabi_engine::game::GameStats;
use hanabi_engine::logger::GameLogger;
use hanabi_engine::rules::{FinishReason, Rules};
use std::io::Write;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub rules: Rules,
    pub format: OutputFormat,
    /// Append a totals line after the last game
    pub summary: bool,
}

/// What a replay saw, for the caller to pick an exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub totals: ReplayTotals,
    /// Lines that failed to parse or were rejected by the engine
    pub errors: usize,
    /// Input ended while a game was still running
    pub unfinished: bool,
}

/// Handle the replay command.
///
/// Reads `input` (plain or `.zst`), or stdin when `None`, and replays it.
pub fn handle_replay_command(
    input: Option<&str>,
    options: &ReplayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ReplayReport, CliError> {
    let content = match input {
        Some(path) => read_text_auto(path)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", path, e)))?,
        None => {
            let stdin = std::io::stdin();
            let mut lock = stdin.lock();
            read_all(&mut lock)
                .map_err(|e| CliError::InvalidInput(format!("Failed to read stdin: {}", e)))?
        }
    };
    replay_text(&content, options, out, err)
}

/// Replays an in-memory command log.
pub fn replay_text(
    content: &str,
    options: &ReplayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ReplayReport, CliError> {
    let mut engine = Engine::new(options.rules);
    let mut sink = match options.format {
        OutputFormat::Text => ResultSink::Text(out),
        OutputFormat::Jsonl => ResultSink::Jsonl(GameLogger::new(out)),
    };
    let mut report = ReplayReport::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                warn!(line = line_no, %msg, "skipping unparsable line");
                ui::write_line_error(err, line_no, &msg)?;
                report.errors += 1;
                continue;
            }
        };

        let kind = command.kind();
        let reason = match engine.execute(command) {
            Ok(Verdict::Finish(reason)) => reason,
            Ok(Verdict::Continue | Verdict::Ignored) => continue,
            Err(e) => {
                warn!(line = line_no, error = %e, "command rejected");
                ui::write_line_error(err, line_no, &e.to_string())?;
                report.errors += 1;
                match e {
                    GameError::IndexOutOfRange { .. } => FinishReason::MalformedCommand,
                    _ => continue,
                }
            }
        };

        if let Some(stats) = engine.stats() {
            sink.report(stats, reason, kind)?;
            report.totals.games += 1;
            report.totals.cards += stats.board_depth;
            report.totals.risks += stats.risk_count;
        }
    }

    if engine.phase() == Phase::Active {
        report.unfinished = true;
        ui::display_warning(err, "input ended before the last game finished")?;
    }
    if options.summary {
        sink.summary(&report.totals)?;
    }
    debug!(
        games = report.totals.games,
        errors = report.errors,
        "replay complete"
    );
    Ok(report)
}

enum ResultSink<'a> {
    Text(&'a mut dyn Write),
    Jsonl(GameLogger<&'a mut dyn Write>),
}

impl ResultSink<'_> {
    fn report(
        &mut self,
        stats: GameStats,
        reason: FinishReason,
        ended_by: CommandKind,
    ) -> std::io::Result<()> {
        match self {
            ResultSink::Text(out) => writeln!(out, "{}", stats),
            ResultSink::Jsonl(logger) => logger.log_finish(stats, reason, ended_by),
        }
    }

    fn summary(&mut self, totals: &ReplayTotals) -> Result<(), CliError> {
        match self {
            ResultSink::Text(out) => writeln!(out, "{}", format_totals(totals))?,
            ResultSink::Jsonl(logger) => {
                let line = serde_json::to_string(totals).map_err(std::io::Error::other)?;
                writeln!(logger.get_mut(), "{}", line)?;
            }
        }
        Ok(())
    }
}
