use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::command::CommandKind;
use crate::game::GameStats;
use crate::rules::FinishReason;

/// Summary of one finished game, serialized as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential identifier within one replay (format: G-NNNNNN)
    pub game_id: String,
    pub turn: u32,
    /// Cards on the board when the game ended
    pub cards: u32,
    pub risks: u32,
    pub score: u32,
    pub reason: FinishReason,
    /// Kind of the command that ended the game
    pub ended_by: CommandKind,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    pub fn new(game_id: String, stats: GameStats, reason: FinishReason, ended_by: CommandKind) -> Self {
        Self {
            game_id,
            turn: stats.turn,
            cards: stats.board_depth,
            risks: stats.risk_count,
            score: stats.score,
            reason,
            ended_by,
            ts: None,
        }
    }
}

pub fn format_game_id(seq: u32) -> String {
    format!("G-{:06}", seq)
}

/// Writes one [`GameRecord`] per line to any sink.
pub struct GameLogger<W: Write> {
    writer: W,
    seq: u32,
}

impl<W: Write> GameLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Assigns the next id to a finished game and writes it.
    pub fn log_finish(
        &mut self,
        stats: GameStats,
        reason: FinishReason,
        ended_by: CommandKind,
    ) -> std::io::Result<()> {
        let id = self.next_id();
        self.write(&GameRecord::new(id, stats, reason, ended_by))
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
