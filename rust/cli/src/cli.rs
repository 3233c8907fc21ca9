//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "hanabi",
    version,
    about = "Replay scripted two-player Hanabi games and report their outcome"
)]
pub struct HanabiCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a command log and print one result line per finished game
    Replay {
        /// Command log to read (.zst supported); stdin when omitted
        #[arg(long)]
        input: Option<String>,
        /// Result format; overrides the configured format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Append totals over all finished games
        #[arg(long)]
        summary: bool,
    },
    /// Print a start command for a shuffled standard deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// How finished games are reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Turn: <n>, cards: <depth>, with risk: <risks>`
    #[default]
    Text,
    /// One JSON game record per line
    Jsonl,
}

impl OutputFormat {
    /// # Examples
    ///
    /// ```
    /// # use hanabi_cli::cli::OutputFormat;
    /// assert_eq!(OutputFormat::Jsonl.as_str(), "jsonl");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replay_flags() {
        let cli = HanabiCli::try_parse_from([
            "hanabi", "replay", "--input", "log.txt", "--format", "jsonl", "--summary",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Replay {
                input,
                format,
                summary,
            } => {
                assert_eq!(input.as_deref(), Some("log.txt"));
                assert_eq!(format, Some(OutputFormat::Jsonl));
                assert!(summary);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn replay_defaults_to_stdin() {
        let cli = HanabiCli::try_parse_from(["hanabi", "replay"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Commands::Replay {
                input: None,
                format: None,
                summary: false
            }
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(HanabiCli::try_parse_from(["hanabi", "replay", "--format", "csv"]).is_err());
    }

    #[test]
    fn all_subcommands_parse() {
        for args in [
            vec!["hanabi", "cfg"],
            vec!["hanabi", "deal"],
            vec!["hanabi", "deal", "--seed", "9"],
            vec!["hanabi", "replay", "--input", "x"],
        ] {
            assert!(HanabiCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }
}
