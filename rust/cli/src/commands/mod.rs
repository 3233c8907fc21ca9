//! Command handler modules for the hanabi CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<_, CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via `CliError`

mod cfg;
mod deal;
mod replay;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use replay::{handle_replay_command, replay_text, ReplayOptions, ReplayReport};
