//! A terminal maze game with teleport pairs.
//!
//! A maze is read from a plain text file, one row per line. The player, drawn as `@`, walks
//! through it one keypress at a time looking for the finish `$`, blocked by walls `#`. Any other
//! character marks one end of a teleport pair: stepping onto it sends the player to the other
//! cell carrying the same character.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod file_loader;
pub mod logging;
mod map;
mod movement;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use events::{Input, KeySource, TerminalKeys};
