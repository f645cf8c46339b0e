//! This crate contains the source code for the binary for the game magic-maze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use magic_maze::{logging, App, Cli, TerminalKeys};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.verbose)?;
    let mut app = App::load(&cli.maze_path())?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, &mut TerminalKeys);
    ratatui::restore();

    result
}
