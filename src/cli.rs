//! Command-line interface of the game.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Walk through a maze in the terminal, one keypress at a time.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Maze file to play, e.g. `maze1.txt`.
    pub maze: PathBuf,
    /// Directory searched for the maze file before falling back to the path as given.
    #[arg(short, long, default_value = "mazes")]
    pub dir: PathBuf,
    /// Append log records to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Log more detail; repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolves the maze argument to the file that gets loaded.
    ///
    /// The maze directory is searched first. When it holds no file by that name, the argument is
    /// used as a plain path.
    #[must_use]
    pub fn maze_path(&self) -> PathBuf {
        let candidate = self.dir.join(&self.maze);
        if candidate.is_file() {
            candidate
        } else {
            self.maze.clone()
        }
    }
}
