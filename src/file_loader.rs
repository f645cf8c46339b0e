//! File loading and validation utilities for maze files.

use std::{fs, path::Path};

use log::info;

use crate::map::{Maze, MazeError};

/// Reads and validates a maze file.
///
/// This function reads the file at `path`, parses it into a [`Maze`] named after the file stem,
/// and checks the grid before handing it to the game.
///
/// # Errors
///
/// - [`MazeError::Io`] when the file cannot be read
/// - any error raised by [`validate`]
pub(crate) fn load(path: &Path) -> Result<Maze, MazeError> {
    let contents = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let maze = Maze::parse(maze_name(path), &contents);
    validate(&maze)?;

    info!(
        "loaded maze {} from {} ({} rows, {} columns)",
        maze.name,
        path.display(),
        maze.height(),
        maze.width()
    );

    Ok(maze)
}

/// Extracts the display name of a maze from its path.
///
/// This is the file name with its last extension removed. Paths without a file name fall back to
/// their full display form.
pub(crate) fn maze_name(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

/// Validates the contents of a parsed maze.
///
/// This function makes sure the grid can be played:
/// - It holds exactly one player marker
/// - Every teleport symbol appears in exactly two cells
///
/// # Errors
///
/// - [`MazeError::MissingPlayer`] or [`MazeError::MultiplePlayers`] for a bad player count
/// - [`MazeError::DuplicateTeleportSymbol`] or [`MazeError::UnpairedTeleportSymbol`] for a bad
///   teleport symbol
pub(crate) fn validate(maze: &Maze) -> Result<(), MazeError> {
    let _ = maze.player_position()?;
    let _ = maze.teleports()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;

    /// Writes a maze fixture into the temporary directory and returns its path.
    fn fixture(file_name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("magic-maze-loader-{}", process::id()));
        fs::create_dir_all(&dir).expect("failed to create fixture directory");
        let path = dir.join(file_name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    #[test]
    fn test_load_valid_maze() {
        let path = fixture("valid.txt", "#####\n#@ $#\n#####\n");

        let maze = load(&path).expect("valid maze should load");

        assert_eq!(maze.name, "valid");
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.cells.get(1), Some(&vec!['#', '@', ' ', '$', '#']));
    }

    #[test]
    fn test_load_converts_dots_to_spaces() {
        let path = fixture("dotted.txt", "#####\n#@..$#\n#####");

        let maze = load(&path).expect("dotted maze should load");

        assert_eq!(maze.cells.get(1), Some(&vec!['#', '@', ' ', ' ', '$', '#']));
    }

    #[test]
    fn test_load_with_teleport_pair() {
        let path = fixture("teleport.txt", "@ A\n # \nA  \n");

        assert!(load(&path).is_ok(), "a teleport pair is valid");
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("magic-maze-does-not-exist.txt");

        let Err(MazeError::Io { path: reported, .. }) = load(&path) else {
            panic!("missing file should be an io error");
        };
        assert_eq!(reported, path);
    }

    #[test]
    fn test_load_duplicate_teleport_symbol() {
        let path = fixture("duplicate.txt", "@X\nXX\n");

        assert!(matches!(
            load(&path),
            Err(MazeError::DuplicateTeleportSymbol { symbol: 'X', .. })
        ));
    }

    #[test]
    fn test_load_unpaired_teleport_symbol() {
        let path = fixture("unpaired.txt", "@ X $\n");

        assert!(matches!(
            load(&path),
            Err(MazeError::UnpairedTeleportSymbol { symbol: 'X', .. })
        ));
    }

    #[test]
    fn test_load_without_player() {
        let path = fixture("no_player.txt", "#####\n#  $#\n#####\n");

        assert!(matches!(load(&path), Err(MazeError::MissingPlayer)));
    }

    #[test]
    fn test_maze_name_strips_last_extension() {
        assert_eq!(maze_name(Path::new("mazes/maze1.txt")), "maze1");
        assert_eq!(maze_name(Path::new("test.backup.txt")), "test.backup");
        assert_eq!(maze_name(Path::new("noextension")), "noextension");
    }

    #[test]
    fn test_validate_empty_maze() {
        let maze = Maze::parse("empty".to_owned(), "");

        assert!(matches!(validate(&maze), Err(MazeError::MissingPlayer)));
    }
}
