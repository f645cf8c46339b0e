//! Maze grid and position index module.
//!
//! This module contains the [`Maze`] struct holding the grid of cells read from a maze file, the
//! reserved cell symbols, and the lookups that locate the player marker and the teleport endpoints
//! inside a grid.

use std::{collections::BTreeMap, io, path::PathBuf};

use crate::types::Position;

/// Wall cell symbol.
pub(crate) const WALL: char = '#';
/// Empty cell symbol.
pub(crate) const EMPTY: char = ' ';
/// Alternate spelling of [`EMPTY`] in maze files.
///
/// Editors tend to strip trailing spaces, so maze files may use this symbol instead. It never
/// survives loading.
pub(crate) const EMPTY_ALIAS: char = '.';
/// Player marker.
pub(crate) const PLAYER: char = '@';
/// Finish marker.
pub(crate) const FINISH: char = '$';

/// Returns whether `symbol` marks a teleport endpoint.
///
/// Every character outside the reserved wall, empty, player and finish symbols is a teleport
/// symbol.
pub(crate) const fn is_teleport(symbol: char) -> bool {
    !matches!(symbol, WALL | EMPTY | PLAYER | FINISH)
}

/// Errors raised while loading or indexing a maze.
#[derive(Debug, thiserror::Error)]
pub(crate) enum MazeError {
    /// The maze file could not be read.
    #[error("failed to read maze file {}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The grid holds no player marker.
    #[error("maze has no player marker '{}'", PLAYER)]
    MissingPlayer,
    /// The grid holds more than one player marker.
    #[error(
        "maze has more than one player marker '{marker}', at {first} and {second}",
        marker = PLAYER
    )]
    MultiplePlayers {
        /// First marker in row-major order.
        first: Position,
        /// Second marker in row-major order.
        second: Position,
    },
    /// A teleport symbol occurs in more than two cells.
    #[error("teleport symbol '{symbol}' appears more than twice, again at {position}")]
    DuplicateTeleportSymbol {
        /// The offending symbol.
        symbol: char,
        /// Cell of its third occurrence.
        position: Position,
    },
    /// A teleport symbol occurs in a single cell, leaving it without an exit.
    #[error("teleport symbol '{symbol}' at {position} has no matching endpoint")]
    UnpairedTeleportSymbol {
        /// The offending symbol.
        symbol: char,
        /// Cell of its only occurrence.
        position: Position,
    },
}

/// Maze grid container.
///
/// This structure holds the cells of a maze as rows of characters in row-major order. Rows keep
/// the length they had in the file, so they need not all be equally long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Display name of the maze.
    ///
    /// This field holds the name of the file the maze was read from, without its extension.
    pub(crate) name: String,
    /// Grid cells as rows of symbols.
    pub(crate) cells: Vec<Vec<char>>,
}

impl Maze {
    /// Builds a maze from a name and the multiline contents of a maze file.
    ///
    /// Each line becomes one row. Trailing whitespace is stripped from every line and every
    /// [`EMPTY_ALIAS`] is replaced by [`EMPTY`]. No validation happens here.
    pub(crate) fn parse(name: String, contents: &str) -> Self {
        let cells = contents
            .lines()
            .map(|line| {
                line.trim_end()
                    .chars()
                    .map(|symbol| if symbol == EMPTY_ALIAS { EMPTY } else { symbol })
                    .collect()
            })
            .collect();

        Self { name, cells }
    }

    /// Returns the symbol at `position`, or `None` when the position lies outside the grid.
    pub(crate) fn cell(&self, position: Position) -> Option<char> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Overwrites the symbol at `position`.
    ///
    /// Positions outside the grid are ignored.
    pub(crate) fn set_cell(&mut self, position: Position, symbol: char) {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = symbol;
        }
    }

    /// Number of rows in the grid.
    pub(crate) fn height(&self) -> usize {
        self.cells.len()
    }

    /// Length of the longest row in the grid.
    pub(crate) fn width(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates over every cell in row-major order.
    fn positions(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &symbol)| (Position::new(row, col), symbol))
        })
    }

    /// Locates the player marker.
    ///
    /// # Errors
    ///
    /// - [`MazeError::MissingPlayer`] when the grid has no marker
    /// - [`MazeError::MultiplePlayers`] when it has more than one
    pub(crate) fn player_position(&self) -> Result<Position, MazeError> {
        let mut players = self
            .positions()
            .filter(|&(_, symbol)| symbol == PLAYER)
            .map(|(position, _)| position);

        let first = players.next().ok_or(MazeError::MissingPlayer)?;
        match players.next() {
            Some(second) => Err(MazeError::MultiplePlayers { first, second }),
            None => Ok(first),
        }
    }

    /// Builds the teleport registry for this grid.
    ///
    /// This function scans the grid in row-major order and groups the cells of every teleport
    /// symbol. The first occurrence of a symbol becomes its first endpoint.
    ///
    /// # Errors
    ///
    /// - [`MazeError::DuplicateTeleportSymbol`] on the third occurrence of any symbol
    /// - [`MazeError::UnpairedTeleportSymbol`] for a symbol occurring only once
    pub(crate) fn teleports(&self) -> Result<Teleports, MazeError> {
        let mut seen: BTreeMap<char, Vec<Position>> = BTreeMap::new();

        for (position, symbol) in self.positions().filter(|&(_, symbol)| is_teleport(symbol)) {
            let endpoints = seen.entry(symbol).or_default();
            if endpoints.len() == 2 {
                return Err(MazeError::DuplicateTeleportSymbol { symbol, position });
            }
            endpoints.push(position);
        }

        let mut pairs = BTreeMap::new();
        for (symbol, endpoints) in seen {
            match *endpoints.as_slice() {
                [first, second] => {
                    let _ = pairs.insert(symbol, [first, second]);
                }
                [position] => return Err(MazeError::UnpairedTeleportSymbol { symbol, position }),
                _ => {}
            }
        }

        Ok(Teleports { pairs })
    }
}

/// Teleport registry.
///
/// This structure maps every teleport symbol of a grid to its two endpoints, in the order they
/// were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Teleports {
    /// Endpoints keyed by symbol.
    pairs: BTreeMap<char, [Position; 2]>,
}

impl Teleports {
    /// Returns the two endpoints registered for `symbol`.
    pub(crate) fn endpoints(&self, symbol: char) -> Option<[Position; 2]> {
        self.pairs.get(&symbol).copied()
    }

    /// Returns where a player landing on `symbol` at `landed` gets sent.
    ///
    /// The exit is the endpoint other than the landed-on cell: the second endpoint when the player
    /// landed on the first, the first endpoint otherwise.
    pub(crate) fn destination(&self, symbol: char, landed: Position) -> Option<Position> {
        let [first, second] = self.endpoints(symbol)?;

        Some(if first == landed { second } else { first })
    }

    /// Number of registered teleport pairs.
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn maze(rows: &[&str]) -> Maze {
        Maze::parse("test".to_owned(), &rows.join("\n"))
    }

    #[test]
    fn test_parse_rows_and_name() {
        let maze = maze(&["###", "#@#", "###"]);

        assert_eq!(maze.name, "test");
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.cells.get(1), Some(&vec!['#', '@', '#']));
    }

    #[test]
    fn test_parse_replaces_empty_alias_and_trims_trailing_whitespace() {
        let maze = Maze::parse("test".to_owned(), "#.@. \t\n#..#\r\n");

        assert_eq!(
            maze.cells,
            vec![vec!['#', ' ', '@', ' '], vec!['#', ' ', ' ', '#']]
        );
    }

    #[test]
    fn test_parse_keeps_ragged_rows() {
        let maze = maze(&["#####", "#@", "###"]);

        assert_eq!(maze.width(), 5);
        assert_eq!(maze.cell(Position::new(1, 1)), Some('@'));
        assert_eq!(maze.cell(Position::new(1, 2)), None);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let maze = maze(&["@ "]);

        assert_eq!(maze.cell(Position::new(0, 2)), None);
        assert_eq!(maze.cell(Position::new(1, 0)), None);
    }

    #[test]
    fn test_set_cell_ignores_out_of_bounds() {
        let mut maze = maze(&["@."]);
        let before = maze.clone();

        maze.set_cell(Position::new(5, 5), '#');
        assert_eq!(maze, before);

        maze.set_cell(Position::new(0, 1), '$');
        assert_eq!(maze.cell(Position::new(0, 1)), Some('$'));
    }

    #[test]
    fn test_is_teleport() {
        for reserved in [WALL, EMPTY, PLAYER, FINISH] {
            assert!(!is_teleport(reserved), "'{reserved}' is a reserved symbol");
        }
        for symbol in ['A', 'z', '*', '1', EMPTY_ALIAS] {
            assert!(is_teleport(symbol), "'{symbol}' should be a teleport symbol");
        }
    }

    #[test]
    fn test_player_position_first_in_row_major_order() {
        let maze = maze(&["#####", "#  @#", "#####"]);

        assert_eq!(
            maze.player_position().expect("player should be found"),
            Position::new(1, 3)
        );
    }

    #[test]
    fn test_player_position_missing() {
        let maze = maze(&["###", "# #", "###"]);

        assert!(matches!(
            maze.player_position(),
            Err(MazeError::MissingPlayer)
        ));
    }

    #[test]
    fn test_player_position_multiple() {
        let maze = maze(&["#@#", "# #", "#@#"]);

        let Err(MazeError::MultiplePlayers { first, second }) = maze.player_position() else {
            panic!("two player markers should be rejected");
        };
        assert_eq!(first, Position::new(0, 1));
        assert_eq!(second, Position::new(2, 1));
    }

    #[test]
    fn test_teleports_registers_pairs_in_scan_order() {
        let maze = maze(&["@ A", " # ", "A B", "B  "]);

        let teleports = maze.teleports().expect("teleports should be valid");

        assert_eq!(teleports.len(), 2);
        assert_eq!(
            teleports.endpoints('A'),
            Some([Position::new(0, 2), Position::new(2, 0)])
        );
        assert_eq!(
            teleports.endpoints('B'),
            Some([Position::new(2, 2), Position::new(3, 0)])
        );
        assert_eq!(teleports.endpoints('C'), None);
    }

    #[test]
    fn test_teleports_rejects_third_occurrence() {
        let maze = maze(&["@X ", "X X"]);

        let Err(MazeError::DuplicateTeleportSymbol { symbol, position }) = maze.teleports() else {
            panic!("a third occurrence should be rejected");
        };
        assert_eq!(symbol, 'X');
        assert_eq!(position, Position::new(1, 2));
    }

    #[test]
    fn test_teleports_rejects_single_occurrence() {
        let maze = maze(&["@ X", "   "]);

        let Err(MazeError::UnpairedTeleportSymbol { symbol, position }) = maze.teleports() else {
            panic!("a lone teleport symbol should be rejected");
        };
        assert_eq!(symbol, 'X');
        assert_eq!(position, Position::new(0, 2));
    }

    #[test]
    fn test_teleports_empty_for_plain_maze() {
        let maze = maze(&["#####", "#@ $#", "#####"]);

        assert_eq!(maze.teleports().expect("plain maze is valid").len(), 0);
    }

    #[test]
    fn test_destination_picks_other_endpoint() {
        let maze = maze(&["@ A", "   ", "A  "]);
        let teleports = maze.teleports().expect("teleports should be valid");
        let first = Position::new(0, 2);
        let second = Position::new(2, 0);

        assert_eq!(teleports.destination('A', first), Some(second));
        assert_eq!(teleports.destination('A', second), Some(first));
        assert_eq!(teleports.destination('Q', first), None);
    }

    #[test]
    fn test_error_messages() {
        let duplicate = MazeError::DuplicateTeleportSymbol {
            symbol: 'X',
            position: Position::new(1, 2),
        };
        let unreadable = MazeError::Io {
            path: PathBuf::from("mazes/missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert_eq!(
            duplicate.to_string(),
            "teleport symbol 'X' appears more than twice, again at (1, 2)"
        );
        assert_eq!(
            unreadable.to_string(),
            "failed to read maze file mazes/missing.txt"
        );
        assert_eq!(
            MazeError::MissingPlayer.to_string(),
            "maze has no player marker '@'"
        );
        assert_eq!(
            MazeError::MultiplePlayers {
                first: Position::new(0, 0),
                second: Position::new(2, 3),
            }
            .to_string(),
            "maze has more than one player marker '@', at (0, 0) and (2, 3)"
        );
        assert!(
            unreadable.source().is_some(),
            "io errors should expose their cause"
        );
        assert!(duplicate.source().is_none());
    }
}
