//! Type definitions for grid coordinates, player commands and screens.

use std::fmt;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and how the next keypress gets interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is displayed and the player moves.
    Playing,
    /// Congratulations screen.
    ///
    /// This variant represents the screen shown once the player reaches the finish marker. Any
    /// keypress on it ends the program.
    Won,
}

/// Movement directions on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Returns the `(row, col)` offset of a single step in this direction.
    pub(crate) const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Player commands accepted by the input loop.
///
/// Every keypress either maps to one of these variants or is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move one cell in the given direction.
    Move(Direction),
    /// Put the maze back into the state it was loaded in.
    Restart,
    /// Leave the game immediately.
    Quit,
}

/// Grid coordinate of a single cell.
///
/// Coordinates are unsigned, so a position can never lie above or to the left of the grid. Whether
/// it lies inside the grid is decided by the maze it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Position {
    /// Zero-based row index.
    pub(crate) row: usize,
    /// Zero-based column index.
    pub(crate) col: usize,
}

impl Position {
    /// Builds a position from its row and column.
    pub(crate) const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// This function yields `None` when the step would cross the top or left edge of the grid.
    /// Steps past the bottom or right edge are left for the maze to reject.
    pub(crate) const fn step(self, direction: Direction) -> Option<Self> {
        let (row_offset, col_offset) = direction.offset();

        let Some(row) = self.row.checked_add_signed(row_offset) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_offset) else {
            return None;
        };

        Some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}
