//! Movement engine module.
//!
//! This module contains the [`GameState`] the player moves through. Every step checks the
//! destination, swaps the player marker between cells and resolves teleport jumps.

use crate::{
    map::{is_teleport, Maze, MazeError, Teleports, EMPTY, FINISH, PLAYER, WALL},
    types::{Direction, Position},
};

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// The destination was a wall or outside the grid. Nothing changed.
    Blocked,
    /// The player moved one cell.
    Moved,
    /// The player landed on a teleport endpoint and was moved to the other one.
    Teleported {
        /// Endpoint the player stepped on.
        from: Position,
        /// Endpoint the player was sent to.
        to: Position,
    },
    /// The player reached the finish marker.
    Finished,
}

/// Game state container.
///
/// This structure owns the grid being played together with the player position and the symbol the
/// player is currently standing on. The grid always holds exactly one player marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GameState {
    /// Grid being played.
    maze: Maze,
    /// Cell holding the player marker.
    player: Position,
    /// Symbol the player marker covers.
    ///
    /// This field holds the content of the player's cell from just before the player arrived, so
    /// it can be written back once the player leaves.
    previous: char,
    /// Teleport endpoints of the grid.
    teleports: Teleports,
}

impl GameState {
    /// Builds the initial state for a maze.
    ///
    /// # Errors
    ///
    /// This function fails for grids with a bad player marker count or a bad teleport symbol, see
    /// [`Maze::player_position`] and [`Maze::teleports`].
    pub(crate) fn new(maze: Maze) -> Result<Self, MazeError> {
        let player = maze.player_position()?;
        let teleports = maze.teleports()?;

        Ok(Self {
            maze,
            player,
            previous: EMPTY,
            teleports,
        })
    }

    /// Grid in its current state.
    pub(crate) const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Cell currently holding the player.
    pub(crate) const fn position(&self) -> Position {
        self.player
    }

    /// Symbol covered by the player marker.
    pub(crate) const fn previous_symbol(&self) -> char {
        self.previous
    }

    /// Teleport endpoints of the grid.
    pub(crate) const fn teleports(&self) -> &Teleports {
        &self.teleports
    }

    /// Whether the player stands on the finish marker.
    pub(crate) const fn is_finished(&self) -> bool {
        self.previous == FINISH
    }

    /// Checks whether the player may step in `direction`.
    ///
    /// The destination must lie inside the grid, including inside its own row, and must not be a
    /// wall. On success this returns the destination together with its current symbol.
    fn can_move(&self, direction: Direction) -> Option<(Position, char)> {
        let destination = self.player.step(direction)?;
        let symbol = self.maze.cell(destination)?;

        (symbol != WALL).then_some((destination, symbol))
    }

    /// Moves the player one cell in `direction`.
    ///
    /// The vacated cell gets its previous symbol back and the destination's symbol is remembered
    /// in its place. Landing on a teleport symbol restores that symbol and sends the player to the
    /// other endpoint of the pair, while the remembered symbol stays the teleport symbol.
    pub(crate) fn step(&mut self, direction: Direction) -> Step {
        let Some((destination, symbol)) = self.can_move(direction) else {
            return Step::Blocked;
        };

        self.maze.set_cell(self.player, self.previous);
        self.previous = symbol;
        self.maze.set_cell(destination, PLAYER);
        self.player = destination;

        if is_teleport(symbol) {
            if let Some(exit) = self.teleports.destination(symbol, destination) {
                self.maze.set_cell(destination, symbol);
                self.maze.set_cell(exit, PLAYER);
                self.player = exit;

                return Step::Teleported {
                    from: destination,
                    to: exit,
                };
            }
        }

        if self.is_finished() {
            Step::Finished
        } else {
            Step::Moved
        }
    }
}
