//! Core application state and logic for the maze game.

use std::path::Path;

use color_eyre::eyre::Result;
use log::{debug, info};
use ratatui::{backend::Backend, Terminal};

use crate::{
    events::{self, KeySource},
    file_loader,
    movement::{GameState, Step},
    types::{Command, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and keypresses will write to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// quits or leaves the congratulations screen, but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Game being played.
    ///
    /// This field holds the grid, player position and teleport registry that every move acts on.
    pub(crate) game: GameState,
    /// Game as it was loaded.
    ///
    /// This field holds an untouched copy of the game, used to start over when the user restarts.
    pub(crate) initial: GameState,
}

impl App {
    /// Loads a maze file and builds the application around it.
    ///
    /// # Errors
    ///
    /// This function fails when the maze file cannot be read or does not hold a playable maze.
    pub fn load(path: &Path) -> Result<Self> {
        let maze = file_loader::load(path)?;
        let game = GameState::new(maze)?;

        info!(
            "starting maze {} at {} with {} teleport pair(s)",
            game.maze().name,
            game.position(),
            game.teleports().len()
        );

        Ok(Self::new(game))
    }

    /// Creates a new instance of the App structure around a game.
    pub(crate) fn new(game: GameState) -> Self {
        Self {
            exit: false,
            screen: Screen::Playing,
            initial: game.clone(),
            game,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function redraws the screen and handles one turn of input per iteration. The loop
    /// continues until the exit condition is `true`, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when drawing fails
    /// - any error raised by the key source
    pub fn run<B: Backend, K: KeySource>(
        &mut self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
    ) -> Result<()> {
        while !self.exit {
            let _ = terminal.draw(|frame| ui::draw(self, frame))?;
            events::handle_events(self, keys)?;
        }

        Ok(())
    }

    /// Applies a single player command to the application state.
    pub(crate) fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("quit at {}", self.game.position());
                self.exit = true;
            }
            Command::Restart => {
                info!("restarting maze {}", self.game.maze().name);
                self.game = self.initial.clone();
            }
            Command::Move(direction) => match self.game.step(direction) {
                Step::Blocked => debug!("{direction:?} blocked at {}", self.game.position()),
                Step::Moved => debug!(
                    "{direction:?} to {} over '{}'",
                    self.game.position(),
                    self.game.previous_symbol()
                ),
                Step::Teleported { from, to } => info!("teleported from {from} to {to}"),
                Step::Finished => {
                    info!("finish reached at {}", self.game.position());
                    self.screen = Screen::Won;
                }
            },
        }
    }
}
