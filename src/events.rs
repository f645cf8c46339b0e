//! Event handling functions for keyboard input and application state updates.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    types::{Command, Direction, Screen},
    App,
};

/// Terminal input relevant to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal changed size and the screen must be drawn again.
    Resize,
}

/// Source of single keypresses.
///
/// This trait is the only seam between the game and the terminal. The game blocks on
/// [`read_input`](KeySource::read_input) once per turn.
pub trait KeySource {
    /// Blocks until the next keypress or resize and returns it.
    ///
    /// # Errors
    ///
    /// This function fails when no further input can be obtained.
    fn read_input(&mut self) -> Result<Input>;
}

/// Keypresses read from the terminal.
///
/// The terminal is expected to be in raw mode already, which [`ratatui::init`] takes care of.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_input(&mut self) -> Result<Input> {
        loop {
            match event::read()? {
                // Some platforms also report key releases.
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Input::Key(key)),
                Event::Resize(..) => return Ok(Input::Resize),
                _ => {}
            }
        }
    }
}

/// Maps a keypress to a game command.
///
/// Letters are matched case-insensitively. Keys outside the command set yield `None`.
pub(crate) fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(symbol) => match symbol.to_ascii_uppercase() {
            'W' => Some(Command::Move(Direction::Up)),
            'S' => Some(Command::Move(Direction::Down)),
            'A' => Some(Command::Move(Direction::Left)),
            'D' => Some(Command::Move(Direction::Right)),
            'R' => Some(Command::Restart),
            'Q' => Some(Command::Quit),
            _ => None,
        },
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        _ => None,
    }
}

/// Reads keypresses until one of them maps to a command.
///
/// Returns `None` when the terminal is resized first, so the caller can redraw.
///
/// # Errors
///
/// This function fails when the key source does.
pub(crate) fn next_command<K: KeySource>(keys: &mut K) -> Result<Option<Command>> {
    loop {
        match keys.read_input()? {
            Input::Key(key) => {
                if let Some(command) = command_for(key) {
                    return Ok(Some(command));
                }
            }
            Input::Resize => return Ok(None),
        }
    }
}

/// Handles one turn of input and updates the application state accordingly.
///
/// While playing, this function waits for the next valid command and applies it. On the
/// congratulations screen any keypress ends the application. A resize ends the turn without
/// changing anything, which gets the screen redrawn.
///
/// # Errors
///
/// This function fails when the key source does.
pub(crate) fn handle_events<K: KeySource>(app: &mut App, keys: &mut K) -> Result<()> {
    match app.screen {
        Screen::Playing => {
            if let Some(command) = next_command(keys)? {
                app.apply(command);
            }
        }
        Screen::Won => {
            if let Input::Key(_) = keys.read_input()? {
                app.exit = true;
            }
        }
    }

    Ok(())
}

/// Key source replaying a fixed script.
#[cfg(test)]
pub(crate) struct ScriptedKeys {
    /// Inputs still to be replayed.
    inputs: std::collections::VecDeque<Input>,
}

#[cfg(test)]
impl ScriptedKeys {
    /// Builds a script typing every character of `keys` without modifiers.
    pub(crate) fn typing(keys: &str) -> Self {
        Self::new(
            keys.chars()
                .map(|symbol| {
                    Input::Key(KeyEvent::new(KeyCode::Char(symbol), KeyModifiers::NONE))
                })
                .collect(),
        )
    }

    /// Builds a script from raw inputs.
    pub(crate) fn new(inputs: Vec<Input>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }

    /// Number of inputs not yet read.
    pub(crate) fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn read_input(&mut self) -> Result<Input> {
        use color_eyre::eyre::OptionExt as _;

        self.inputs.pop_front().ok_or_eyre("key script exhausted")
    }
}
