//! User interface rendering functions for all application screens.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{
    map::{is_teleport, Maze, FINISH, PLAYER, WALL},
    types::Screen,
    App,
};

/// Rules of the game, shown above the maze on every screen.
pub(crate) const RULES: [&str; 7] = [
    "The goal is to reach the $",
    "- use 'W' to move up",
    "- use 'S' to move down",
    "- use 'A' to move left",
    "- use 'D' to move right",
    "- use 'R' to restart",
    "- use 'Q' to quit",
];

/// Key hint shown below the maze while playing.
const PLAYING_HINT: &str = "(w/a/s/d) move / (r) restart / (q) quit";

/// Title of the maze block once the finish is reached.
pub(crate) const WON_TITLE: &str = "Congratulations :-)";

/// Key hint shown below the maze once the finish is reached.
const WON_HINT: &str = "(any key) exit";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure. Both screens show the rules and the grid; they differ in the title and key hint
/// around the grid.
pub(crate) fn draw(app: &App, frame: &mut Frame) {
    clear(frame);

    let maze = app.game.maze();
    match app.screen {
        Screen::Playing => {
            maze_screen(frame, maze, &format!("Maze: {}", maze.name), PLAYING_HINT);
        }
        Screen::Won => maze_screen(frame, maze, WON_TITLE, WON_HINT),
    }
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the rules block and the grid block, centered on screen.
fn maze_screen(frame: &mut Frame, maze: &Maze, title: &str, hint: &str) {
    let content_width = RULES
        .iter()
        .map(|rule| rule.chars().count())
        .chain([
            grid_width(maze),
            title.chars().count(),
            hint.chars().count(),
        ])
        .max()
        .unwrap_or(0);

    let [rules_area, maze_area] = layout(frame.area(), content_width + 2, maze.height() + 2);

    let rules = Paragraph::new(RULES.map(Line::raw).to_vec()).block(
        Block::bordered()
            .title("Rules")
            .title_alignment(Alignment::Center)
            .style(Color::Green)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(rules, rules_area);

    let grid = Paragraph::new(
        maze.cells
            .iter()
            .map(Vec::as_slice)
            .map(grid_line)
            .collect::<Vec<_>>(),
    )
    .block(
        Block::bordered()
            .title(title)
            .title_bottom(hint)
            .title_alignment(Alignment::Center)
            .style(Color::Green)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(grid, maze_area);
}

/// Splits the screen into a centered column holding the rules block above the grid block.
fn layout(area: Rect, width: usize, grid_height: usize) -> [Rect; 2] {
    let [column] = Layout::horizontal([Constraint::Length(cells(width))])
        .flex(Flex::Center)
        .areas(area);

    Layout::vertical([
        Constraint::Length(cells(RULES.len() + 2)),
        Constraint::Length(cells(grid_height)),
    ])
    .flex(Flex::Center)
    .areas(column)
}

/// Converts a length to terminal cells, saturating at the largest representable size.
fn cells(length: usize) -> u16 {
    u16::try_from(length).unwrap_or(u16::MAX)
}

/// Width of the rendered grid, with cells separated by single spaces.
fn grid_width(maze: &Maze) -> usize {
    (maze.width() * 2).saturating_sub(1)
}

/// Renders one grid row with its cells separated by spaces.
pub(crate) fn grid_line(row: &[char]) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (idx, &symbol) in row.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(symbol.to_string(), cell_style(symbol)));
    }

    Line::from(spans)
}

/// Picks the style a cell symbol is drawn with.
fn cell_style(symbol: char) -> Style {
    match symbol {
        PLAYER => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        FINISH => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        WALL => Style::default().fg(Color::Green),
        symbol if is_teleport(symbol) => Style::default().fg(Color::Magenta),
        _ => Style::default(),
    }
}
