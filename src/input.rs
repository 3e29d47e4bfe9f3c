use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical headings for the snake, including the resting heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No heading; the snake has not been set in motion.
    Stationary,
}

impl Direction {
    /// Returns the opposite direction. `Stationary` is its own opposite.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Stationary => Self::Stationary,
        }
    }

    /// Unit step `(dx, dy)` in tile coordinates; y grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Stationary => (0, 0),
        }
    }

    #[must_use]
    pub fn is_moving(self) -> bool {
        self != Self::Stationary
    }
}

/// Returns whether a heading change is legal (no immediate 180° turns).
///
/// Any heading is legal while the snake is stationary.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !current.is_moving() || next != current.opposite()
}

/// Controller commands produced by the input adapter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    Start,
    TogglePause,
    Reset,
    /// Repaint the current state, e.g. after a terminal resize.
    Redraw,
    Quit,
}

/// Translates one key event into a command; unrecognized keys yield `None`.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Direction(Direction::Right),
        KeyCode::Char(' ' | 'p' | 'P') => Command::TogglePause,
        KeyCode::Enter => Command::Start,
        KeyCode::Char('r' | 'R') => Command::Reset,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };

    Some(command)
}

/// Polls the terminal for keyboard input.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one key and maps it to a command.
    pub fn poll_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(map_event(event::read()?))
    }
}

/// Translates one terminal event into a command.
#[must_use]
pub fn map_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => map_key_event(key),
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}
