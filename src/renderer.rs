use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::collision::Collision;
use crate::game::GameStatus;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns used to draw one tile, keeping tiles roughly square.
const TILE_COLUMNS: u16 = 2;

const GLYPH_EMPTY: &str = "· ";
const GLYPH_BODY: &str = "██";
const GLYPH_FOOD: &str = "● ";
const GLYPH_HEAD_UP: &str = "▲▲";
const GLYPH_HEAD_DOWN: &str = "▼▼";
const GLYPH_HEAD_LEFT: &str = "◀█";
const GLYPH_HEAD_RIGHT: &str = "█▶";

const COLOR_GRID: Color = Color::DarkGray;
const COLOR_BODY: Color = Color::Green;
const COLOR_HEAD: Color = Color::LightGreen;
const COLOR_FOOD: Color = Color::Red;

/// Read-only snapshot handed to a renderer after each settled change.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub status: GameStatus,
    pub score: u32,
    pub speed: u32,
    pub grid: Grid,
    pub collision: Option<Collision>,
}

/// Draws game state; has no way to influence it.
pub trait Renderer {
    fn render(&mut self, view: &GameView<'_>);
}

/// Renders into the alternate screen of a terminal session.
pub struct TerminalRenderer {
    session: TerminalSession,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(session: TerminalSession) -> Self {
        Self { session }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &GameView<'_>) {
        let result = self
            .session
            .terminal_mut()
            .draw(|frame| render_frame(frame, view));

        if let Err(error) = result {
            tracing::warn!(%error, "failed to draw frame");
        }
    }
}

/// Renders the full game frame from a snapshot.
pub fn render_frame(frame: &mut Frame<'_>, view: &GameView<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, view);
    let board = board_area(play_area, view.grid);

    let block = Block::bordered().border_style(Style::new().fg(COLOR_GRID));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_tiles(frame, inner, view.grid);
    render_food(frame, inner, view);
    render_snake(frame, inner, view);

    match view.status {
        GameStatus::Idle => render_start_menu(frame, board),
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::GameOver => render_game_over_menu(frame, board, view.score, view.collision),
        GameStatus::Running => {}
    }
}

fn board_area(area: Rect, grid: Grid) -> Rect {
    let side = u16::try_from(grid.tile_count()).unwrap_or(u16::MAX);
    let width = side.saturating_mul(TILE_COLUMNS).saturating_add(2);
    let height = side.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board
}

fn render_tiles(frame: &mut Frame<'_>, inner: Rect, grid: Grid) {
    let style = Style::new().fg(COLOR_GRID);
    let buffer = frame.buffer_mut();

    for y in 0..grid.tile_count() {
        for x in 0..grid.tile_count() {
            if let Some((column, row)) = tile_to_terminal(inner, grid, Position { x, y }) {
                buffer.set_string(column, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, view: &GameView<'_>) {
    let Some((x, y)) = tile_to_terminal(inner, view.grid, view.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: &GameView<'_>) {
    let buffer = frame.buffer_mut();

    for segment in view.snake.body_excluding_head() {
        if let Some((x, y)) = tile_to_terminal(inner, view.grid, *segment) {
            buffer.set_string(x, y, GLYPH_BODY, Style::new().fg(COLOR_BODY));
        }
    }

    if let Some((x, y)) = tile_to_terminal(inner, view.grid, view.snake.head()) {
        buffer.set_string(
            x,
            y,
            head_glyph(view.snake.direction()),
            Style::new().fg(COLOR_HEAD).add_modifier(Modifier::BOLD),
        );
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right | Direction::Stationary => GLYPH_HEAD_RIGHT,
    }
}

fn tile_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if !grid.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(TILE_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(TILE_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
