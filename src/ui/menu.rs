use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::Collision;

/// Draws the ready overlay shown before a run starts.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[Space] Pause  [R] Reset"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " start ", lines);
}

/// Draws the pause overlay.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[R] Reset  [Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over overlay with the final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    collision: Option<Collision>,
) {
    let lines = vec![
        Line::from("GAME OVER").style(Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(match collision {
            Some(Collision::Wall) => "Cause: hit wall",
            Some(Collision::SelfHit) => "Cause: hit yourself",
            Some(Collision::Clear) | None => "",
        }),
        Line::from(""),
        Line::from("[R] Reset  [Enter] Play Again"),
    ];

    render_popup(frame, area, " game over ", lines);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'_>>) {
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let height = lines.len().saturating_add(2);
    let popup = centered_popup(
        area,
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}
